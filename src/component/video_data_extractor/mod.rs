//! 影片資料夾報表元件
//!
//! 掃描基底資料夾下的每個子資料夾，為含有影片或字幕的資料夾建立摘要紀錄，
//! 並轉成表格交給後續輸出

mod extractor;
mod folder_info;
mod main;
mod table;

pub use extractor::{ScanOutcome, VideoDataExtractor};
pub use folder_info::{FolderRecord, extract_resolution, extract_year, total_video_size};
pub use main::VideoDataReport;
pub use table::{COLUMNS, Cell, Table, create_table};

pub use crate::tools::FolderFailure;
