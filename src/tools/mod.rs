mod file_classifier;
mod folder_filter;
mod folder_walker;
mod size_format;

pub use file_classifier::{
    SUBTITLE_EXTENSION, VIDEO_EXTENSIONS, classify_files, is_subtitle_file, is_video_file,
};
pub use folder_filter::should_skip_folder;
pub use folder_walker::{FolderEntry, FolderFailure, FolderWalker, read_folder};
pub use size_format::format_file_size;
