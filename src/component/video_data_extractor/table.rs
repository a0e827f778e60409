//! 將資料夾紀錄轉成表格，交給外部輸出使用

use super::folder_info::FolderRecord;
use serde::Serialize;

/// 表格欄位，順序與 [`FolderRecord`] 欄位一致
pub const COLUMNS: [&str; 16] = [
    "Name",
    "Year",
    "Resolution",
    "Resolution Count",
    "Video Files",
    "Video Files Count",
    "Video Files Size",
    "Video Files Size Count",
    "SRT Files",
    "SRT Files Count",
    "folder_paths",
    "folder_paths Count",
    "Total Files List",
    "Total Files Count",
    "File Formats",
    "Location",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Count(usize),
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<&'static str>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    #[must_use]
    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 取得某一欄的所有值
    #[must_use]
    pub fn column(&self, label: &str) -> Option<Vec<&Cell>> {
        let index = self.columns.iter().position(|c| *c == label)?;
        Some(self.rows.iter().map(|row| &row[index]).collect())
    }
}

impl FolderRecord {
    fn to_row(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.name.clone()),
            Cell::Text(self.year.clone()),
            Cell::Text(self.resolution.clone()),
            Cell::Count(self.resolution_count),
            Cell::List(self.video_files.clone()),
            Cell::Count(self.video_files_count),
            Cell::Text(self.video_files_size.clone()),
            Cell::Count(self.video_files_size_count),
            Cell::List(self.srt_files.clone()),
            Cell::Count(self.srt_files_count),
            Cell::List(self.folder_paths.clone()),
            Cell::Count(self.folder_paths_count),
            Cell::List(self.total_files.clone()),
            Cell::Count(self.total_files_count),
            Cell::List(self.file_formats.iter().cloned().collect()),
            Cell::Text(self.location.clone()),
        ]
    }
}

/// 依走訪順序建立表格，每筆紀錄一列，值不做任何轉換
#[must_use]
pub fn create_table(records: &[FolderRecord]) -> Table {
    Table {
        columns: COLUMNS.to_vec(),
        rows: records.iter().map(FolderRecord::to_row).collect(),
    }
}
