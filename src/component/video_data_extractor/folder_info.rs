//! 資料夾摘要紀錄
//!
//! 由資料夾名稱推得年份，由第一個影片檔名推得解析度，並統計影片大小與檔案格式

use crate::tools::format_file_size;
use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

static REGEX_RESOLUTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d{3,4})p").expect("Invalid regex"));

/// 單一資料夾的摘要紀錄
///
/// 只能透過 [`FolderRecord::build`] 建立，所有數量欄位由清單推得。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Resolution")]
    pub resolution: String,
    #[serde(rename = "Resolution Count")]
    pub resolution_count: usize,
    #[serde(rename = "Video Files")]
    pub video_files: Vec<String>,
    #[serde(rename = "Video Files Count")]
    pub video_files_count: usize,
    #[serde(rename = "Video Files Size")]
    pub video_files_size: String,
    #[serde(rename = "Video Files Size Count")]
    pub video_files_size_count: usize,
    #[serde(rename = "SRT Files")]
    pub srt_files: Vec<String>,
    #[serde(rename = "SRT Files Count")]
    pub srt_files_count: usize,
    #[serde(rename = "folder_paths")]
    pub folder_paths: Vec<String>,
    #[serde(rename = "folder_paths Count")]
    pub folder_paths_count: usize,
    #[serde(rename = "Total Files List")]
    pub total_files: Vec<String>,
    #[serde(rename = "Total Files Count")]
    pub total_files_count: usize,
    #[serde(rename = "File Formats")]
    pub file_formats: BTreeSet<String>,
    #[serde(rename = "Location")]
    pub location: String,
}

impl FolderRecord {
    /// 建立資料夾紀錄
    ///
    /// # Arguments
    /// * `folder_path` - 走訪到的資料夾路徑
    /// * `video_files` - 資料夾內的影片檔名
    /// * `srt_files` - 資料夾內的字幕檔名
    ///
    /// # Errors
    /// 任一影片檔無法取得大小，或無法取得絕對路徑時回傳錯誤
    pub fn build(
        folder_path: &Path,
        video_files: Vec<String>,
        srt_files: Vec<String>,
    ) -> Result<Self> {
        let absolute = std::path::absolute(folder_path)
            .with_context(|| format!("無法取得絕對路徑: {}", folder_path.display()))?;
        let location = normalize_path(&absolute).to_string_lossy().into_owned();
        let name = folder_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let year = extract_year(&name);

        let video_size = total_video_size(folder_path, &video_files)?;
        let resolution = video_files
            .first()
            .map(|f| extract_resolution(f))
            .unwrap_or_default();
        let resolution_count = usize::from(!resolution.is_empty());

        let total_files: Vec<String> = video_files.iter().chain(&srt_files).cloned().collect();
        let file_formats = file_formats(&total_files);

        Ok(Self {
            name,
            year,
            resolution,
            resolution_count,
            video_files_count: video_files.len(),
            video_files_size: format_file_size(video_size),
            video_files_size_count: video_files.len(),
            video_files,
            srt_files_count: srt_files.len(),
            srt_files,
            folder_paths: vec![location.clone()],
            folder_paths_count: 1,
            total_files_count: total_files.len(),
            total_files,
            file_formats,
            location,
        })
    }
}

/// 以字面方式去除 `.` 與 `..`，不解析符號連結
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// 取最後一個 `[` 與其後第一個 `]` 之間的文字
///
/// 沒有 `[` 時回傳空字串；有 `[` 但沒有對應的 `]` 時回傳 `[` 之後的全部文字。
#[must_use]
pub fn extract_year(name: &str) -> String {
    let Some((_, after_bracket)) = name.rsplit_once('[') else {
        return String::new();
    };
    let inner = after_bracket
        .split_once(']')
        .map_or(after_bracket, |(inner, _)| inner);
    inner.trim().to_string()
}

/// 從檔名中找出第一個 `720p`、`1080p` 形式的解析度，轉成 `720P`
#[must_use]
pub fn extract_resolution(filename: &str) -> String {
    REGEX_RESOLUTION
        .captures(filename)
        .and_then(|caps| caps.get(1))
        .map(|digits| format!("{}P", digits.as_str()))
        .unwrap_or_default()
}

/// 加總影片檔大小，字幕不計
pub fn total_video_size(folder_path: &Path, video_files: &[String]) -> Result<u64> {
    video_files.iter().try_fold(0u64, |total, file| {
        let path = folder_path.join(file);
        let metadata = fs::metadata(&path)
            .with_context(|| format!("無法取得檔案大小: {}", path.display()))?;
        Ok(total + metadata.len())
    })
}

fn file_formats(files: &[String]) -> BTreeSet<String> {
    files
        .iter()
        .map(|f| f.rsplit_once('.').map_or(f.as_str(), |(_, ext)| ext).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_extract_year() {
        assert_eq!(extract_year("Movie Title [2020]"), "2020");
        assert_eq!(extract_year("Movie Title"), "");
        assert_eq!(extract_year("Movie [Remux] [ 1999 ]"), "1999");
        assert_eq!(extract_year("Movie [2020] Extended"), "2020");
        assert_eq!(extract_year("Movie []"), "");
    }

    #[test]
    fn test_extract_year_unclosed_bracket() {
        assert_eq!(extract_year("Movie [2020"), "2020");
        assert_eq!(extract_year("Movie ["), "");
    }

    #[test]
    fn test_extract_resolution() {
        assert_eq!(extract_resolution("Show.S01.1080p.mkv"), "1080P");
        assert_eq!(extract_resolution("Show.S01.mkv"), "");
        assert_eq!(extract_resolution("movie.720P.mp4"), "720P");
        assert_eq!(extract_resolution("movie.2160p.480p.mp4"), "2160P");
        assert_eq!(extract_resolution("movie.12345p.mp4"), "2345P");
        assert_eq!(extract_resolution("movie.60p.mp4"), "");
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path(Path::new("/media/x/../Movies/./Alpha")),
            PathBuf::from("/media/Movies/Alpha")
        );
        assert_eq!(normalize_path(Path::new("/../media")), PathBuf::from("/media"));
        assert_eq!(normalize_path(Path::new("/media/Alpha")), PathBuf::from("/media/Alpha"));
    }

    #[test]
    fn test_build_record_location_has_no_parent_components() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("x")).unwrap();
        let folder = temp_dir.path().join("Movies/Alpha");
        fs::create_dir_all(&folder).unwrap();

        let record = FolderRecord::build(
            &temp_dir.path().join("x/../Movies/./Alpha"),
            Vec::new(),
            vec!["alpha.srt".to_string()],
        )
        .unwrap();

        assert_eq!(record.name, "Alpha");
        assert_eq!(record.location, folder.to_string_lossy());
        assert_eq!(record.folder_paths, vec![record.location.clone()]);
    }

    #[test]
    fn test_record_keys_match_table_columns() {
        let temp_dir = TempDir::new().unwrap();
        let folder = temp_dir.path().join("Alpha");
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join("alpha.mp4"), "x").unwrap();

        let record =
            FolderRecord::build(&folder, vec!["alpha.mp4".to_string()], Vec::new()).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        let keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();

        let mut expected: Vec<&str> = crate::component::video_data_extractor::COLUMNS.to_vec();
        let mut actual = keys;
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_file_formats_unique() {
        let files = vec![
            "a.mp4".to_string(),
            "b.mp4".to_string(),
            "a.en.srt".to_string(),
        ];
        let formats = file_formats(&files);
        assert_eq!(
            formats.into_iter().collect::<Vec<_>>(),
            vec!["mp4".to_string(), "srt".to_string()]
        );
    }

    #[test]
    fn test_build_record() {
        let temp_dir = TempDir::new().unwrap();
        let folder = temp_dir.path().join("Alpha [2019]");
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join("movie.720p.mp4"), vec![0u8; 1536]).unwrap();
        fs::write(folder.join("extra.mkv"), vec![0u8; 512]).unwrap();
        fs::write(folder.join("movie.srt"), vec![0u8; 4096]).unwrap();

        let record = FolderRecord::build(
            &folder,
            vec!["movie.720p.mp4".to_string(), "extra.mkv".to_string()],
            vec!["movie.srt".to_string()],
        )
        .unwrap();

        assert_eq!(record.name, "Alpha [2019]");
        assert_eq!(record.year, "2019");
        assert_eq!(record.resolution, "720P");
        assert_eq!(record.resolution_count, 1);
        assert_eq!(record.video_files_count, 2);
        assert_eq!(record.video_files_size_count, 2);
        // 字幕大小不計入
        assert_eq!(record.video_files_size, "2.0 KB");
        assert_eq!(record.srt_files_count, 1);
        assert_eq!(
            record.total_files,
            vec!["movie.720p.mp4", "extra.mkv", "movie.srt"]
        );
        assert_eq!(record.total_files_count, 3);
        assert_eq!(record.folder_paths_count, 1);
        assert_eq!(record.folder_paths, vec![record.location.clone()]);
        assert!(Path::new(&record.location).is_absolute());
        assert_eq!(record.file_formats.len(), 3);
    }

    #[test]
    fn test_build_record_subtitles_only() {
        let temp_dir = TempDir::new().unwrap();
        let folder = temp_dir.path().join("Beta");
        fs::create_dir(&folder).unwrap();

        let record =
            FolderRecord::build(&folder, Vec::new(), vec!["beta.srt".to_string()]).unwrap();

        assert_eq!(record.year, "");
        assert_eq!(record.resolution, "");
        assert_eq!(record.resolution_count, 0);
        assert_eq!(record.video_files_size, "0.0 B");
        assert_eq!(record.total_files_count, 1);
    }

    #[test]
    fn test_build_record_missing_video_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = FolderRecord::build(
            temp_dir.path(),
            vec!["gone.mp4".to_string()],
            Vec::new(),
        );

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("gone.mp4"));
    }
}
