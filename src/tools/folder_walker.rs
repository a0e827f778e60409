use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 走訪到的單一資料夾
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub path: PathBuf,
    /// 直接子資料夾名稱
    pub subfolders: Vec<String>,
    /// 直接子檔案名稱
    pub filenames: Vec<String>,
}

/// 單一資料夾處理失敗，已略過並回報
#[derive(Debug)]
pub struct FolderFailure {
    pub path: PathBuf,
    pub error: anyhow::Error,
}

/// 前序走訪資料夾樹，每個資料夾只產生一次
///
/// 無法讀取的資料夾會產生一個 [`FolderFailure`]，之後繼續走訪其他資料夾。
pub struct FolderWalker {
    base_path: PathBuf,
    inner: walkdir::IntoIter,
    last_failed: Option<PathBuf>,
}

impl FolderWalker {
    #[must_use]
    pub fn new(base_path: &Path) -> Self {
        Self {
            base_path: base_path.to_path_buf(),
            inner: WalkDir::new(base_path)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter(),
            last_failed: None,
        }
    }
}

impl Iterator for FolderWalker {
    type Item = Result<FolderEntry, FolderFailure>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    // walkdir 進入無法讀取的資料夾時會再回報一次，已由 read_folder 回報過
                    if e.path().is_some() && e.path() == self.last_failed.as_deref() {
                        debug!("略過重複的走訪錯誤: {e}");
                        continue;
                    }
                    let path = e
                        .path()
                        .map_or_else(|| self.base_path.clone(), Path::to_path_buf);
                    let error = anyhow::Error::new(e)
                        .context(format!("無法走訪: {}", path.display()));
                    return Some(Err(FolderFailure { path, error }));
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            return Some(read_folder(entry.path()).map_err(|error| {
                self.last_failed = Some(entry.path().to_path_buf());
                FolderFailure {
                    path: entry.path().to_path_buf(),
                    error,
                }
            }));
        }
    }
}

/// 列出資料夾的直接子項目，依名稱排序
pub fn read_folder(path: &Path) -> Result<FolderEntry> {
    let entries =
        fs::read_dir(path).with_context(|| format!("無法讀取目錄: {}", path.display()))?;

    let mut subfolders = Vec::new();
    let mut filenames = Vec::new();

    for entry in entries {
        let entry = entry.with_context(|| format!("讀取目錄項目失敗: {}", path.display()))?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn!("略過非 UTF-8 檔名: {}", Path::new(&raw).display());
                continue;
            }
        };

        // 指向資料夾的連結也算子資料夾，但不會被走訪
        if entry.path().is_dir() {
            subfolders.push(name);
        } else {
            filenames.push(name);
        }
    }

    subfolders.sort();
    filenames.sort();

    Ok(FolderEntry {
        path: path.to_path_buf(),
        subfolders,
        filenames,
    })
}
