use super::folder_info::FolderRecord;
use crate::tools::{FolderFailure, FolderWalker, classify_files, should_skip_folder};
use indicatif::ProgressBar;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// 一次掃描的結果
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// 根目錄與基底資料夾名稱組合出的路徑
    pub base_path: PathBuf,
    /// 依走訪順序排列的資料夾紀錄
    pub records: Vec<FolderRecord>,
    pub failures: Vec<FolderFailure>,
    /// 基底資料夾不存在
    pub base_missing: bool,
}

/// 影片資料夾掃描器
pub struct VideoDataExtractor {
    exclude_dirs: Vec<String>,
    progress: ProgressBar,
}

impl Default for VideoDataExtractor {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl VideoDataExtractor {
    #[must_use]
    pub fn new(exclude_dirs: Vec<String>) -> Self {
        Self {
            exclude_dirs,
            progress: ProgressBar::hidden(),
        }
    }

    /// 每走訪一個資料夾就更新一次進度
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// 掃描 `root_dir/base_folder_name` 下所有資料夾
    ///
    /// 基底資料夾不存在時回傳空結果；單一資料夾失敗只會記錄在
    /// `failures`，不會中斷整個掃描。
    pub fn info_extractor(&self, root_dir: &Path, base_folder_name: &str) -> ScanOutcome {
        let base_path = root_dir.join(base_folder_name);
        let mut outcome = ScanOutcome {
            base_path: base_path.clone(),
            ..ScanOutcome::default()
        };

        if !base_path.exists() {
            info!("資料夾不存在: {}", base_path.display());
            outcome.base_missing = true;
            return outcome;
        }

        info!("開始掃描目錄: {}", base_path.display());

        for folder in FolderWalker::new(&base_path) {
            self.progress.inc(1);

            let folder = match folder {
                Ok(folder) => folder,
                Err(failure) => {
                    warn!("走訪資料夾失敗: {:#}", failure.error);
                    outcome.failures.push(failure);
                    continue;
                }
            };

            self.progress
                .set_message(folder.path.to_string_lossy().into_owned());

            if should_skip_folder(&folder.path, &self.exclude_dirs) {
                debug!("跳過資料夾: {}", folder.path.display());
                continue;
            }

            let (video_files, srt_files) = classify_files(&folder.filenames);
            if video_files.is_empty() && srt_files.is_empty() {
                continue;
            }

            match FolderRecord::build(&folder.path, video_files, srt_files) {
                Ok(record) => {
                    debug!(
                        "建立紀錄: {} ({} 個檔案)",
                        record.name, record.total_files_count
                    );
                    outcome.records.push(record);
                }
                Err(error) => {
                    warn!("無法建立資料夾紀錄 {}: {error:#}", folder.path.display());
                    outcome.failures.push(FolderFailure {
                        path: folder.path,
                        error,
                    });
                }
            }
        }

        info!(
            "掃描完成 - 紀錄: {}, 失敗: {}",
            outcome.records.len(),
            outcome.failures.len()
        );

        outcome
    }
}
