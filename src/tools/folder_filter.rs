use std::path::Path;

/// 資料夾是否不產生紀錄
///
/// 路徑包含任一排除字串，或小寫路徑包含 `subs` 時回傳 true。
/// 只影響該資料夾本身，子資料夾仍會被走訪。
#[must_use]
pub fn should_skip_folder(folder_path: &Path, exclude_dirs: &[String]) -> bool {
    let path = folder_path.to_string_lossy();
    exclude_dirs
        .iter()
        .any(|excluded| path.contains(excluded.as_str()))
        || path.to_lowercase().contains("subs")
}
