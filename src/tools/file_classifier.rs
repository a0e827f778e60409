/// 影片副檔名，大小寫敏感
pub const VIDEO_EXTENSIONS: [&str; 4] = [".mp4", ".mkv", ".avi", ".mov"];

/// 字幕副檔名
pub const SUBTITLE_EXTENSION: &str = ".srt";

#[must_use]
pub fn is_video_file(filename: &str) -> bool {
    VIDEO_EXTENSIONS.iter().any(|ext| filename.ends_with(ext))
}

#[must_use]
pub fn is_subtitle_file(filename: &str) -> bool {
    filename.ends_with(SUBTITLE_EXTENSION)
}

/// 將檔名分成影片與字幕兩組，保持原本順序，其他檔案忽略
#[must_use]
pub fn classify_files(filenames: &[String]) -> (Vec<String>, Vec<String>) {
    let video_files = filenames
        .iter()
        .filter(|f| is_video_file(f))
        .cloned()
        .collect();
    let srt_files = filenames
        .iter()
        .filter(|f| is_subtitle_file(f))
        .cloned()
        .collect();

    (video_files, srt_files)
}
