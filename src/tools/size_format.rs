const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// 將位元組數轉為易讀格式，例如 `1.5 MB`
///
/// 超過 GB 範圍的值一律以 TB 表示。
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{size:.1} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.1} TB")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0.0 B");
        assert_eq!(format_file_size(100), "100.0 B");
        assert_eq!(format_file_size(1023), "1023.0 B");
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_572_864), "1.5 MB");
        assert_eq!(format_file_size(1_073_741_824), "1.0 GB");
    }

    #[test]
    fn test_format_file_size_terabytes() {
        assert_eq!(format_file_size(1_099_511_627_776), "1.0 TB");
        // TB 之後不再進位
        assert_eq!(format_file_size(1_125_899_906_842_624), "1024.0 TB");
    }
}
