//! `.m3u` / `.m3u8` playlist parsing
//!
//! Treated as a plain sequence of URLs: one per line, blank lines and
//! `#`-prefixed comment/directive lines skipped.

/// Extract the entry URLs from an `.m3u`/`.m3u8` document, in order
pub fn entries(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_skip_comments_and_blanks() {
        let input = "#EXTM3U\n#EXTINF:-1,Some Station\n\nhttps://x/a.mp3\nhttps://x/b.aac\n";
        assert_eq!(
            entries(input),
            vec!["https://x/a.mp3".to_string(), "https://x/b.aac".to_string()]
        );
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(entries("  https://x/a.mp3  \n"), vec!["https://x/a.mp3".to_string()]);
    }

    #[test]
    fn test_empty_document() {
        assert!(entries("").is_empty());
        assert!(entries("#EXTM3U\n\n").is_empty());
    }
}
