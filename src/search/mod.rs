//! Keyword search kernel shared by both tools.
//!
//! Everything here is synchronous and stateless: each call reads what it
//! needs from disk, scans it line by line, and drops the handle before
//! returning.

pub mod directory;
pub mod file;

use std::path::Path;

use crate::error::{SearchError, SearchResult};

pub use directory::{FileFilter, FileMatches, TEXT_EXTENSIONS, search_directory};
pub use file::{ContextLine, Match, search_file};

/// Case-aware substring test against single lines.
///
/// Containment is a boolean per line: a line holding the keyword three times
/// is still one match.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    needle: String,
    case_sensitive: bool,
}

impl KeywordMatcher {
    pub fn new(keyword: &str, case_sensitive: bool) -> Self {
        let needle = if case_sensitive {
            keyword.to_owned()
        } else {
            keyword.to_lowercase()
        };
        Self {
            needle,
            case_sensitive,
        }
    }

    pub fn is_match(&self, line: &str) -> bool {
        if self.case_sensitive {
            line.contains(self.needle.as_str())
        } else {
            line.to_lowercase().contains(self.needle.as_str())
        }
    }
}

/// Read a whole file as text, replacing invalid UTF-8 with U+FFFD.
///
/// `shown` is the caller's spelling of the path, used in error messages.
pub fn read_text_lossy(path: &Path, shown: &str) -> SearchResult<String> {
    let bytes = std::fs::read(path).map_err(|e| SearchError::from_read(shown, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Split text into lines with universal-newline semantics.
///
/// `\n`, `\r\n` and a bare `\r` all end a line. The terminator is not part
/// of the line, and a terminator at the very end does not start a new one.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = content;
    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(pos) => {
                lines.push(&rest[..pos]);
                let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + skip..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_matches_any_case() {
        let m = KeywordMatcher::new("BeTa", false);
        assert!(m.is_match("the beta release"));
        assert!(m.is_match("BETA"));
        assert!(!m.is_match("alpha"));
    }

    #[test]
    fn test_case_sensitive_rejects_other_case() {
        let m = KeywordMatcher::new("Beta", true);
        assert!(m.is_match("Beta"));
        assert!(!m.is_match("beta"));
        assert!(!m.is_match("BETA"));
    }

    #[test]
    fn test_empty_keyword_matches_every_line() {
        let m = KeywordMatcher::new("", false);
        assert!(m.is_match(""));
        assert!(m.is_match("anything"));
    }

    #[test]
    fn test_split_lines_terminators() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(split_lines("\r\n\r\n"), vec!["", ""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_read_text_lossy_replaces_bad_bytes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("mixed.txt");
        std::fs::write(&path, b"good\xff\xfeline\n").expect("write");

        let text = read_text_lossy(&path, "mixed.txt").expect("lossy read");
        assert!(text.starts_with("good"));
        assert!(text.contains("line"));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_read_text_lossy_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = read_text_lossy(&dir.path().join("gone"), "gone").expect_err("missing");
        assert!(matches!(err, SearchError::FileNotFound { .. }));
    }
}
