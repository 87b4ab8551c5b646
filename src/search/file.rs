//! Single-file search with context windows.

use std::path::Path;

use tracing::debug;

use super::{KeywordMatcher, read_text_lossy, split_lines};
use crate::error::{SearchError, SearchResult};

/// One line of a context window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextLine {
    /// 1-based line number.
    pub line_number: usize,
    pub text: String,
    /// True for the line that triggered the match.
    pub is_match: bool,
}

/// A line containing the keyword.
///
/// `context` is empty when produced by the directory search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// 1-based line number.
    pub line_number: usize,
    /// The line without its terminator.
    pub line_text: String,
    pub context: Vec<ContextLine>,
}

/// Search one file for `matcher`, attaching `context_lines` lines of
/// context on each side of every hit.
///
/// Windows are clipped at both ends of the file. Matches come back in
/// ascending line order; an empty vector means the keyword does not occur.
pub fn search_file(
    path: &Path,
    shown: &str,
    matcher: &KeywordMatcher,
    context_lines: usize,
) -> SearchResult<Vec<Match>> {
    let meta = std::fs::metadata(path).map_err(|e| SearchError::from_read(shown, e))?;
    if !meta.is_file() {
        return Err(SearchError::NotAFile {
            path: shown.to_owned(),
        });
    }

    let content = read_text_lossy(path, shown)?;
    let lines = split_lines(&content);
    let total = lines.len();

    let mut matches = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        if !matcher.is_match(line) {
            continue;
        }
        let line_number = idx + 1;
        let (start, end) = context_window(line_number, context_lines, total);
        let context = (start..=end)
            .map(|n| ContextLine {
                line_number: n,
                text: lines[n - 1].to_owned(),
                is_match: n == line_number,
            })
            .collect();
        matches.push(Match {
            line_number,
            line_text: (*line).to_owned(),
            context,
        });
    }

    debug!(path = %path.display(), lines = total, matches = matches.len(), "file scanned");
    Ok(matches)
}

/// Inclusive 1-based window around `line_number`, clipped to `[1, total]`.
const fn context_window(line_number: usize, context_lines: usize, total: usize) -> (usize, usize) {
    let start = line_number.saturating_sub(context_lines);
    let start = if start < 1 { 1 } else { start };
    let end = line_number.saturating_add(context_lines);
    let end = if end > total { total } else { end };
    (start, end)
}
