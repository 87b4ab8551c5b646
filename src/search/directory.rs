//! Recursive directory search without context.
//!
//! The walk is top-down: a directory's files are scanned in the order the
//! filesystem lists them, then its subdirectories are entered in that same
//! order. Nothing is sorted. Symlinked directories are not entered, which
//! keeps the walk free of cycles without a depth limit.
//!
//! Files that cannot be read are treated as if they were not there. The skip
//! is silent on purpose: an unreadable file is excluded, not reported.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{KeywordMatcher, Match, read_text_lossy, split_lines};
use crate::error::{SearchError, SearchResult};

/// Extensions searched when the caller gives no file pattern.
pub const TEXT_EXTENSIONS: &[&str] = &[
    ".py", ".txt", ".md", ".json", ".xml", ".html", ".css", ".js", ".ts", ".java", ".cpp", ".c",
    ".h", ".hpp", ".rs", ".go", ".rb", ".php", ".sh", ".yaml", ".yml", ".toml", ".ini", ".cfg",
    ".conf",
];

/// Which file names take part in a directory search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileFilter {
    /// Raw suffix test on the file name: `"py"` accepts `copy.py` and `snappy`.
    Suffix(String),
    /// Extension (case-insensitive) must be in [`TEXT_EXTENSIONS`].
    TextExtensions,
}

impl FileFilter {
    /// Build a filter from the optional `file_pattern` argument.
    /// An empty pattern means "no pattern".
    pub fn from_pattern(pattern: Option<&str>) -> Self {
        match pattern {
            Some(p) if !p.is_empty() => Self::Suffix(p.to_owned()),
            _ => Self::TextExtensions,
        }
    }

    pub fn accepts(&self, file_name: &OsStr) -> bool {
        let name = file_name.to_string_lossy();
        match self {
            Self::Suffix(suffix) => name.ends_with(suffix.as_str()),
            Self::TextExtensions => extension_of(&name).is_some_and(|ext| {
                let ext = ext.to_lowercase();
                TEXT_EXTENSIONS.contains(&ext.as_str())
            }),
        }
    }
}

/// Extension including its dot. Leading dots belong to the stem, so
/// `.bashrc` has none while `archive.tar.gz` has `.gz`.
fn extension_of(name: &str) -> Option<&str> {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    name[stem_start..].rfind('.').map(|i| &name[stem_start + i..])
}

/// All hits in one file, keyed by its path relative to the search root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatches {
    pub relative_path: PathBuf,
    /// Ascending by line number; never empty.
    pub matches: Vec<Match>,
}

/// Search every accepted file under `root` for `matcher`.
///
/// Returns one entry per file with at least one hit, in walk order. An empty
/// vector means nothing matched.
pub fn search_directory(
    root: &Path,
    shown: &str,
    matcher: &KeywordMatcher,
    filter: &FileFilter,
) -> SearchResult<Vec<FileMatches>> {
    let meta = fs::metadata(root).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => SearchError::DirectoryNotFound {
            path: shown.to_owned(),
        },
        _ => SearchError::Walk {
            path: shown.to_owned(),
            source,
        },
    })?;
    if !meta.is_dir() {
        return Err(SearchError::NotADirectory {
            path: shown.to_owned(),
        });
    }

    let top = fs::read_dir(root).map_err(|source| SearchError::Walk {
        path: shown.to_owned(),
        source,
    })?;

    let mut results = Vec::new();
    let mut scanned = 0usize;
    walk(top, &mut |path| {
        let accepted = path.file_name().is_some_and(|name| filter.accepts(name));
        if !accepted {
            return;
        }
        scanned += 1;
        let Some(matches) = scan_file(path, matcher) else {
            return;
        };
        if matches.is_empty() {
            return;
        }
        let relative_path = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        results.push(FileMatches {
            relative_path,
            matches,
        });
    });

    debug!(
        root = %root.display(),
        scanned,
        files_with_matches = results.len(),
        "directory scanned"
    );
    Ok(results)
}

/// Scan one file without context. `None` when the file cannot be read.
fn scan_file(path: &Path, matcher: &KeywordMatcher) -> Option<Vec<Match>> {
    let content = read_text_lossy(path, "").ok()?;
    let matches = split_lines(&content)
        .into_iter()
        .enumerate()
        .filter(|(_, line)| matcher.is_match(line))
        .map(|(idx, line)| Match {
            line_number: idx + 1,
            line_text: line.to_owned(),
            context: Vec::new(),
        })
        .collect();
    Some(matches)
}

/// Visit every file reachable from `top`, files of a directory before its
/// subdirectories. Unlistable subdirectories and unreadable entries are
/// skipped.
///
/// Pending subdirectories are kept as paths and listed only when popped, so
/// at most one directory handle is open at a time.
fn walk(top: fs::ReadDir, visit: &mut impl FnMut(&Path)) {
    // Next directory to list is on top.
    let mut pending: Vec<PathBuf> = Vec::new();
    let mut current = Some(top);

    while let Some(entries) = current.take() {
        let mut subdirs = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            match entry_kind(&entry) {
                EntryKind::Dir => subdirs.push(path),
                EntryKind::File => visit(&path),
                EntryKind::Skip => {}
            }
        }
        pending.extend(subdirs.into_iter().rev());

        while let Some(dir) = pending.pop() {
            if let Ok(entries) = fs::read_dir(&dir) {
                current = Some(entries);
                break;
            }
        }
    }
}

enum EntryKind {
    Dir,
    File,
    Skip,
}

fn entry_kind(entry: &fs::DirEntry) -> EntryKind {
    let Ok(ft) = entry.file_type() else {
        return EntryKind::Skip;
    };
    if ft.is_dir() {
        return EntryKind::Dir;
    }
    if ft.is_file() {
        return EntryKind::File;
    }
    if ft.is_symlink() {
        // Follow to see what it points at; linked directories are not entered.
        return match fs::metadata(entry.path()) {
            Ok(m) if m.is_file() => EntryKind::File,
            _ => EntryKind::Skip,
        };
    }
    // Sockets, FIFOs and devices.
    EntryKind::Skip
}
