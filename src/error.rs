//! Error types for the file-search crate.

use std::io;

/// Search-specific error types.
///
/// Every variant carries the path exactly as the caller supplied it, so the
/// rendered message echoes the caller's own spelling. The `Display` output is
/// the human-readable report returned by the tools.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// No file at the given path.
    #[error("Error: File '{path}' does not exist.")]
    FileNotFound { path: String },

    /// The path exists but is not a regular file.
    #[error("Error: '{path}' is not a file.")]
    NotAFile { path: String },

    /// No directory at the given path.
    #[error("Error: Directory '{path}' does not exist.")]
    DirectoryNotFound { path: String },

    /// The path exists but is not a directory.
    #[error("Error: '{path}' is not a directory.")]
    NotADirectory { path: String },

    #[error("Error: Permission denied. Cannot read file '{path}'.")]
    PermissionDenied { path: String },

    /// The OS refused to hand the content back as text.
    #[error("Error: Cannot decode file '{path}'. It may be a binary file.")]
    Decode { path: String },

    /// Catch-all for reading a single file.
    #[error("Error reading file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The directory walk could not start.
    #[error("Error searching directory '{path}': {source}")]
    Walk {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl SearchError {
    /// Classify an I/O failure that happened while reading `path`.
    pub fn from_read(path: &str, source: io::Error) -> Self {
        let path = path.to_owned();
        match source.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::InvalidData => Self::Decode { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Convenience result type for search operations.
pub type SearchResult<T> = Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_permission_denied() {
        let err = SearchError::from_read("a.txt", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, SearchError::PermissionDenied { .. }));
        assert_eq!(
            err.to_string(),
            "Error: Permission denied. Cannot read file 'a.txt'."
        );
    }

    #[test]
    fn test_classify_invalid_data() {
        let err = SearchError::from_read("blob", io::Error::from(io::ErrorKind::InvalidData));
        assert_eq!(
            err.to_string(),
            "Error: Cannot decode file 'blob'. It may be a binary file."
        );
    }

    #[test]
    fn test_classify_other() {
        let err = SearchError::from_read("x", io::Error::other("disk on fire"));
        assert_eq!(err.to_string(), "Error reading file 'x': disk on fire");
    }
}
