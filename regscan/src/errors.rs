/// Error types for regscan.
///
/// Failures are scoped to the smallest unit that produced them. A
/// [`ScanError::PatternFile`] stops a run before any scanning starts, while the
/// per-file variants ([`ScanError::InvalidPattern`], [`ScanError::FileNotFound`],
/// [`ScanError::PermissionDenied`], [`ScanError::FileRead`] and
/// [`ScanError::EncodingError`]) are reported by the engine and only remove one
/// file's contribution from the totals.
///
/// ```rust,ignore
/// match processor.process_file(path, &sink) {
///     Ok(file_result) => summary.add_file_result(file_result),
///     Err(ScanError::InvalidPattern { pattern, .. }) => // bad regex,
///     Err(e) if e.is_file_read_error() => // unreadable file,
///     Err(e) => // anything else
/// }
/// ```
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur while loading patterns, walking or scanning files
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read pattern file {path}: {source}")]
    PatternFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid UTF-8 in file {path}: {source}")]
    EncodingError {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
    #[error("Cannot open scan root {path}: {source}")]
    WalkRoot {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Directory walk failed: {0}")]
    Walk(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

impl ScanError {
    pub fn pattern_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::PatternFile {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound(path.into())
    }

    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied(path.into())
    }

    /// Maps an I/O failure on `path` to the matching file-level variant
    pub fn from_read_error(path: &Path, error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => Self::file_not_found(path),
            std::io::ErrorKind::PermissionDenied => Self::permission_denied(path),
            _ => Self::FileRead {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }

    pub fn encoding_error(path: impl Into<PathBuf>, source: std::string::FromUtf8Error) -> Self {
        Self::EncodingError {
            path: path.into(),
            source,
        }
    }

    pub fn walk_root(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WalkRoot {
            path: path.into(),
            source,
        }
    }

    pub fn walk(msg: impl Into<String>) -> Self {
        Self::Walk(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// True for the errors raised when a file's contents could not be obtained
    pub fn is_file_read_error(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound(_)
                | Self::PermissionDenied(_)
                | Self::FileRead { .. }
                | Self::EncodingError { .. }
        )
    }
}
