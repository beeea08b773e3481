//! Error types for shortcut creation.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mkurl.
#[derive(Debug, Error)]
pub enum ShortcutError {
    // Input errors
    #[error("Shortcut name cannot be empty.")]
    EmptyName,

    #[error("URL cannot be empty.")]
    EmptyUrl,

    // File system errors
    #[error("Failed to open {path:?} for writing: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },
}

/// Result type alias for shortcut operations.
pub type Result<T> = std::result::Result<T, ShortcutError>;

impl From<std::io::Error> for ShortcutError {
    fn from(err: std::io::Error) -> Self {
        ShortcutError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl ShortcutError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        ShortcutError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Process exit status to report for this error.
    ///
    /// Every failure currently exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            ShortcutError::EmptyName
            | ShortcutError::EmptyUrl
            | ShortcutError::Open { .. }
            | ShortcutError::Io { .. } => 1,
        }
    }

    /// True when the user supplied unusable input rather than the filesystem failing.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ShortcutError::EmptyName | ShortcutError::EmptyUrl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ShortcutError::EmptyName.to_string(),
            "Shortcut name cannot be empty."
        );
        assert_eq!(ShortcutError::EmptyUrl.to_string(), "URL cannot be empty.");
    }

    #[test]
    fn test_exit_codes() {
        let open = ShortcutError::Open {
            path: PathBuf::from("/nowhere/x.url"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(open.exit_code(), 1);
        assert_eq!(ShortcutError::EmptyUrl.exit_code(), 1);
    }

    #[test]
    fn test_invalid_input() {
        assert!(ShortcutError::EmptyName.is_invalid_input());
        assert!(!ShortcutError::from(std::io::Error::from(
            std::io::ErrorKind::PermissionDenied
        ))
        .is_invalid_input());
    }

    #[test]
    fn test_io_with_path_keeps_path() {
        let err = ShortcutError::io_with_path(
            std::io::Error::from(std::io::ErrorKind::Other),
            "/tmp/Example.desktop",
        );
        match err {
            ShortcutError::Io { path, source, .. } => {
                assert_eq!(path, Some(PathBuf::from("/tmp/Example.desktop")));
                assert!(source.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
