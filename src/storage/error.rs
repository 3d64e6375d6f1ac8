//! Storage error types
//!
//! Defines all errors that can occur while reading or writing the mood log.

use thiserror::Error;

/// Errors that can occur in the storage layer
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O operation failed (permissions, disk full, bad path)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Mood name cannot be written in the block format
    #[error("Invalid mood name: {0:?} (expected word characters only)")]
    InvalidMood(String),
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorageError::InvalidMood("very happy".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid mood name: \"very happy\" (expected word characters only)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let storage_err: StorageError = io_err.into();
        assert!(matches!(storage_err, StorageError::Io(_)));
    }
}
