//! Journal session error types

use crate::storage::StorageError;
use thiserror::Error;

/// Errors surfaced by the journal session, catalog and music player
#[derive(Error, Debug)]
pub enum JournalError {
    /// Reading or appending the mood log failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Scanning an asset or music directory failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Mood is not part of the catalog
    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    /// Audio backend rejected an operation
    #[error("Audio error: {0}")]
    Audio(String),
}

/// Result type for journal operations
pub type JournalResult<T> = Result<T, JournalError>;
