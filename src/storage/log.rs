//! Append-only mood log
//!
//! The log is a plain UTF-8 text file made of entry blocks:
//!
//! ```text
//! Date: 2024-01-05 Time: 21:14:02 Mood: Joy
//! Note: dinner with friends
//!
//! ```
//!
//! Entries are only ever appended. A missing file is an empty log.

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::parser::is_header_line;
use crate::storage::types::{is_valid_mood_name, MoodEntry};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Default log file name, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "mood_log.txt";

/// Handle to the mood log file
#[derive(Debug, Clone)]
pub struct MoodLog {
    path: PathBuf,
}

impl MoodLog {
    /// Open a log at `path`. The file is created lazily on first append.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry
    ///
    /// The whole block is written with a single `write_all` call.
    pub fn append(&self, entry: &MoodEntry) -> StorageResult<()> {
        if !is_valid_mood_name(&entry.mood) {
            return Err(StorageError::InvalidMood(entry.mood.clone()));
        }

        if !note_round_trips(&entry.note) {
            tracing::warn!(
                mood = %entry.mood,
                "Note will not be read back exactly (blank, trailing or header-like lines)"
            );
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.write_all(entry.to_block().as_bytes())?;
        file.flush()?;

        tracing::info!(mood = %entry.mood, date = %entry.date, "Mood logged");
        Ok(())
    }

    /// Read the raw log text
    ///
    /// Returns an empty string when the file does not exist yet.
    pub fn read_all(&self) -> StorageResult<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Check whether the backing file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

/// Whether a note survives a write and parse unchanged
///
/// Blank lines end the block, a trailing newline is lost, and a line that
/// looks like a header starts a new entry.
fn note_round_trips(note: &str) -> bool {
    !note.ends_with('\n')
        && note
            .lines()
            .skip(1)
            .all(|line| !line.trim().is_empty() && !is_header_line(line))
}

impl Default for MoodLog {
    fn default() -> Self {
        Self::open(DEFAULT_LOG_FILE)
    }
}
