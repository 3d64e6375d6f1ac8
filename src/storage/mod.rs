//! Mood log storage
//!
//! - **types**: `MoodEntry` and the block format
//! - **log**: append-only log file (`MoodLog`)
//! - **parser**: lenient block parser
//! - **error**: error types
//!
//! # Data flow
//!
//! ```text
//! Write Path:
//!   MoodEntry → to_block() → append to mood_log.txt
//!
//! Read Path:
//!   mood_log.txt → read_all() → parse() → Vec<MoodEntry> (oldest first)
//! ```

pub mod error;
pub mod log;
pub mod parser;
pub mod types;

pub use error::{StorageError, StorageResult};
pub use log::{MoodLog, DEFAULT_LOG_FILE};
pub use parser::{parse, parse_log, ParsedLog};
pub use types::{is_valid_mood_name, MoodEntry, DATE_FORMAT, TIME_FORMAT};
