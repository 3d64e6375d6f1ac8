//! # Moodlog
//!
//! A single-user mood journal: pick a mood, optionally add a note, and the
//! entry is appended to a plain-text log. The log can be browsed newest
//! first or summarized as statistics.
//!
//! ## Modules
//!
//! - [`storage`]: append-only log file and its parser
//! - [`report`]: history transcript and statistics
//! - [`journal`]: view state machine, mood catalog, music player
//! - [`export`]: CSV export
//! - [`config`]: TOML configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use moodlog::journal::{JournalSession, MoodCarousel, MoodCatalog, SystemClock, View};
//! use moodlog::storage::MoodLog;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let order: Vec<String> = vec!["joy".into(), "anger".into()];
//!     let catalog = MoodCatalog::from_names(["joy", "anger"], &order);
//!     let mut session = JournalSession::new(
//!         MoodLog::open("mood_log.txt"),
//!         MoodCarousel::new(catalog),
//!         SystemClock,
//!     );
//!
//!     session.set_note("morning run");
//!     session.submit()?;
//!
//!     session.switch_to(View::Statistics)?;
//!     println!("{}", session.content().unwrap_or_default());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod export;
pub mod journal;
pub mod report;
pub mod storage;

pub use storage::{parse, MoodEntry, MoodLog, StorageError, StorageResult};

pub use report::{
    compute, empty_log_message, render_history, render_statistics, statistics_json, MoodCount,
    StatisticsSnapshot, NO_LOGS_MESSAGE, NO_VALID_ENTRIES_MESSAGE,
};

pub use journal::{
    JournalError, JournalResult, JournalSession, LogOutcome, MoodCarousel, MoodCatalog,
    MusicPlayer, View,
};

pub use export::{export_csv, ExportError};

pub use config::{generate_default_config, Config, ConfigError, JournalConfig, LoggingConfig};
