//! Read-side reports built from parsed log entries
//!
//! - **history**: newest-first transcript
//! - **statistics**: counts, top moods, date range and recent activity
//!
//! Both are pure functions of the parsed entries; they never touch the
//! log file themselves.

pub mod history;
pub mod statistics;

use crate::storage::ParsedLog;

pub use history::render_history;
pub use statistics::{
    compute, render_statistics, statistics_json, MoodCount, StatisticsSnapshot,
    RECENT_WINDOW_DAYS, TOP_MOODS,
};

/// Shown when the log is absent or blank
pub const NO_LOGS_MESSAGE: &str = "No mood logs found. Start logging your moods!";

/// Shown when the log has content but no block could be parsed
pub const NO_VALID_ENTRIES_MESSAGE: &str = "No valid mood entries found!";

/// Placeholder to show instead of statistics, if the log yields none
pub fn empty_log_message(raw: &str, parsed: &ParsedLog) -> Option<&'static str> {
    if raw.trim().is_empty() {
        Some(NO_LOGS_MESSAGE)
    } else if parsed.is_empty() {
        Some(NO_VALID_ENTRIES_MESSAGE)
    } else {
        None
    }
}
