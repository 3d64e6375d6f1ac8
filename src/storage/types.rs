//! Core data types for the mood log
//!
//! - `MoodEntry`: one logged observation (date, time, mood, note)
//! - Block serialization used by the on-disk log format

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Date format used in log blocks
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format used in log blocks
pub const TIME_FORMAT: &str = "%H:%M:%S";

static MOOD_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w+$").unwrap());

/// Check that a mood name survives a write/parse cycle
pub fn is_valid_mood_name(name: &str) -> bool {
    MOOD_NAME.is_match(name)
}

/// A single mood observation
///
/// Entries are immutable once written; the log never edits or deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodEntry {
    /// Calendar date of the observation
    pub date: NaiveDate,
    /// Local time of day, second precision
    pub time: NaiveTime,
    /// Mood identifier, e.g. "Joy"
    pub mood: String,
    /// Free-text note, may be empty
    pub note: String,
}

impl MoodEntry {
    /// Create an entry with an empty note
    pub fn new(date: NaiveDate, time: NaiveTime, mood: impl Into<String>) -> Self {
        Self {
            date,
            time,
            mood: mood.into(),
            note: String::new(),
        }
    }

    /// Create an entry stamped at `at`, truncated to whole seconds
    pub fn at(at: NaiveDateTime, mood: impl Into<String>) -> Self {
        let time = at.time().with_nanosecond(0).unwrap_or(at.time());
        Self::new(at.date(), time, mood)
    }

    /// Builder method: attach a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Date and time combined
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// The `Date: .. Time: .. Mood: ..` header line
    pub fn header_line(&self) -> String {
        format!(
            "Date: {} Time: {} Mood: {}",
            self.date.format(DATE_FORMAT),
            self.time.format(TIME_FORMAT),
            self.mood
        )
    }

    /// Serialize into the on-disk block, including the trailing blank line
    pub fn to_block(&self) -> String {
        format!("{}\nNote: {}\n\n", self.header_line(), self.note)
    }
}

impl fmt::Display for MoodEntry {
    /// Block text without the trailing blank line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\nNote: {}", self.header_line(), self.note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_block_format() {
        let entry = MoodEntry::new(ymd(2024, 3, 9), NaiveTime::from_hms_opt(8, 5, 3).unwrap(), "Joy")
            .note("sunny walk");

        assert_eq!(
            entry.to_block(),
            "Date: 2024-03-09 Time: 08:05:03 Mood: Joy\nNote: sunny walk\n\n"
        );
        assert_eq!(
            entry.to_string(),
            "Date: 2024-03-09 Time: 08:05:03 Mood: Joy\nNote: sunny walk"
        );
    }

    #[test]
    fn test_empty_note_keeps_note_line() {
        let entry = MoodEntry::new(ymd(2024, 1, 1), NaiveTime::from_hms_opt(0, 0, 0).unwrap(), "Fear");
        assert_eq!(entry.to_block(), "Date: 2024-01-01 Time: 00:00:00 Mood: Fear\nNote: \n\n");
    }

    #[test]
    fn test_at_truncates_subseconds() {
        let at = ymd(2024, 5, 1).and_hms_milli_opt(13, 45, 10, 999).unwrap();
        let entry = MoodEntry::at(at, "Neutral");

        assert_eq!(entry.time, NaiveTime::from_hms_opt(13, 45, 10).unwrap());
        assert_eq!(entry.date, ymd(2024, 5, 1));
    }

    #[test]
    fn test_mood_name_validation() {
        assert!(is_valid_mood_name("Joy"));
        assert!(is_valid_mood_name("Very_happy2"));
        assert!(!is_valid_mood_name(""));
        assert!(!is_valid_mood_name("very happy"));
        assert!(!is_valid_mood_name("so-so"));
    }
}
