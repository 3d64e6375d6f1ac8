//! Mood statistics
//!
//! A [`StatisticsSnapshot`] is computed fresh from the parsed log every
//! time the statistics view is shown; nothing is cached between calls.

use crate::report::{empty_log_message, NO_LOGS_MESSAGE};
use crate::storage::{parse_log, MoodEntry, DATE_FORMAT};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Number of moods listed in the top section
pub const TOP_MOODS: usize = 3;

/// Trailing window for recent activity, in days before today
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Occurrences of one mood
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodCount {
    pub mood: String,
    pub count: usize,
    /// Share of all entries, 0-100
    pub percentage: f64,
}

/// Aggregate view over the whole log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsSnapshot {
    pub total_entries: usize,
    pub today_count: usize,
    pub last_7_days_count: usize,
    pub first_entry: NaiveDate,
    pub latest_entry: NaiveDate,
    /// Inclusive span between first and latest entry
    pub days_tracked: i64,
    /// Every mood, in first-seen order
    pub mood_counts: Vec<MoodCount>,
    /// Most frequent moods; ties keep first-seen order
    pub top_moods: Vec<MoodCount>,
}

/// Compute statistics relative to `now`; `None` when there are no entries
pub fn compute(entries: &[MoodEntry], now: NaiveDateTime) -> Option<StatisticsSnapshot> {
    let first_entry = entries.iter().map(|e| e.date).min()?;
    let latest_entry = entries.iter().map(|e| e.date).max()?;

    let total = entries.len();
    let today = now.date();
    let recent_start = today - Duration::days(RECENT_WINDOW_DAYS);

    let today_count = entries.iter().filter(|e| e.date == today).count();
    let last_7_days_count = entries.iter().filter(|e| e.date >= recent_start).count();

    let mood_counts = count_moods(entries, total);

    let mut top_moods = mood_counts.clone();
    // sort_by is stable, so equal counts stay in first-seen order
    top_moods.sort_by(|a, b| b.count.cmp(&a.count));
    top_moods.truncate(TOP_MOODS);

    Some(StatisticsSnapshot {
        total_entries: total,
        today_count,
        last_7_days_count,
        first_entry,
        latest_entry,
        days_tracked: (latest_entry - first_entry).num_days() + 1,
        mood_counts,
        top_moods,
    })
}

/// Group by mood name (case-sensitive), preserving first-seen order
fn count_moods(entries: &[MoodEntry], total: usize) -> Vec<MoodCount> {
    let mut order: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        match index.get(entry.mood.as_str()) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(entry.mood.as_str(), order.len());
                order.push((entry.mood.as_str(), 1));
            }
        }
    }

    order
        .into_iter()
        .map(|(mood, count)| MoodCount {
            mood: mood.to_string(),
            count,
            percentage: count as f64 / total as f64 * 100.0,
        })
        .collect()
}

/// Statistics text for display, or the empty-log placeholder
pub fn render_statistics(entries: &[MoodEntry], now: NaiveDateTime) -> String {
    match compute(entries, now) {
        Some(snapshot) => snapshot.to_string(),
        None => NO_LOGS_MESSAGE.to_string(),
    }
}

/// Statistics for raw log text as pretty JSON
///
/// A log that yields no statistics becomes `{"message": ...}` carrying the
/// same placeholder the text view shows.
pub fn statistics_json(raw: &str, now: NaiveDateTime) -> serde_json::Result<String> {
    let parsed = parse_log(raw);
    if let Some(message) = empty_log_message(raw, &parsed) {
        return serde_json::to_string_pretty(&serde_json::json!({ "message": message }));
    }
    serde_json::to_string_pretty(&compute(&parsed.entries, now))
}

impl fmt::Display for StatisticsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OVERVIEW:")?;
        writeln!(f, "Total Entries: {}", self.total_entries)?;
        writeln!(f, "Today's Logs: {}", self.today_count)?;
        writeln!(f, "Last 7 Days: {} entries", self.last_7_days_count)?;
        writeln!(f)?;

        writeln!(f, "DATE RANGE:")?;
        writeln!(f, "First Entry: {}", self.first_entry.format(DATE_FORMAT))?;
        writeln!(f, "Latest Entry: {}", self.latest_entry.format(DATE_FORMAT))?;
        writeln!(f, "Days Tracked: {}", self.days_tracked)?;
        writeln!(f)?;

        writeln!(f, "TOP 3 MOODS:")?;
        for top in &self.top_moods {
            writeln!(f, "{}: {} times ({:.1}%)", top.mood, top.count, top.percentage)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(date: NaiveDate, mood: &str) -> MoodEntry {
        MoodEntry::new(date, NaiveTime::from_hms_opt(10, 0, 0).unwrap(), mood)
    }

    fn noon(date: NaiveDate) -> NaiveDateTime {
        date.and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_entries() {
        let now = noon(ymd(2024, 1, 1));
        assert!(compute(&[], now).is_none());
        assert_eq!(
            render_statistics(&[], now),
            "No mood logs found. Start logging your moods!"
        );
    }

    #[test]
    fn test_json_for_empty_and_invalid_logs() {
        let now = noon(ymd(2024, 1, 1));

        let empty: serde_json::Value =
            serde_json::from_str(&statistics_json("", now).unwrap()).unwrap();
        assert_eq!(empty["message"], crate::report::NO_LOGS_MESSAGE);

        let invalid: serde_json::Value =
            serde_json::from_str(&statistics_json("garbage\n\n", now).unwrap()).unwrap();
        assert_eq!(invalid["message"], crate::report::NO_VALID_ENTRIES_MESSAGE);
    }

    #[test]
    fn test_json_for_valid_log() {
        let raw = "Date: 2024-01-01 Time: 09:00:00 Mood: Joy\nNote: \n\n\
                   Date: 2024-01-01 Time: 10:00:00 Mood: Joy\nNote: \n\n";
        let json: serde_json::Value =
            serde_json::from_str(&statistics_json(raw, noon(ymd(2024, 1, 1))).unwrap()).unwrap();

        assert_eq!(json["total_entries"], 2);
        assert_eq!(json["today_count"], 2);
        assert_eq!(json["first_entry"], "2024-01-01");
        assert_eq!(json["top_moods"][0]["mood"], "Joy");
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_counts_for_today() {
        let today = ymd(2024, 6, 10);
        let entries = vec![entry(today, "Joy"), entry(today, "Joy"), entry(today, "Anger")];

        let snapshot = compute(&entries, noon(today)).unwrap();

        assert_eq!(snapshot.total_entries, 3);
        assert_eq!(snapshot.today_count, 3);
        assert_eq!(snapshot.last_7_days_count, 3);
        assert_eq!(snapshot.days_tracked, 1);
        assert_eq!(snapshot.top_moods.len(), 2);
        assert_eq!(snapshot.top_moods[0].mood, "Joy");
        assert_eq!(snapshot.top_moods[0].count, 2);
        assert_eq!(format!("{:.1}", snapshot.top_moods[0].percentage), "66.7");
        assert_eq!(snapshot.top_moods[1].mood, "Anger");
        assert_eq!(format!("{:.1}", snapshot.top_moods[1].percentage), "33.3");
    }

    #[test]
    fn test_date_range_inclusive() {
        let entries = vec![entry(ymd(2024, 1, 1), "Joy"), entry(ymd(2024, 1, 5), "Fear")];
        let snapshot = compute(&entries, noon(ymd(2024, 1, 5))).unwrap();

        assert_eq!(snapshot.first_entry, ymd(2024, 1, 1));
        assert_eq!(snapshot.latest_entry, ymd(2024, 1, 5));
        assert_eq!(snapshot.days_tracked, 5);
    }

    #[test]
    fn test_date_range_ignores_append_order() {
        let entries = vec![entry(ymd(2024, 3, 9), "Joy"), entry(ymd(2024, 3, 2), "Joy")];
        let snapshot = compute(&entries, noon(ymd(2024, 3, 9))).unwrap();

        assert_eq!(snapshot.first_entry, ymd(2024, 3, 2));
        assert_eq!(snapshot.days_tracked, 8);
    }

    #[test]
    fn test_recent_window_lower_bound_is_inclusive() {
        let today = ymd(2024, 6, 10);
        let entries = vec![
            entry(ymd(2024, 6, 2), "Joy"),  // 8 days ago
            entry(ymd(2024, 6, 3), "Joy"),  // exactly 7 days ago
            entry(ymd(2024, 6, 9), "Fear"),
            entry(today, "Anger"),
        ];

        let snapshot = compute(&entries, noon(today)).unwrap();
        assert_eq!(snapshot.last_7_days_count, 3);
        assert_eq!(snapshot.today_count, 1);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let day = ymd(2024, 1, 1);
        let entries = vec![
            entry(day, "Fear"),
            entry(day, "Joy"),
            entry(day, "Anger"),
            entry(day, "Sadness"),
            entry(day, "Sadness"),
        ];

        let snapshot = compute(&entries, noon(day)).unwrap();
        let top: Vec<&str> = snapshot.top_moods.iter().map(|m| m.mood.as_str()).collect();
        assert_eq!(top, vec!["Sadness", "Fear", "Joy"]);

        let all: Vec<&str> = snapshot.mood_counts.iter().map(|m| m.mood.as_str()).collect();
        assert_eq!(all, vec!["Fear", "Joy", "Anger", "Sadness"]);
    }

    #[test]
    fn test_mood_grouping_is_case_sensitive() {
        let day = ymd(2024, 1, 1);
        let entries = vec![entry(day, "Joy"), entry(day, "joy")];

        let snapshot = compute(&entries, noon(day)).unwrap();
        assert_eq!(snapshot.mood_counts.len(), 2);
    }

    #[test]
    fn test_rendered_layout() {
        let today = ymd(2024, 6, 10);
        let entries = vec![
            entry(ymd(2024, 6, 1), "Joy"),
            entry(today, "Joy"),
            entry(today, "Anger"),
        ];

        let expected = "OVERVIEW:\n\
                        Total Entries: 3\n\
                        Today's Logs: 2\n\
                        Last 7 Days: 2 entries\n\
                        \n\
                        DATE RANGE:\n\
                        First Entry: 2024-06-01\n\
                        Latest Entry: 2024-06-10\n\
                        Days Tracked: 10\n\
                        \n\
                        TOP 3 MOODS:\n\
                        Joy: 2 times (66.7%)\n\
                        Anger: 1 times (33.3%)\n";

        assert_eq!(render_statistics(&entries, noon(today)), expected);
    }

    #[test]
    fn test_deterministic_for_same_input() {
        let today = ymd(2024, 6, 10);
        let entries = vec![entry(today, "Joy"), entry(ymd(2024, 5, 1), "Fear")];

        assert_eq!(
            render_statistics(&entries, noon(today)),
            render_statistics(&entries, noon(today))
        );
    }
}
