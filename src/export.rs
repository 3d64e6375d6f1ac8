//! CSV export
//!
//! Writes parsed entries as `date,time,mood,note` rows, oldest first.

use crate::storage::{MoodEntry, DATE_FORMAT, TIME_FORMAT};
use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Write `entries` as CSV with a header row; returns the number of rows
pub fn export_csv<W: Write>(entries: &[MoodEntry], writer: W) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["date", "time", "mood", "note"])?;

    for entry in entries {
        csv_writer.write_record([
            entry.date.format(DATE_FORMAT).to_string(),
            entry.time.format(TIME_FORMAT).to_string(),
            entry.mood.clone(),
            entry.note.clone(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_export_quotes_notes() {
        let entries = vec![
            MoodEntry::new(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                "Joy",
            )
            .note("tea, cake"),
            MoodEntry::new(
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                NaiveTime::from_hms_opt(22, 10, 5).unwrap(),
                "Fear",
            ),
        ];

        let mut out = Vec::new();
        let rows = export_csv(&entries, &mut out).unwrap();

        assert_eq!(rows, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "date,time,mood,note\n\
             2024-01-01,09:00:00,Joy,\"tea, cake\"\n\
             2024-01-02,22:10:05,Fear,\n"
        );
    }

    #[test]
    fn test_export_empty_writes_header_only() {
        let mut out = Vec::new();
        assert_eq!(export_csv(&[], &mut out).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "date,time,mood,note\n");
    }
}
