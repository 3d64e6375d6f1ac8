//! Mood log parser
//!
//! Turns raw log text back into [`MoodEntry`] values. Parsing is lenient:
//! every `Date: .. Time: .. Mood: ..` header line starts an entry, lines
//! before the first header of a block are ignored, and a block without
//! any valid header is skipped rather than failing the whole read.

use crate::storage::types::{MoodEntry, DATE_FORMAT, TIME_FORMAT};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Date: (\d{4}-\d{2}-\d{2}) Time: (\d{2}:\d{2}:\d{2}) Mood: (\w+)").unwrap()
});

const NOTE_PREFIX: &str = "Note:";

/// Outcome of parsing a whole log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLog {
    /// Entries in file order (oldest first)
    pub entries: Vec<MoodEntry>,
    /// Number of blocks that yielded no entry
    pub skipped: usize,
}

impl ParsedLog {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse raw log text into entries, oldest first
pub fn parse(raw: &str) -> Vec<MoodEntry> {
    parse_log(raw).entries
}

/// Parse raw log text, also reporting how many blocks were dropped
pub fn parse_log(raw: &str) -> ParsedLog {
    let normalized = raw.replace("\r\n", "\n");
    let mut parsed = ParsedLog::default();

    for (index, block) in split_blocks(&normalized).into_iter().enumerate() {
        let entries = parse_block(&block);
        if entries.is_empty() {
            tracing::debug!(block = index, "Skipping malformed log block");
            parsed.skipped += 1;
        } else {
            parsed.entries.extend(entries);
        }
    }

    parsed
}

/// Whether `line` would be read back as an entry header
pub(crate) fn is_header_line(line: &str) -> bool {
    HEADER.is_match(line)
}

/// Split text into maximal runs of non-blank lines
fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

/// Parse every entry in one block
///
/// Each header line runs until the next header line or the end of the block.
fn parse_block(lines: &[&str]) -> Vec<MoodEntry> {
    let starts: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_header_line(line))
        .map(|(i, _)| i)
        .collect();

    starts
        .iter()
        .enumerate()
        .filter_map(|(n, &start)| {
            let end = starts.get(n + 1).copied().unwrap_or(lines.len());
            parse_entry(&lines[start..end])
        })
        .collect()
}

/// Parse a header line and its note; `None` if the date or time is invalid
fn parse_entry(lines: &[&str]) -> Option<MoodEntry> {
    let (header, rest) = lines.split_first()?;
    let caps = HEADER.captures(header)?;

    let date = NaiveDate::parse_from_str(&caps[1], DATE_FORMAT).ok()?;
    let time = NaiveTime::parse_from_str(&caps[2], TIME_FORMAT).ok()?;
    let mood = caps[3].to_string();

    let note = match rest.split_first() {
        Some((first, continuation)) if first.starts_with(NOTE_PREFIX) => {
            let first = &first[NOTE_PREFIX.len()..];
            let first = first.strip_prefix(' ').unwrap_or(first);
            std::iter::once(first)
                .chain(continuation.iter().copied())
                .collect::<Vec<_>>()
                .join("\n")
        }
        _ => String::new(),
    };

    Some(MoodEntry {
        date,
        time,
        mood,
        note,
    })
}
