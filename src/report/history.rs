//! History transcript, newest entry first

use crate::report::NO_LOGS_MESSAGE;
use crate::storage::MoodEntry;

/// Render entries newest-first as block text separated by blank lines
pub fn render_history(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return NO_LOGS_MESSAGE.to_string();
    }

    entries
        .iter()
        .rev()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}
