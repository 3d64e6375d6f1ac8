//! The three journal views

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Mood selection and note entry; the only view that can log
    #[default]
    Journaling,
    /// Past entries, newest first
    History,
    /// Aggregate statistics
    Statistics,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Journaling => write!(f, "journaling"),
            View::History => write!(f, "history"),
            View::Statistics => write!(f, "statistics"),
        }
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "journaling" | "journal" | "notes" | "main" => Ok(View::Journaling),
            "history" => Ok(View::History),
            "statistics" | "stats" => Ok(View::Statistics),
            other => Err(format!("Unknown view: {}", other)),
        }
    }
}
