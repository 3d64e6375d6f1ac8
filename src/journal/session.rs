//! Journal session: the view state machine
//!
//! One session lives for the whole run of the application. It owns the
//! current view, the selected mood, the note being typed and whatever text
//! the history or statistics view is showing.
//!
//! ```text
//!            ┌──────────── any view ────────────┐
//!            ▼                                   │
//!   Journaling ──► History ──► Statistics ───────┘
//!   (can log)     (read log)   (read log)
//! ```
//!
//! Every transition is allowed. Entering History or Statistics re-reads and
//! re-parses the log; entering Journaling drops the displayed text.

use crate::journal::catalog::MoodCarousel;
use crate::journal::clock::Clock;
use crate::journal::error::JournalResult;
use crate::journal::view::View;
use crate::report::{empty_log_message, render_history, render_statistics};
use crate::storage::{parse_log, MoodEntry, MoodLog};
use chrono::{Duration, NaiveDateTime};

/// Seconds the "mood logged" confirmation stays visible
pub const CONFIRMATION_SECS: i64 = 2;

/// Transient acknowledgement of a successful log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub mood: String,
    pub shown_at: NaiveDateTime,
}

/// Why a log request did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Logging is only possible from the journaling view
    NotJournaling(View),
    /// The catalog is empty, so no mood is selected
    NoMoodSelected,
}

/// Result of a log request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutcome {
    Logged(MoodEntry),
    Ignored(IgnoreReason),
}

pub struct JournalSession {
    log: MoodLog,
    carousel: MoodCarousel,
    clock: Box<dyn Clock>,
    view: View,
    content: Option<String>,
    note: String,
    confirmation: Option<Confirmation>,
}

impl JournalSession {
    /// Start in the journaling view with the first mood selected
    pub fn new(log: MoodLog, carousel: MoodCarousel, clock: impl Clock + 'static) -> Self {
        Self {
            log,
            carousel,
            clock: Box::new(clock),
            view: View::Journaling,
            content: None,
            note: String::new(),
            confirmation: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Text shown by the history or statistics view
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn log(&self) -> &MoodLog {
        &self.log
    }

    pub fn carousel(&self) -> &MoodCarousel {
        &self.carousel
    }

    pub fn current_mood(&self) -> Option<&str> {
        self.carousel.current()
    }

    pub fn next_mood(&mut self) -> Option<&str> {
        self.carousel.next()
    }

    pub fn previous_mood(&mut self) -> Option<&str> {
        self.carousel.previous()
    }

    pub fn select_mood(&mut self, mood: &str) -> JournalResult<&str> {
        self.carousel.select(mood)
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    /// Switch views, refreshing displayed content from the log
    ///
    /// The view changes even when reading the log fails; the error text is
    /// then shown in place of the report and the error is returned.
    pub fn switch_to(&mut self, view: View) -> JournalResult<()> {
        tracing::info!(from = %self.view, to = %view, "Switching view");
        self.view = view;
        self.refresh()
    }

    /// Recompute the content of the current view
    pub fn refresh(&mut self) -> JournalResult<()> {
        let label = match self.view {
            View::Journaling => {
                self.content = None;
                return Ok(());
            }
            View::History => "mood history",
            View::Statistics => "statistics",
        };

        match self.render_current() {
            Ok(text) => {
                self.content = Some(text);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load {}", label);
                self.content = Some(format!("Error loading {}: {}", label, e));
                Err(e)
            }
        }
    }

    fn render_current(&self) -> JournalResult<String> {
        let raw = self.log.read_all()?;
        let parsed = parse_log(&raw);
        if parsed.skipped > 0 {
            tracing::debug!(skipped = parsed.skipped, "Ignored malformed log blocks");
        }

        let text = match self.view {
            View::History => render_history(&parsed.entries),
            View::Statistics => match empty_log_message(&raw, &parsed) {
                Some(message) => message.to_string(),
                None => render_statistics(&parsed.entries, self.clock.now()),
            },
            View::Journaling => String::new(),
        };
        Ok(text)
    }

    /// Log the selected mood with the current note
    ///
    /// Does nothing outside the journaling view. On success the note is
    /// cleared and a confirmation is shown; on failure the note is kept.
    pub fn submit(&mut self) -> JournalResult<LogOutcome> {
        if self.view != View::Journaling {
            tracing::debug!(view = %self.view, "Ignoring log request outside journaling view");
            return Ok(LogOutcome::Ignored(IgnoreReason::NotJournaling(self.view)));
        }

        let mood = match self.carousel.current() {
            Some(mood) => mood.to_string(),
            None => return Ok(LogOutcome::Ignored(IgnoreReason::NoMoodSelected)),
        };

        let now = self.clock.now();
        let entry = MoodEntry::at(now, mood).note(self.note.clone());

        if let Err(e) = self.log.append(&entry) {
            tracing::error!(error = %e, mood = %entry.mood, "Failed to save mood log");
            return Err(e.into());
        }

        self.note.clear();
        self.confirmation = Some(Confirmation {
            mood: entry.mood.clone(),
            shown_at: now,
        });
        Ok(LogOutcome::Logged(entry))
    }

    /// The pending confirmation, cleared once it has expired
    pub fn confirmation(&mut self) -> Option<&Confirmation> {
        let now = self.clock.now();
        if let Some(c) = &self.confirmation {
            if now - c.shown_at >= Duration::seconds(CONFIRMATION_SECS) {
                self.confirmation = None;
            }
        }
        self.confirmation.as_ref()
    }
}
