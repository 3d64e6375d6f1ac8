//! Journal session
//!
//! Application state that lives for the whole run:
//!
//! - **session**: view state machine, note buffer, confirmation
//! - **view**: the three views
//! - **catalog**: mood catalog and carousel
//! - **player**: background music state
//! - **clock**: time source
//! - **error**: error types

pub mod catalog;
pub mod clock;
pub mod error;
pub mod player;
pub mod session;
pub mod view;

pub use catalog::{capitalize, MoodCarousel, MoodCatalog, DEFAULT_MOOD_ORDER, UI_ASSET_TOKENS};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{JournalError, JournalResult};
pub use player::{AudioBackend, AudioCall, MusicLibrary, MusicPlayer, PlaybackState, SilentBackend};
pub use session::{
    Confirmation, IgnoreReason, JournalSession, LogOutcome, CONFIRMATION_SECS,
};
pub use view::View;
