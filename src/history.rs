//! Bounded, persisted generation history
//!
//! Every completed lesson is recorded as a [`HistoryEntry`] in a capped,
//! newest-first list persisted through the storage layer. The popup state
//! and renderer let the user fuzzy-search past topics and re-run them.

pub mod events;
mod entry;
mod history_log;
mod history_render;
mod history_state;
mod matcher;

pub use entry::{HistoryEntry, HISTORY_KEY};
pub use history_log::{HistoryLog, MAX_HISTORY_ENTRIES};
pub use history_render::render_history_popup;
pub use history_state::{HistoryState, MAX_VISIBLE_HISTORY};
