use serde_json::Value;

use super::entry::{HistoryEntry, HISTORY_KEY};
use crate::storage::{self, KvStore};

/// Cap on the persisted history list.
pub const MAX_HISTORY_ENTRIES: usize = 50;

/// Capped, newest-first generation log backed by a [`KvStore`].
///
/// The in-memory list mirrors what is persisted: a record only takes effect
/// once its write lands, so a storage failure leaves both the store and the
/// visible history unchanged.
pub struct HistoryLog {
    store: Box<dyn KvStore>,
    max_entries: usize,
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Load the log from the store with the default cap.
    pub fn open(store: Box<dyn KvStore>) -> Self {
        Self::with_capacity(store, MAX_HISTORY_ENTRIES)
    }

    pub fn with_capacity(store: Box<dyn KvStore>, max_entries: usize) -> Self {
        let entries = storage::load(store.as_ref(), HISTORY_KEY, Vec::new());
        Self {
            store,
            max_entries,
            entries,
        }
    }

    /// Prepend a new entry and truncate to the cap.
    ///
    /// Failures are logged and swallowed - the caller never observes an
    /// error, and the recorded entry is simply lost.
    pub fn record(&mut self, kind: &str, payload: Value) {
        let mut next = Vec::with_capacity(self.entries.len() + 1);
        next.push(HistoryEntry::new(kind, payload));
        next.extend(self.entries.iter().cloned());
        next.truncate(self.max_entries);

        match storage::try_store(self.store.as_mut(), HISTORY_KEY, &next) {
            Ok(()) => self.entries = next,
            Err(e) => log::warn!("failed to persist history entry: {}", e),
        }
    }

    /// Entries newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "history_log_tests.rs"]
mod history_log_tests;
