//! Shared helpers for unit tests across modules.

use crate::app::App;
use crate::config::Config;
use crate::storage::MemoryStore;

/// An App wired to in-memory storage, never touching the real data dir.
pub fn test_app() -> App {
    App::with_store(Box::new(MemoryStore::new()), &Config::default())
}
