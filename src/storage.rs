//! Persistent key-value storage
//!
//! Components that persist data (history, future caches) go through the
//! [`KvStore`] trait instead of touching the filesystem directly, so they can
//! be exercised in tests with an in-memory store.
//!
//! Values are stored JSON-encoded. The helpers in this module come in two
//! flavors: `try_store` returns the error for callers that need to know
//! whether the write landed, `store`/`load` log and swallow so UI code never
//! has to unwind over a full disk or a corrupted file.

mod file;
mod kv;
mod memory;

pub use file::FileStore;
pub use kv::{KvStore, StorageError};
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// JSON-encode `value` and write it under `key`.
///
/// All-or-nothing: serialization happens before any write, and the backends
/// replace the stored value atomically, so a failure leaves the previously
/// stored data unchanged.
pub fn try_store<T: Serialize>(
    store: &mut dyn KvStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let encoded = serde_json::to_string(value)?;
    store.set(key, &encoded)
}

/// Like [`try_store`], but failures are logged and swallowed.
pub fn store<T: Serialize>(store: &mut dyn KvStore, key: &str, value: &T) {
    if let Err(e) = try_store(store, key, value) {
        log::warn!("failed to store '{}': {}", key, e);
    }
}

/// Read and JSON-decode the value under `key`.
///
/// Returns `default` when the key is missing, the backend fails, or the
/// stored content does not decode. Never raises to the caller.
pub fn load<T: DeserializeOwned>(store: &dyn KvStore, key: &str, default: T) -> T {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default,
        Err(e) => {
            log::warn!("failed to read '{}': {}", key, e);
            return default;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("malformed content under '{}': {}", key, e);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_then_load_roundtrip() {
        let mut store = MemoryStore::new();
        try_store(&mut store, "numbers", &vec![1, 2, 3]).unwrap();

        let loaded: Vec<i32> = load(&store, "numbers", Vec::new());
        assert_eq!(loaded, vec![1, 2, 3]);
    }

    #[test]
    fn test_load_missing_key_returns_default() {
        let store = MemoryStore::new();
        let loaded: Vec<String> = load(&store, "nope", vec!["fallback".to_string()]);
        assert_eq!(loaded, vec!["fallback"]);
    }

    #[test]
    fn test_load_malformed_content_returns_default() {
        let mut store = MemoryStore::new();
        store.set("broken", "{not json at all").unwrap();

        let loaded: u32 = load(&store, "broken", 42);
        assert_eq!(loaded, 42);
    }

    #[test]
    fn test_load_wrong_shape_returns_default() {
        let mut store = MemoryStore::new();
        store.set("shape", "\"a string\"").unwrap();

        let loaded: Vec<u8> = load(&store, "shape", Vec::new());
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_store_swallows_backend_failure() {
        struct RefusingStore;

        impl KvStore for RefusingStore {
            fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
                Ok(None)
            }

            fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
                Err(StorageError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "quota exceeded",
                )))
            }
        }

        let mut backend = RefusingStore;
        // Must not panic or propagate
        store(&mut backend, "anything", &1);
    }
}
