use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;

use super::kv::{KvStore, StorageError};

const DATA_DIR: &str = "gyanguru";

/// File-backed store: one JSON file per key under the platform data directory.
///
/// No file locking - last writer wins if multiple instances run simultaneously.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open the store rooted at `<data_dir>/gyanguru`.
    pub fn open() -> Result<Self, StorageError> {
        let root = dirs::data_dir()
            .map(|p| p.join(DATA_DIR))
            .ok_or(StorageError::NoDataDir)?;
        Ok(Self { root })
    }

    /// Open a store rooted at an explicit directory (used in tests).
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);

        let mut file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Ok(Some(contents))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;

        // Write to a sibling temp file and rename so a failed write never
        // clobbers the existing value.
        let path = self.path_for(key);
        let tmp = self.root.join(format!("{}.json.tmp", key));

        let mut file = File::create(&tmp)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::with_root(dir.path().to_path_buf());
        assert!(store.get("absent").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::with_root(dir.path().to_path_buf());

        store.set("greeting", "\"hello\"").unwrap();
        assert_eq!(store.get("greeting").unwrap().unwrap(), "\"hello\"");
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::with_root(dir.path().to_path_buf());

        store.set("k", "1").unwrap();
        store.set("k", "2").unwrap();
        assert_eq!(store.get("k").unwrap().unwrap(), "2");
    }

    #[test]
    fn test_set_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deeply").join("nested");
        let mut store = FileStore::with_root(nested);

        store.set("k", "3").unwrap();
        assert_eq!(store.get("k").unwrap().unwrap(), "3");
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::with_root(dir.path().to_path_buf());

        store.set("k", "4").unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
