//! File-backed preference store.
//!
//! Keeps every key in one JSON object on disk. Values are the JSON-encoded
//! strings handed over by the preference layer, stored verbatim.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use saneschedule_core::{KeyValueStore, StoreError};
use tracing::debug;

/// Key/value pairs persisted to a single JSON file.
#[derive(Debug)]
pub struct FileStore {
    values: BTreeMap<String, String>,
    path: PathBuf,
}

impl FileStore {
    /// Opens the store, falling back to an empty one if the file is missing
    /// or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = std::fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str::<BTreeMap<String, String>>(&content).ok())
            .unwrap_or_default();
        debug!(path = %path.display(), keys = values.len(), "opened preference file");

        Self { values, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(values)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    /// Writes the whole file; memory is only updated once the write succeeds.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let mut values = self.values.clone();
        values.insert(key.to_string(), value);
        self.save(&values)?;
        self.values = values;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/preferences.json");

        let mut store = FileStore::open(&path);
        assert!(store.get("sane-sg23-breakdown").is_none());
        store.set("sane-sg23-breakdown", "false".to_string()).unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("sane-sg23-breakdown").as_deref(), Some("false"));
    }

    #[test]
    fn malformed_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = FileStore::open(&path);
        assert!(store.get("anything").is_none());
    }

    #[test]
    fn failed_write_keeps_memory_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the write fail.
        let path = dir.path().join("prefs");
        std::fs::create_dir(&path).unwrap();

        let mut store = FileStore::open(&path);
        assert!(store.set("key", "true".to_string()).is_err());
        assert!(store.get("key").is_none());
    }
}
