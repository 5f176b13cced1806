//! UI preferences and their key/value persistence.
//!
//! Four toggles survive between sessions: enabled categories, disabled
//! categories, the hide-recorded flag and the break-down flag. Each lives
//! under its own key in a [`KeyValueStore`] as a JSON-encoded value.
//!
//! Reads never fail: a missing or undecodable value falls back to the
//! default for that key. Every mutation writes the complete new value to the
//! store first and only then updates the in-memory state, so a failed write
//! never leaves the store and memory disagreeing.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::conference::Conference;

/// Errors from a preference store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage could not be written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded.
    #[error("failed to encode preference: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Minimal string key/value storage.
pub trait KeyValueStore {
    /// Returns the raw stored value, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// In-memory store, mostly for tests and one-shot runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store key names for one conference profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceKeys {
    pub enabled_categories: String,
    pub disabled_categories: String,
    pub hide_recorded: String,
    pub break_down: String,
}

impl PreferenceKeys {
    /// Derives the key names from a prefix such as `sane-sg23`.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            enabled_categories: format!("{prefix}-enabled-types"),
            disabled_categories: format!("{prefix}-disabled-types"),
            hide_recorded: format!("{prefix}-only-not-recorded"),
            break_down: format!("{prefix}-breakdown"),
        }
    }
}

/// Current values of the four toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preferences {
    /// Categories the user explicitly wants. Empty means "everything".
    pub enabled_categories: Vec<String>,
    /// Categories the user explicitly hides. Wins over `enabled_categories`.
    pub disabled_categories: Vec<String>,
    /// Hide entries whose effective recording state is `Yes`.
    pub hide_recorded: bool,
    /// Show sub-events as separate entries.
    pub break_down: bool,
}

impl Preferences {
    /// The hard-coded defaults for a conference.
    pub fn defaults(conference: &Conference) -> Self {
        Self {
            enabled_categories: conference.default_enabled.clone(),
            disabled_categories: conference.default_disabled.clone(),
            hide_recorded: false,
            break_down: true,
        }
    }

    /// Reads every key, falling back per key to `defaults`.
    pub fn load<S: KeyValueStore + ?Sized>(
        store: &S,
        keys: &PreferenceKeys,
        defaults: &Preferences,
    ) -> Self {
        Self {
            enabled_categories: read_or(store, &keys.enabled_categories, || {
                defaults.enabled_categories.clone()
            }),
            disabled_categories: read_or(store, &keys.disabled_categories, || {
                defaults.disabled_categories.clone()
            }),
            hide_recorded: read_or(store, &keys.hide_recorded, || defaults.hide_recorded),
            break_down: read_or(store, &keys.break_down, || defaults.break_down),
        }
    }

    pub fn is_enabled(&self, category: &str) -> bool {
        self.enabled_categories.iter().any(|c| c == category)
    }

    pub fn is_disabled(&self, category: &str) -> bool {
        self.disabled_categories.iter().any(|c| c == category)
    }
}

fn read_or<S, T, F>(store: &S, key: &str, default: F) -> T
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let Some(raw) = store.get(key) else {
        return default();
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            debug!(key, error = %e, "ignoring undecodable preference");
            default()
        }
    }
}

fn write<S, T>(store: &mut S, key: &str, value: &T) -> Result<(), StoreError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let encoded = serde_json::to_string(value)?;
    store.set(key, encoded)
}

/// Preferences bound to the store they persist to.
#[derive(Debug)]
pub struct PreferenceStore<S> {
    store: S,
    keys: PreferenceKeys,
    defaults: Preferences,
    current: Preferences,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    /// Loads the preferences of `conference` from `store`.
    pub fn open(store: S, conference: &Conference) -> Self {
        let keys = PreferenceKeys::with_prefix(&conference.storage_prefix);
        let defaults = Preferences::defaults(conference);
        let current = Preferences::load(&store, &keys, &defaults);
        debug!(?current, "loaded preferences");
        Self {
            store,
            keys,
            defaults,
            current,
        }
    }

    /// The current values.
    pub fn get(&self) -> &Preferences {
        &self.current
    }

    /// Consumes the wrapper and returns the backing store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Replaces both category lists.
    ///
    /// The two lists live under separate keys. If the second write fails the
    /// first one is reverted; if the revert fails too, memory takes the
    /// stored enabled list so both sides still agree.
    pub fn set_category_selection(
        &mut self,
        enabled: Vec<String>,
        disabled: Vec<String>,
    ) -> Result<(), StoreError> {
        write(&mut self.store, &self.keys.enabled_categories, &enabled)?;
        if let Err(err) = write(&mut self.store, &self.keys.disabled_categories, &disabled) {
            let previous = &self.current.enabled_categories;
            if let Err(revert) = write(&mut self.store, &self.keys.enabled_categories, previous) {
                warn!(error = %revert, "could not revert enabled categories");
                self.current.enabled_categories = enabled;
            }
            return Err(err);
        }
        info!(?enabled, ?disabled, "updated category selection");
        self.current.enabled_categories = enabled;
        self.current.disabled_categories = disabled;
        Ok(())
    }

    /// Cycles a category: neutral, then enabled, then disabled, then neutral.
    pub fn toggle_category(&mut self, category: &str) -> Result<(), StoreError> {
        let prefs = &self.current;
        let (enabled, disabled) = if prefs.is_enabled(category) {
            let enabled = without(&prefs.enabled_categories, category);
            let mut disabled = prefs.disabled_categories.clone();
            disabled.push(category.to_string());
            (enabled, disabled)
        } else if prefs.is_disabled(category) {
            (
                prefs.enabled_categories.clone(),
                without(&prefs.disabled_categories, category),
            )
        } else {
            let mut enabled = prefs.enabled_categories.clone();
            enabled.push(category.to_string());
            (enabled, prefs.disabled_categories.clone())
        };
        self.set_category_selection(enabled, disabled)
    }

    pub fn clear_enabled(&mut self) -> Result<(), StoreError> {
        let disabled = self.current.disabled_categories.clone();
        self.set_category_selection(Vec::new(), disabled)
    }

    pub fn clear_disabled(&mut self) -> Result<(), StoreError> {
        let enabled = self.current.enabled_categories.clone();
        self.set_category_selection(enabled, Vec::new())
    }

    /// Restores the conference's default category lists.
    ///
    /// The two flags are left alone.
    pub fn restore_defaults(&mut self) -> Result<(), StoreError> {
        self.set_category_selection(
            self.defaults.enabled_categories.clone(),
            self.defaults.disabled_categories.clone(),
        )
    }

    pub fn toggle_hide_recorded(&mut self) -> Result<(), StoreError> {
        let value = !self.current.hide_recorded;
        write(&mut self.store, &self.keys.hide_recorded, &value)?;
        info!(hide_recorded = value, "toggled hide recorded");
        self.current.hide_recorded = value;
        Ok(())
    }

    pub fn toggle_break_down(&mut self) -> Result<(), StoreError> {
        let value = !self.current.break_down;
        write(&mut self.store, &self.keys.break_down, &value)?;
        info!(break_down = value, "toggled break down");
        self.current.break_down = value;
        Ok(())
    }
}

fn without(list: &[String], item: &str) -> Vec<String> {
    list.iter().filter(|c| *c != item).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store that refuses every write.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: String) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    /// Store that accepts a fixed number of writes, then refuses the rest.
    struct LimitedStore {
        inner: MemoryStore,
        writes_left: usize,
    }

    impl LimitedStore {
        fn new(writes_left: usize) -> Self {
            Self {
                inner: MemoryStore::new(),
                writes_left,
            }
        }
    }

    impl KeyValueStore for LimitedStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
            if self.writes_left == 0 {
                return ReadOnlyStore.set(key, value);
            }
            self.writes_left -= 1;
            self.inner.set(key, value)
        }
    }

    /// Store that refuses writes to one key only.
    struct RejectKeyStore {
        inner: MemoryStore,
        rejected: String,
    }

    impl KeyValueStore for RejectKeyStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
            if key == self.rejected {
                return ReadOnlyStore.set(key, value);
            }
            self.inner.set(key, value)
        }
    }

    fn reload<S: KeyValueStore>(store: &S) -> Preferences {
        let conference = Conference::default();
        Preferences::load(
            store,
            &PreferenceKeys::with_prefix(&conference.storage_prefix),
            &Preferences::defaults(&conference),
        )
    }

    fn open_empty() -> PreferenceStore<MemoryStore> {
        PreferenceStore::open(MemoryStore::new(), &Conference::default())
    }

    mod keys {
        use super::*;

        #[test]
        fn derived_from_prefix() {
            let keys = PreferenceKeys::with_prefix("sane-sg23");
            assert_eq!(keys.enabled_categories, "sane-sg23-enabled-types");
            assert_eq!(keys.disabled_categories, "sane-sg23-disabled-types");
            assert_eq!(keys.hide_recorded, "sane-sg23-only-not-recorded");
            assert_eq!(keys.break_down, "sane-sg23-breakdown");
        }
    }

    mod load {
        use super::*;

        #[test]
        fn empty_store_gives_defaults() {
            let prefs = open_empty();
            assert_eq!(prefs.get(), &Preferences::defaults(&Conference::default()));
            assert!(!prefs.get().hide_recorded);
            assert!(prefs.get().break_down);
        }

        #[test]
        fn reads_stored_values() {
            let mut store = MemoryStore::new();
            store
                .set("sane-sg23-enabled-types", r#"["Poster"]"#.to_string())
                .unwrap();
            store
                .set("sane-sg23-disabled-types", "[]".to_string())
                .unwrap();
            store
                .set("sane-sg23-only-not-recorded", "true".to_string())
                .unwrap();
            store.set("sane-sg23-breakdown", "false".to_string()).unwrap();

            let prefs = PreferenceStore::open(store, &Conference::default());
            assert_eq!(prefs.get().enabled_categories, vec!["Poster"]);
            assert!(prefs.get().disabled_categories.is_empty());
            assert!(prefs.get().hide_recorded);
            assert!(!prefs.get().break_down);
        }

        #[test]
        fn malformed_values_fall_back_per_key() {
            let mut store = MemoryStore::new();
            store
                .set("sane-sg23-enabled-types", "[\"Talk\"".to_string())
                .unwrap();
            store
                .set("sane-sg23-breakdown", "\"yes\"".to_string())
                .unwrap();
            store
                .set("sane-sg23-only-not-recorded", "true".to_string())
                .unwrap();

            let conference = Conference::default();
            let prefs = PreferenceStore::open(store, &conference);
            assert_eq!(prefs.get().enabled_categories, conference.default_enabled);
            assert!(prefs.get().break_down);
            assert!(prefs.get().hide_recorded);
        }
    }

    mod toggles {
        use super::*;

        #[test]
        fn category_cycle() {
            let mut prefs = open_empty();
            prefs.clear_enabled().unwrap();
            prefs.clear_disabled().unwrap();

            prefs.toggle_category("Talk").unwrap();
            assert!(prefs.get().is_enabled("Talk"));
            assert!(!prefs.get().is_disabled("Talk"));

            prefs.toggle_category("Talk").unwrap();
            assert!(!prefs.get().is_enabled("Talk"));
            assert!(prefs.get().is_disabled("Talk"));

            prefs.toggle_category("Talk").unwrap();
            assert!(!prefs.get().is_enabled("Talk"));
            assert!(!prefs.get().is_disabled("Talk"));
        }

        #[test]
        fn writes_complete_values() {
            let mut prefs = open_empty();
            prefs.toggle_category("Poster").unwrap();

            let store = prefs.into_inner();
            let disabled: Vec<String> =
                serde_json::from_str(&store.get("sane-sg23-disabled-types").unwrap()).unwrap();
            assert!(!disabled.contains(&"Poster".to_string()));
            assert_eq!(disabled.len(), 4);

            let enabled: Vec<String> =
                serde_json::from_str(&store.get("sane-sg23-enabled-types").unwrap()).unwrap();
            assert_eq!(enabled.len(), 5);
        }

        #[test]
        fn clear_and_restore() {
            let conference = Conference::default();
            let mut prefs = open_empty();

            prefs.clear_enabled().unwrap();
            assert!(prefs.get().enabled_categories.is_empty());
            assert_eq!(prefs.get().disabled_categories, conference.default_disabled);

            prefs.clear_disabled().unwrap();
            assert!(prefs.get().disabled_categories.is_empty());

            prefs.toggle_break_down().unwrap();
            prefs.restore_defaults().unwrap();
            assert_eq!(prefs.get().enabled_categories, conference.default_enabled);
            assert_eq!(prefs.get().disabled_categories, conference.default_disabled);
            assert!(!prefs.get().break_down);
        }

        #[test]
        fn flags_persist() {
            let mut prefs = open_empty();
            prefs.toggle_hide_recorded().unwrap();
            prefs.toggle_break_down().unwrap();
            assert!(prefs.get().hide_recorded);
            assert!(!prefs.get().break_down);

            let reopened = PreferenceStore::open(prefs.into_inner(), &Conference::default());
            assert!(reopened.get().hide_recorded);
            assert!(!reopened.get().break_down);
        }

        #[test]
        fn failed_write_leaves_state_untouched() {
            let mut prefs = PreferenceStore::open(ReadOnlyStore, &Conference::default());
            let before = prefs.get().clone();

            assert!(prefs.toggle_category("Talk").is_err());
            assert!(prefs.toggle_hide_recorded().is_err());
            assert!(prefs.toggle_break_down().is_err());
            assert_eq!(prefs.get(), &before);
        }

        #[test]
        fn failed_second_write_is_reverted() {
            let store = RejectKeyStore {
                inner: MemoryStore::new(),
                rejected: "sane-sg23-disabled-types".to_string(),
            };
            let mut prefs = PreferenceStore::open(store, &Conference::default());
            let before = prefs.get().clone();

            assert!(prefs.toggle_category("Talk").is_err());
            assert_eq!(prefs.get(), &before);

            let store = prefs.into_inner();
            assert_eq!(reload(&store), before);
        }

        #[test]
        fn failed_revert_keeps_memory_in_sync() {
            let mut prefs = PreferenceStore::open(LimitedStore::new(1), &Conference::default());

            assert!(prefs.toggle_category("Talk").is_err());
            assert!(!prefs.get().is_enabled("Talk"));
            assert!(!prefs.get().is_disabled("Talk"));

            let current = prefs.get().clone();
            let store = prefs.into_inner();
            assert_eq!(reload(&store), current);
        }
    }
}
