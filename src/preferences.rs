//! Persisted transliteration preferences
//!
//! Two values survive page reloads: the selected scheme and whether the
//! dropdown shows every scheme. They are read once when the page becomes
//! ready and written back immediately on every change.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::StorageKeys;
use crate::error::Result;

/// Durable string key-value storage
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Process-lifetime store, for tests and hosts without durable storage
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The user's transliteration choices
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserPreference {
    pub selected_scheme: String,
    pub show_all: bool,
}

impl UserPreference {
    /// Preferences as stored, defaulting each missing key independently
    ///
    /// Stored schemes are not checked against the registry.
    pub fn load<S: PreferenceStore>(store: &S, keys: &StorageKeys, base_scheme: &str) -> Self {
        let selected_scheme = store
            .get(&keys.selected_scheme)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| base_scheme.to_string());
        let show_all = store.get(&keys.show_all).as_deref() == Some("true");

        Self {
            selected_scheme,
            show_all,
        }
    }

    pub fn save_scheme<S: PreferenceStore>(
        &mut self,
        store: &mut S,
        keys: &StorageKeys,
        scheme: &str,
    ) -> Result<()> {
        self.selected_scheme = scheme.to_string();
        store.set(&keys.selected_scheme, scheme)
    }

    pub fn save_show_all<S: PreferenceStore>(
        &mut self,
        store: &mut S,
        keys: &StorageKeys,
        show_all: bool,
    ) -> Result<()> {
        self.show_all = show_all;
        store.set(&keys.show_all, if show_all { "true" } else { "false" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_stored() {
        let pref = UserPreference::load(&MemoryStore::new(), &StorageKeys::default(), "iast");
        assert_eq!(pref.selected_scheme, "iast");
        assert!(!pref.show_all);
    }

    #[test]
    fn test_load_stored_values() {
        let store = MemoryStore::new()
            .with("selectedTransliterationScheme", "devanagari")
            .with("showAllTransliterationSchemes", "true");
        let pref = UserPreference::load(&store, &StorageKeys::default(), "iast");
        assert_eq!(pref.selected_scheme, "devanagari");
        assert!(pref.show_all);
    }

    #[test]
    fn test_show_all_requires_exact_true() {
        let store = MemoryStore::new().with("showAllTransliterationSchemes", "yes");
        let pref = UserPreference::load(&store, &StorageKeys::default(), "iast");
        assert!(!pref.show_all);
    }

    #[test]
    fn test_save_writes_through() {
        let keys = StorageKeys::default();
        let mut store = MemoryStore::new();
        let mut pref = UserPreference::load(&store, &keys, "iast");

        pref.save_scheme(&mut store, &keys, "hk").unwrap();
        pref.save_show_all(&mut store, &keys, true).unwrap();

        assert_eq!(store.get("selectedTransliterationScheme").as_deref(), Some("hk"));
        assert_eq!(store.get("showAllTransliterationSchemes").as_deref(), Some("true"));
        assert_eq!(UserPreference::load(&store, &keys, "iast"), pref);
    }
}
