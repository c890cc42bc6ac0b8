//! Injected persistence for tokens and session records
//!
//! The client and session layers never touch ambient global storage; they are
//! handed a [`TokenStorage`] at construction. A browser embedding can back
//! this with local storage, a desktop embedding with the keyring, and tests
//! with [`MemoryStorage`].

use std::collections::HashMap;
use std::sync::Mutex;

/// Named string-entry store for credentials and session records
pub trait TokenStorage: Send + Sync {
    /// Read the entry stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous entry
    fn set(&self, key: &str, value: &str);

    /// Remove the entry under `key`, if any
    fn remove(&self, key: &str);
}

/// In-memory [`TokenStorage`] backed by a hash map
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("storage lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("storage lock poisoned")
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .expect("storage lock poisoned")
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k"), None);

        storage.set("k", "v1");
        assert_eq!(storage.get("k"), Some("v1".into()));

        storage.set("k", "v2");
        assert_eq!(storage.get("k"), Some("v2".into()));

        storage.remove("k");
        assert_eq!(storage.get("k"), None);
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let storage = MemoryStorage::new();
        storage.remove("absent");
        assert_eq!(storage.get("absent"), None);
    }
}
