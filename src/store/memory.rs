use indexmap::IndexMap;

use super::{KeyValueStore, StoreError};

/// Volatile store backed by an insertion-ordered map. Nothing survives the
/// process; useful for tests and `--memory` sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: IndexMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded store, mostly for tests exercising hydration.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.into(), value.into());
        store
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_last_set_value() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("formData"), None);
        store.set("formData", "first").unwrap();
        store.set("formData", "second").unwrap();
        assert_eq!(store.get("formData").as_deref(), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn seeded_store_serves_the_seed() {
        let store = MemoryStore::with_entry("formData", "{}");
        assert_eq!(store.get("formData").as_deref(), Some("{}"));
    }
}
