use std::collections::HashMap;
use std::sync::RwLock;

use super::KeyValueStore;
use crate::error::StoreError;

/// In-memory key-value store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    inner: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value directly (e.g. to simulate data left by an older build).
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut map) = store.inner.write() {
            map.insert(key.into(), value.into());
        }
        store
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let map = self
            .inner
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self
            .inner
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
