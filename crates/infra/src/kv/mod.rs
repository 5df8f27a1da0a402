//! Flat key-value storage backends.
//!
//! The inventory is persisted as one string value under one key, the same
//! shape as a browser's local storage. Backends only move strings around;
//! serialization lives in `inventory_store`.

mod file;
mod in_memory;

pub use file::FileKeyValueStore;
pub use in_memory::InMemoryKeyValueStore;

use std::sync::Arc;

use crate::error::StoreError;

/// Durable string store addressed by key. Writes replace the whole value.
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
