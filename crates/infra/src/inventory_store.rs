//! Persistence port for the inventory collection.

use std::sync::Arc;

use babykit_inventory::Item;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Storage key holding the whole collection.
pub const INVENTORY_KEY: &str = "babyInventory";

/// Load/save the full ordered collection. Saves overwrite; there is no partial update.
pub trait InventoryStore {
    /// Read the collection; an absent record yields an empty collection.
    fn load(&self) -> Result<Vec<Item>, StoreError>;
    fn save(&self, items: &[Item]) -> Result<(), StoreError>;
}

impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    fn load(&self) -> Result<Vec<Item>, StoreError> {
        (**self).load()
    }

    fn save(&self, items: &[Item]) -> Result<(), StoreError> {
        (**self).save(items)
    }
}

/// Inventory stored as a JSON array under a single key of a key-value backend.
#[derive(Debug, Clone)]
pub struct KeyValueInventoryStore<B> {
    backend: B,
    key: String,
}

impl<B: KeyValueStore> KeyValueInventoryStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, INVENTORY_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<B: KeyValueStore> InventoryStore for KeyValueInventoryStore<B> {
    fn load(&self) -> Result<Vec<Item>, StoreError> {
        let Some(raw) = self.backend.get(&self.key)? else {
            tracing::debug!(key = %self.key, "no stored inventory, starting empty");
            return Ok(Vec::new());
        };

        let items: Vec<Item> = serde_json::from_str(&raw).map_err(|source| StoreError::Serde {
            key: self.key.clone(),
            source,
        })?;

        for item in items.iter().filter(|i| !i.category().is_known() || !i.unit().is_known()) {
            tracing::warn!(
                item_id = %item.id_typed(),
                category = %item.category(),
                unit = %item.unit(),
                "stored item uses an unrecognized category or unit"
            );
        }

        tracing::debug!(key = %self.key, count = items.len(), "loaded inventory");
        Ok(items)
    }

    fn save(&self, items: &[Item]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(items).map_err(|source| StoreError::Serde {
            key: self.key.clone(),
            source,
        })?;
        self.backend.set(&self.key, &raw)?;
        tracing::debug!(key = %self.key, count = items.len(), "saved inventory");
        Ok(())
    }
}
