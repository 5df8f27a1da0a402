//! Infrastructure layer: durable storage and the inventory manager.

pub mod error;
pub mod inventory_store;
pub mod kv;
pub mod manager;


pub use error::{InventoryError, InventoryResult, StoreError};
pub use inventory_store::{INVENTORY_KEY, InventoryStore, KeyValueInventoryStore};
pub use kv::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};
pub use manager::InventoryManager;
