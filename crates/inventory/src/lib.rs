//! Inventory domain module.
//!
//! Business rules for the baby-essentials inventory, implemented purely as
//! deterministic domain logic (no IO, no storage). Stock status and the
//! shopping list are derived on every read and never stored.

pub mod catalogue;
pub mod form;
pub mod item;
pub mod shopping;
pub mod snapshot;
pub mod status;

pub use catalogue::{Category, Unit};
pub use form::{ItemDraft, ItemForm};
pub use item::Item;
pub use shopping::{RESTOCK_MULTIPLIER, ShoppingListEntry, shopping_list, shopping_quantity};
pub use snapshot::{InventorySnapshot, ItemView};
pub use status::{
    StockStatus, derive_status, low_stock_items, needs_restock, out_of_stock_items, status_for,
};
