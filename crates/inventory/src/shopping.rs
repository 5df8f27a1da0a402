//! Shopping list generation.

use serde::{Deserialize, Serialize};

use babykit_core::ItemId;

use crate::catalogue::Unit;
use crate::item::Item;
use crate::status::needs_restock;

/// Restock target as a multiple of the threshold.
///
/// The recommended quantity never drops below the threshold itself; that floor
/// is product policy, not a derived invariant.
pub const RESTOCK_MULTIPLIER: u32 = 2;

/// `max(RESTOCK_MULTIPLIER * min_threshold - current_stock, min_threshold)`.
///
/// Defined for every item, but only meaningful for items that need restocking.
pub fn shopping_quantity(item: &Item) -> u32 {
    let threshold = item.min_threshold();
    let target = RESTOCK_MULTIPLIER.saturating_mul(threshold);
    target.saturating_sub(item.current_stock()).max(threshold)
}

/// One line of the shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListEntry {
    pub item_id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub unit: Unit,
}

/// Entries for every low or out-of-stock item, in collection order.
pub fn shopping_list(items: &[Item]) -> Vec<ShoppingListEntry> {
    items
        .iter()
        .filter(|item| needs_restock(item))
        .map(|item| ShoppingListEntry {
            item_id: item.id_typed(),
            name: item.name().to_string(),
            quantity: shopping_quantity(item),
            unit: item.unit().clone(),
        })
        .collect()
}
