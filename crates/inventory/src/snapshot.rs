//! Derived views handed to a presentation layer.

use serde::Serialize;

use crate::item::Item;
use crate::shopping::{ShoppingListEntry, shopping_list};
use crate::status::{StockStatus, derive_status, low_stock_items, out_of_stock_items};

/// An item together with its derived status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    #[serde(flatten)]
    pub item: Item,
    pub status: StockStatus,
}

impl ItemView {
    pub fn new(item: &Item) -> Self {
        Self {
            item: item.clone(),
            status: derive_status(item),
        }
    }
}

/// Everything a screen needs: the collection plus the three derived views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    pub items: Vec<ItemView>,
    pub out_of_stock: Vec<ItemView>,
    pub low_stock: Vec<ItemView>,
    pub shopping_list: Vec<ShoppingListEntry>,
}

impl InventorySnapshot {
    pub fn from_items(records: &[Item]) -> Self {
        let views = |items: Vec<&Item>| items.into_iter().map(ItemView::new).collect();

        Self {
            items: records.iter().map(ItemView::new).collect(),
            out_of_stock: views(out_of_stock_items(records)),
            low_stock: views(low_stock_items(records)),
            shopping_list: shopping_list(records),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_alerts(&self) -> bool {
        !self.out_of_stock.is_empty() || !self.low_stock.is_empty()
    }
}
