//! Stock status derivation.
//!
//! Status is recomputed from `current_stock` and `min_threshold` on every read;
//! it is never stored on the record.

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Stock status of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Nothing left.
    OutOfStock,
    /// Some left, but at or below the threshold.
    LowStock,
    /// Above the threshold.
    InStock,
}

impl StockStatus {
    /// Short stable code (`out`, `low`, `good`).
    pub fn code(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "out",
            StockStatus::LowStock => "low",
            StockStatus::InStock => "good",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }

    pub fn needs_restock(&self) -> bool {
        !matches!(self, StockStatus::InStock)
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Status for a raw stock/threshold pair. Stock equal to the threshold is low.
pub fn status_for(current_stock: u32, min_threshold: u32) -> StockStatus {
    if current_stock == 0 {
        StockStatus::OutOfStock
    } else if current_stock <= min_threshold {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

pub fn derive_status(item: &Item) -> StockStatus {
    status_for(item.current_stock(), item.min_threshold())
}

pub fn needs_restock(item: &Item) -> bool {
    derive_status(item).needs_restock()
}

/// Items that are low but not out, in collection order.
pub fn low_stock_items(items: &[Item]) -> Vec<&Item> {
    filter_by_status(items, StockStatus::LowStock)
}

/// Items with zero stock, in collection order.
pub fn out_of_stock_items(items: &[Item]) -> Vec<&Item> {
    filter_by_status(items, StockStatus::OutOfStock)
}

fn filter_by_status(items: &[Item], status: StockStatus) -> Vec<&Item> {
    items.iter().filter(|item| derive_status(item) == status).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{Category, Unit};
    use crate::form::ItemDraft;
    use babykit_core::ItemId;
    use chrono::Utc;

    fn item(name: &str, stock: u32, threshold: u32) -> Item {
        let draft = ItemDraft::new(name, Category::Other, stock, threshold, Unit::Pieces).unwrap();
        Item::create(ItemId::new(), draft, Utc::now())
    }

    #[test]
    fn threshold_boundaries() {
        assert_eq!(status_for(0, 5), StockStatus::OutOfStock);
        assert_eq!(status_for(1, 5), StockStatus::LowStock);
        assert_eq!(status_for(5, 5), StockStatus::LowStock);
        assert_eq!(status_for(6, 5), StockStatus::InStock);
    }

    #[test]
    fn zero_threshold_items_are_in_stock_until_empty() {
        assert_eq!(status_for(0, 0), StockStatus::OutOfStock);
        assert_eq!(status_for(1, 0), StockStatus::InStock);
    }

    #[test]
    fn filters_keep_collection_order() {
        let items = vec![
            item("wipes", 1, 3),
            item("formula", 0, 2),
            item("bibs", 9, 3),
            item("diapers", 3, 3),
            item("pacifier", 0, 1),
        ];

        let low: Vec<&str> = low_stock_items(&items).iter().map(|i| i.name()).collect();
        let out: Vec<&str> = out_of_stock_items(&items).iter().map(|i| i.name()).collect();

        assert_eq!(low, vec!["wipes", "diapers"]);
        assert_eq!(out, vec!["formula", "pacifier"]);
        assert!(!needs_restock(&items[2]));
        assert!(needs_restock(&items[1]));
    }

    #[test]
    fn codes_and_labels() {
        assert_eq!(StockStatus::OutOfStock.code(), "out");
        assert_eq!(StockStatus::LowStock.label(), "Low Stock");
        assert_eq!(StockStatus::InStock.to_string(), "In Stock");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: exactly one status holds, and it matches its defining predicate.
            #[test]
            fn status_is_exhaustive_and_exclusive(stock in 0u32..10_000, threshold in 0u32..10_000) {
                let status = status_for(stock, threshold);

                let out = stock == 0;
                let low = stock > 0 && stock <= threshold;
                let good = stock > threshold && stock > 0;

                prop_assert_eq!([out, low, good].iter().filter(|b| **b).count(), 1);
                prop_assert_eq!(status == StockStatus::OutOfStock, out);
                prop_assert_eq!(status == StockStatus::LowStock, low);
                prop_assert_eq!(status == StockStatus::InStock, good);
            }
        }
    }
}
