use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use babykit_core::{Entity, ItemId};

use crate::catalogue::{Category, Unit};
use crate::form::ItemDraft;
use crate::status::{StockStatus, derive_status};

/// A tracked supply: the only entity of the inventory.
///
/// Serialized with camelCase keys so the stored record stays
/// `{"id","name","category","currentStock","minThreshold","unit","notes","lastUpdated"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    id: ItemId,
    name: String,
    category: Category,
    current_stock: u32,
    min_threshold: u32,
    unit: Unit,
    #[serde(default, with = "notes_field")]
    notes: Option<String>,
    last_updated: DateTime<Utc>,
}

impl Item {
    /// Build a new record from a validated draft.
    pub fn create(id: ItemId, draft: ItemDraft, now: DateTime<Utc>) -> Self {
        let mut item = Self {
            id,
            name: String::new(),
            category: Category::default(),
            current_stock: 0,
            min_threshold: 0,
            unit: Unit::default(),
            notes: None,
            last_updated: now,
        };
        item.apply_draft(draft, now);
        item
    }

    /// Replace every mutable field with the draft's values. Identity is kept.
    pub fn apply_draft(&mut self, draft: ItemDraft, now: DateTime<Utc>) {
        let ItemDraft {
            name,
            category,
            current_stock,
            min_threshold,
            unit,
            notes,
        } = draft;

        self.name = name;
        self.category = category;
        self.current_stock = current_stock;
        self.min_threshold = min_threshold;
        self.unit = unit;
        self.notes = notes;
        self.last_updated = now;
    }

    /// Record a new stock count, leaving everything else untouched.
    pub fn set_stock(&mut self, quantity: u32, now: DateTime<Utc>) {
        self.current_stock = quantity;
        self.last_updated = now;
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn current_stock(&self) -> u32 {
        self.current_stock
    }

    pub fn min_threshold(&self) -> u32 {
        self.min_threshold
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn status(&self) -> StockStatus {
        derive_status(self)
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Absent notes are stored as `""`; empty, blank, missing or `null` read back as `None`.
mod notes_field {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(notes: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(notes.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.filter(|n| !n.trim().is_empty()))
    }
}
