//! Inventory manager: owns the in-memory collection and mirrors it to storage.
//!
//! The collection is loaded once when the manager is opened. Every mutation
//! builds the next collection, writes it in full through the injected
//! `InventoryStore`, and only then replaces the in-memory copy, so the manager
//! never holds state the store did not accept.
//!
//! Operations addressing a missing identifier are no-ops: they return `false`
//! and do not write.

use chrono::{DateTime, Utc};

use babykit_core::{Entity, ItemId, entity::position_of};
use babykit_inventory::{InventorySnapshot, Item, ItemDraft, ItemForm};

use crate::error::{InventoryResult, StoreError};
use crate::inventory_store::InventoryStore;

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub struct InventoryManager<S>
where
    S: InventoryStore,
{
    store: S,
    items: Vec<Item>,
    clock: Clock,
}

impl<S> InventoryManager<S>
where
    S: InventoryStore,
{
    /// Load the collection from `store` (absent record ⇒ empty).
    pub fn open(store: S) -> Result<Self, StoreError> {
        let items = store.load()?;
        Ok(Self {
            store,
            items,
            clock: Box::new(Utc::now),
        })
    }

    /// Replace the timestamp source used for `last_updated`.
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current collection with derived status, alerts and shopping list.
    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot::from_items(&self.items)
    }

    /// Append a new item built from `draft` and persist. Returns its identifier.
    pub fn add_item(&mut self, draft: ItemDraft) -> Result<ItemId, StoreError> {
        let id = ItemId::new();
        let item = Item::create(id, draft, (self.clock)());

        let mut next = self.items.clone();
        next.push(item);
        self.commit(next)?;

        tracing::info!(item_id = %id, count = self.items.len(), "item added");
        Ok(id)
    }

    /// Form-level add: incomplete or invalid input is refused without a trace
    /// in the collection, returning `Ok(None)`.
    pub fn submit_new(&mut self, form: &ItemForm) -> Result<Option<ItemId>, StoreError> {
        match ItemDraft::try_from(form) {
            Ok(draft) => self.add_item(draft).map(Some),
            Err(err) => {
                tracing::debug!(error = %err, "add refused");
                Ok(None)
            }
        }
    }

    /// Replace the mutable fields of item `id`, keeping its position.
    pub fn update_item(&mut self, id: &ItemId, draft: ItemDraft) -> Result<bool, StoreError> {
        let now = (self.clock)();
        self.mutate(id, "item updated", |item| item.apply_draft(draft, now))
    }

    /// Form-level edit. Unlike `submit_new`, invalid input is reported.
    pub fn submit_edit(&mut self, id: &ItemId, form: &ItemForm) -> InventoryResult<bool> {
        let Some(current) = self.get(id) else {
            tracing::debug!(item_id = %id, "edit ignored: unknown item");
            return Ok(false);
        };
        let draft = ItemDraft::for_edit(form, current)?;
        Ok(self.update_item(id, draft)?)
    }

    pub fn delete_item(&mut self, id: &ItemId) -> Result<bool, StoreError> {
        let Some(index) = position_of(&self.items, id) else {
            tracing::debug!(item_id = %id, "delete ignored: unknown item");
            return Ok(false);
        };

        let mut next = self.items.clone();
        next.remove(index);
        self.commit(next)?;

        tracing::info!(item_id = %id, count = self.items.len(), "item deleted");
        Ok(true)
    }

    /// Record a new stock count for item `id`.
    pub fn set_stock(&mut self, id: &ItemId, quantity: u32) -> Result<bool, StoreError> {
        let now = (self.clock)();
        self.mutate(id, "stock updated", |item| item.set_stock(quantity, now))
    }

    fn mutate(
        &mut self,
        id: &ItemId,
        what: &'static str,
        change: impl FnOnce(&mut Item),
    ) -> Result<bool, StoreError> {
        let Some(index) = position_of(&self.items, id) else {
            tracing::debug!(item_id = %id, "{what} ignored: unknown item");
            return Ok(false);
        };

        let mut next = self.items.clone();
        change(&mut next[index]);
        self.commit(next)?;

        let item = &self.items[index];
        tracing::info!(
            item_id = %id,
            stock = item.current_stock(),
            status = item.status().code(),
            "{what}"
        );
        Ok(true)
    }

    fn commit(&mut self, next: Vec<Item>) -> Result<(), StoreError> {
        self.store.save(&next)?;
        self.items = next;
        Ok(())
    }
}
