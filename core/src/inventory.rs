//! The backpack itself: an ordered, capacity-bounded list of [`Item`]s.
//!
//! Lookups are a sequential scan from the front and always resolve to the
//! first item whose name matches exactly. Duplicate names are allowed.

use mochila_common::error::InventoryError;
use mochila_common::item::Item;
use tracing::{debug, info};

/// How many items the backpack can carry.
pub const CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::with_capacity(CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Validates the fields and appends a new item at the end.
    ///
    /// A full backpack is reported before the fields are looked at.
    pub fn insert(
        &mut self,
        name: &str,
        category: &str,
        quantity: i64,
    ) -> Result<&Item, InventoryError> {
        self.ensure_room()?;
        let item = Item::new(name, category, quantity)?;
        self.push(item)
    }

    /// Appends an already validated item.
    pub fn push(&mut self, item: Item) -> Result<&Item, InventoryError> {
        self.ensure_room()?;
        info!(name = item.name(), count = self.items.len() + 1, "item stored");
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Removes the first item called `name`. Everything after it moves up one slot.
    pub fn remove(&mut self, name: &str) -> Result<Item, InventoryError> {
        let idx = self.locate(name)?;
        let removed = self.items.remove(idx);
        info!(name, index = idx, count = self.items.len(), "item removed");
        Ok(removed)
    }

    pub fn search(&self, name: &str) -> Result<&Item, InventoryError> {
        let idx = self.locate(name)?;
        Ok(&self.items[idx])
    }

    pub fn list(&self) -> &[Item] {
        &self.items
    }

    /// Index of the first item whose name equals `name` (case-sensitive).
    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name() == name)
    }

    fn ensure_room(&self) -> Result<(), InventoryError> {
        if self.is_full() {
            return Err(InventoryError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    fn locate(&self, name: &str) -> Result<usize, InventoryError> {
        if self.is_empty() {
            return Err(InventoryError::EmptyInventory);
        }
        let found = self.position(name);
        debug!(name, ?found, "sequential lookup");
        found.ok_or_else(|| InventoryError::NotFound {
            name: name.to_string(),
        })
    }
}
