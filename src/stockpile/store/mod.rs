//! # Storage Layer
//!
//! The [`ItemStore`] trait is the seam between the command layer and wherever the
//! items actually live. Commands only ever see an ordered slice plus a few mutation
//! primitives, so the business rules stay independent of the container.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: an owned `Vec<Item>`. Nothing is persisted.
//!
//! ## Ordering
//!
//! Storage order is observable: listings follow it, [`ItemStore::swap_remove`]
//! moves the last item into the freed slot, and sorting rewrites it through
//! [`ItemStore::items_mut`]. Capacity is not a storage concern; it is enforced by
//! the add command from `InventoryConfig`.

use crate::model::Item;

pub mod memory;

/// Abstract interface for item storage.
pub trait ItemStore {
    /// All live items in storage order
    fn items(&self) -> &[Item];

    /// Mutable view, used for in-place updates and sorting
    fn items_mut(&mut self) -> &mut [Item];

    /// Append an item at the end
    fn push(&mut self, item: Item);

    /// Remove the item at `index`, moving the last item into its slot.
    /// Returns `None` when the index is out of bounds.
    fn swap_remove(&mut self, index: usize) -> Option<Item>;

    fn len(&self) -> usize {
        self.items().len()
    }

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Index of the item with this exact id
    fn position(&self, id: &str) -> Option<usize> {
        self.items().iter().position(|item| item.id() == id)
    }
}
