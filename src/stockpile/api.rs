//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for inventory operations, whatever client drives them.
//!
//! `InventoryApi` owns the store and the [`InventoryConfig`]; it supplies the
//! configured capacity and low-stock threshold to the commands that need them and
//! otherwise just dispatches. It never prints and never prompts.
//!
//! The query helpers (`contains_id`, `id_available_for`, `is_full`) exist so an
//! interactive client can validate input up front and re-prompt, while the
//! commands still enforce the same rules on their own.

use crate::commands;
use crate::config::InventoryConfig;
use crate::error::Result;
use crate::model::{Category, Item, NewItem, SortKey, SortOrder};
use crate::store::ItemStore;

/// The main API facade, generic over the storage backend.
pub struct InventoryApi<S: ItemStore> {
    store: S,
    config: InventoryConfig,
}

impl<S: ItemStore> InventoryApi<S> {
    pub fn new(store: S, config: InventoryConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    pub fn is_full(&self) -> bool {
        self.store.len() >= self.config.max_items
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.store.position(id).is_some()
    }

    /// Whether the item currently named `current` may take `candidate` as its id.
    pub fn id_available_for(&self, current: &str, candidate: &str) -> bool {
        let except = self.store.position(current);
        !commands::helpers::id_taken(&self.store, candidate, except)
    }

    pub fn add_item(&mut self, new_item: NewItem) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, self.config.max_items, new_item)
    }

    pub fn update_item(
        &mut self,
        id: &str,
        update: commands::ItemUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn remove_item(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    pub fn list_items(&self) -> Result<commands::CmdResult> {
        commands::list::all(&self.store)
    }

    pub fn list_by_category(&self, category: Category) -> Result<commands::CmdResult> {
        commands::list::by_category(&self.store, category)
    }

    pub fn search_item(&self, id: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, id)
    }

    pub fn sort_items(&mut self, key: SortKey, order: SortOrder) -> Result<commands::CmdResult> {
        commands::sort::run(&mut self.store, key, order)
    }

    pub fn low_stock_items(&self) -> Result<commands::CmdResult> {
        commands::low_stock::run(&self.store, self.config.low_stock_threshold)
    }
}

pub use commands::{CmdMessage, CmdResult, ItemUpdate, MessageLevel};
