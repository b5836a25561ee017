use super::ItemStore;
use crate::model::Item;

/// Vec-backed storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: Vec<Item>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }
}

impl ItemStore for InMemoryStore {
    fn items(&self) -> &[Item] {
        &self.items
    }

    fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    fn swap_remove(&mut self, index: usize) -> Option<Item> {
        if index >= self.items.len() {
            return None;
        }
        Some(self.items.swap_remove(index))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Category;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` items with ids "item-1".."item-N", cycling through categories.
        pub fn with_items(mut self, count: usize) -> Self {
            for i in 0..count {
                let category = Category::ALL[i % Category::ALL.len()];
                self.store.push(Item::new(
                    format!("item-{}", i + 1),
                    format!("Item{}", i + 1),
                    (i as u32 + 1) * 10,
                    (i as f64 + 1.0) * 2.5,
                    category,
                ));
            }
            self
        }

        /// Adds one item per quantity, ids "q0", "q1", ... in the given order.
        pub fn with_quantities(mut self, quantities: &[u32]) -> Self {
            for (i, quantity) in quantities.iter().enumerate() {
                self.store.push(Item::new(
                    format!("q{}", i),
                    format!("Qty{}", quantity),
                    *quantity,
                    1.0,
                    Category::Clothing,
                ));
            }
            self
        }

        pub fn with_item(mut self, item: Item) -> Self {
            self.store.push(item);
            self
        }
    }
}
