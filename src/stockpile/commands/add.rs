use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockpileError};
use crate::model::{Item, NewItem};
use crate::store::ItemStore;
use tracing::info;

use super::helpers::{id_taken, valid_price};

pub fn run<S: ItemStore>(store: &mut S, max_items: usize, new_item: NewItem) -> Result<CmdResult> {
    if store.len() >= max_items {
        return Err(StockpileError::InventoryFull {
            capacity: max_items,
        });
    }
    if id_taken(store, &new_item.id, None) {
        return Err(StockpileError::DuplicateId(new_item.id));
    }
    if !valid_price(new_item.price) {
        return Err(StockpileError::InvalidPrice(new_item.price));
    }

    let item = Item::from(new_item);
    info!(id = item.id(), category = %item.category(), "item added");
    store.push(item.clone());

    Ok(CmdResult::default()
        .with_affected_items(vec![item])
        .with_message(CmdMessage::success("Item added successfully!")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::store::memory::InMemoryStore;

    fn shirt(id: &str) -> NewItem {
        NewItem::new(id, "Shirt", 4, 19.99, Category::Clothing)
    }

    #[test]
    fn appends_item_at_the_end() {
        let mut store = InMemoryStore::new();
        run(&mut store, 10, shirt("a")).unwrap();
        run(&mut store, 10, shirt("b")).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.items()[1].id(), "b");
    }

    #[test]
    fn accepts_zero_quantity_and_zero_price() {
        let mut store = InMemoryStore::new();
        let result = run(
            &mut store,
            10,
            NewItem::new("free", "Sample", 0, 0.0, Category::Entertainment),
        )
        .unwrap();

        assert_eq!(result.affected_items[0].quantity(), 0);
        assert_eq!(result.messages[0].content, "Item added successfully!");
    }

    #[test]
    fn rejects_duplicate_id() {
        let mut store = InMemoryStore::new();
        run(&mut store, 10, shirt("a")).unwrap();

        let err = run(&mut store, 10, shirt("a")).unwrap_err();
        assert!(matches!(err, StockpileError::DuplicateId(id) if id == "a"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn rejects_negative_price() {
        let mut store = InMemoryStore::new();
        let err = run(
            &mut store,
            10,
            NewItem::new("a", "Radio", 1, -1.0, Category::Electronics),
        )
        .unwrap_err();
        assert!(matches!(err, StockpileError::InvalidPrice(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn rejects_add_when_full() {
        let mut store = InMemoryStore::new();
        for i in 0..3 {
            run(&mut store, 3, shirt(&format!("id{}", i))).unwrap();
        }

        let err = run(&mut store, 3, shirt("extra")).unwrap_err();
        assert!(matches!(err, StockpileError::InventoryFull { capacity: 3 }));
        assert_eq!(store.len(), 3);
    }
}
