use crate::commands::{CmdMessage, CmdResult, ItemUpdate};
use crate::error::{Result, StockpileError};
use crate::store::ItemStore;
use tracing::info;

use super::helpers::{id_taken, resolve_id, valid_price};

/// Applies exactly one field change to the item currently identified by `id`.
///
/// Renaming an item to its own id is accepted and changes nothing.
pub fn run<S: ItemStore>(store: &mut S, id: &str, update: ItemUpdate) -> Result<CmdResult> {
    let index = resolve_id(store, id)?;

    let message = match update {
        ItemUpdate::Quantity(quantity) => {
            let item = &mut store.items_mut()[index];
            let old = item.quantity();
            item.set_quantity(quantity);
            info!(id, old, new = quantity, "quantity updated");
            format!(
                "Quantity of Item '{}' is updated from {} to {}",
                item.name(),
                old,
                quantity
            )
        }
        ItemUpdate::Price(price) => {
            if !valid_price(price) {
                return Err(StockpileError::InvalidPrice(price));
            }
            let item = &mut store.items_mut()[index];
            let old = item.price();
            item.set_price(price);
            info!(id, old, new = price, "price updated");
            format!(
                "Price of Item '{}' is updated from {:.2} to {:.2}",
                item.name(),
                old,
                price
            )
        }
        ItemUpdate::Id(new_id) => {
            if id_taken(store, &new_id, Some(index)) {
                return Err(StockpileError::DuplicateId(new_id));
            }
            info!(old = id, new = %new_id, "id updated");
            let message = format!("ID of Item is updated to '{}'.", new_id);
            store.items_mut()[index].set_id(new_id);
            message
        }
    };

    let item = store.items()[index].clone();
    Ok(CmdResult::default()
        .with_affected_items(vec![item])
        .with_message(CmdMessage::success(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::search;
    use crate::model::{Category, Item};
    use crate::store::memory::fixtures::StoreFixture;

    fn store() -> crate::store::memory::InMemoryStore {
        StoreFixture::new()
            .with_item(Item::new("a", "Jacket", 2, 49.5, Category::Clothing))
            .with_item(Item::new("b", "Console", 8, 299.0, Category::Electronics))
            .store
    }

    #[test]
    fn updates_quantity_and_reports_old_and_new() {
        let mut store = store();
        let result = run(&mut store, "a", ItemUpdate::Quantity(12)).unwrap();

        assert_eq!(store.items()[0].quantity(), 12);
        assert_eq!(
            result.messages[0].content,
            "Quantity of Item 'Jacket' is updated from 2 to 12"
        );
    }

    #[test]
    fn updates_price_with_two_decimals() {
        let mut store = store();
        let result = run(&mut store, "b", ItemUpdate::Price(250.0)).unwrap();

        assert_eq!(store.items()[1].price(), 250.0);
        assert_eq!(
            result.messages[0].content,
            "Price of Item 'Console' is updated from 299.00 to 250.00"
        );
    }

    #[test]
    fn rejects_negative_price() {
        let mut store = store();
        let err = run(&mut store, "b", ItemUpdate::Price(-3.0)).unwrap_err();
        assert!(matches!(err, StockpileError::InvalidPrice(_)));
        assert_eq!(store.items()[1].price(), 299.0);
    }

    #[test]
    fn renames_to_unused_id() {
        let mut store = store();
        run(&mut store, "a", ItemUpdate::Id("z".into())).unwrap();

        assert!(search::run(&store, "a").is_err());
        let found = search::run(&store, "z").unwrap();
        assert_eq!(found.listed_items[0].name(), "Jacket");
    }

    #[test]
    fn rename_to_other_items_id_is_rejected() {
        let mut store = store();
        let err = run(&mut store, "a", ItemUpdate::Id("b".into())).unwrap_err();

        assert!(matches!(err, StockpileError::DuplicateId(id) if id == "b"));
        assert_eq!(store.items()[0].id(), "a");
        assert_eq!(store.items()[1].id(), "b");
    }

    #[test]
    fn rename_to_own_id_is_a_no_op() {
        let mut store = store();
        let result = run(&mut store, "a", ItemUpdate::Id("a".into())).unwrap();

        assert_eq!(store.items()[0].id(), "a");
        assert_eq!(result.messages[0].content, "ID of Item is updated to 'a'.");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = store();
        let err = run(&mut store, "missing", ItemUpdate::Quantity(1)).unwrap_err();
        assert!(matches!(err, StockpileError::ItemNotFound(_)));
    }
}
