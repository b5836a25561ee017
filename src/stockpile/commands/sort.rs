use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Item, SortKey, SortOrder};
use crate::store::ItemStore;
use std::cmp::Ordering;
use tracing::debug;

/// Reorders the stored items by `key` and lists them. The new order is kept.
pub fn run<S: ItemStore>(store: &mut S, key: SortKey, order: SortOrder) -> Result<CmdResult> {
    store.items_mut().sort_by(|a, b| {
        let ord = compare(a, b, key);
        match order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
    debug!(?key, ?order, count = store.len(), "items sorted");

    Ok(CmdResult::default().with_listed_items(store.items().to_vec()))
}

fn compare(a: &Item, b: &Item, key: SortKey) -> Ordering {
    match key {
        SortKey::Quantity => a.quantity().cmp(&b.quantity()),
        SortKey::Price => a.price().total_cmp(&b.price()),
    }
}
