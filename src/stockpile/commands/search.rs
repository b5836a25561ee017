use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ItemStore;
use tracing::debug;

use super::helpers::resolve_id;

pub fn run<S: ItemStore>(store: &S, id: &str) -> Result<CmdResult> {
    let index = resolve_id(store, id)?;
    debug!(id, index, "item found");
    Ok(CmdResult::default().with_listed_items(vec![store.items()[index].clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockpileError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn finds_item_by_exact_id() {
        let store = StoreFixture::new().with_items(3).store;
        let result = run(&store, "item-3").unwrap();

        assert_eq!(result.listed_items.len(), 1);
        assert_eq!(result.listed_items[0].name(), "Item3");
    }

    #[test]
    fn missing_id_is_not_found() {
        let store = StoreFixture::new().with_items(3).store;
        assert!(matches!(
            run(&store, "item"),
            Err(StockpileError::ItemNotFound(_))
        ));
    }
}
