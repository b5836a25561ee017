use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Category;
use crate::store::ItemStore;

/// Every item, in storage order.
pub fn all<S: ItemStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_items(store.items().to_vec()))
}

/// Items in `category`, in storage order.
pub fn by_category<S: ItemStore>(store: &S, category: Category) -> Result<CmdResult> {
    let listed: Vec<_> = store
        .items()
        .iter()
        .filter(|item| item.category() == category)
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No items found in category '{}'.",
            category
        )));
    }
    Ok(result.with_listed_items(listed))
}
