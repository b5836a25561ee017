use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ItemStore;

/// Items whose quantity is at or below `threshold`, in storage order.
pub fn run<S: ItemStore>(store: &S, threshold: u32) -> Result<CmdResult> {
    let listed = store
        .items()
        .iter()
        .filter(|item| item.quantity() <= threshold)
        .cloned()
        .collect();
    Ok(CmdResult::default().with_listed_items(listed))
}
