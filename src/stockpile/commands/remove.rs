use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockpileError};
use crate::store::ItemStore;
use tracing::info;

use super::helpers::resolve_id;

/// Removes the item with `id`. The last item takes over the freed slot, so the
/// order of the remaining items is not preserved.
pub fn run<S: ItemStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let index = resolve_id(store, id)?;
    let removed = store
        .swap_remove(index)
        .ok_or_else(|| StockpileError::ItemNotFound(id.to_string()))?;

    info!(id, remaining = store.len(), "item removed");
    let message = format!(
        "Item '{}' has been removed from the inventory.",
        removed.name()
    );

    Ok(CmdResult::default()
        .with_affected_items(vec![removed])
        .with_message(CmdMessage::success(message)))
}
