use crate::error::{Result, StockpileError};
use crate::store::ItemStore;

/// Storage index of the item with `id`, or `ItemNotFound`.
pub fn resolve_id<S: ItemStore>(store: &S, id: &str) -> Result<usize> {
    store
        .position(id)
        .ok_or_else(|| StockpileError::ItemNotFound(id.to_string()))
}

/// True when `id` belongs to some item other than the one at `except`.
pub fn id_taken<S: ItemStore>(store: &S, id: &str, except: Option<usize>) -> bool {
    match store.position(id) {
        Some(index) => Some(index) != except,
        None => false,
    }
}

pub fn valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}
