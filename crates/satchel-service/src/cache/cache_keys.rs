//! Cache key generators for consistent key naming.

use satchel_core::ItemId;

/// Prefix for all cache keys to namespace them.
const CACHE_PREFIX: &str = "satchel:cache";

/// Cache key for the full item list.
#[must_use]
pub fn items_all() -> String {
    format!("{}:items:all", CACHE_PREFIX)
}

/// Cache key for a single item by ID.
#[must_use]
pub fn item_by_id(id: ItemId) -> String {
    format!("{}:items:id:{}", CACHE_PREFIX, id)
}
