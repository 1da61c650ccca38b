//! Item entity.

use chrono::{DateTime, Utc};
use satchel_core::ItemId;
use serde::{Deserialize, Serialize};

/// Catalog item: a name plus a category, stamped at creation.
///
/// Items carry no owner; any authenticated user may act on any item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for the item.
    pub id: ItemId,

    /// Item name.
    pub name: String,

    /// Item category.
    pub category: String,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Creates a new item with a fresh ID and creation timestamp.
    #[must_use]
    pub fn new(name: String, category: String) -> Self {
        Self {
            id: ItemId::new(),
            name,
            category,
            created_at: Utc::now(),
        }
    }

    /// Applies a partial update: fields left as `None` keep their value.
    pub fn apply_update(&mut self, name: Option<String>, category: Option<String>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(category) = category {
            self.category = category;
        }
    }
}
