//! Item-related DTOs.

use chrono::{DateTime, Utc};
use satchel_core::ItemId;
use satchel_domain::Item;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Item creation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateItemRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "Category is required"))]
    pub category: String,
}

/// Partial item update request: absent fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateItemRequest {
    #[validate(length(min = 1, max = 255, message = "Name must not be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Category must not be empty"))]
    pub category: Option<String>,
}

/// Item as returned over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            category: item.category,
            created_at: item.created_at,
        }
    }
}
