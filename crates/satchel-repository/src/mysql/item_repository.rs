//! MySQL item repository implementation.

use crate::{pool::DatabasePool, traits::ItemRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use satchel_core::{ItemId, SatchelError, SatchelResult};
use satchel_domain::Item;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// MySQL item repository implementation.
#[derive(Clone)]
pub struct MySqlItemRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlItemRepository {
    /// Creates a new MySQL item repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of an item.
#[derive(Debug, FromRow)]
struct ItemRow {
    id: String,
    name: String,
    category: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ItemRow> for Item {
    type Error = SatchelError;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| SatchelError::Internal(format!("Invalid UUID in database: {}", e)))?;

        Ok(Item {
            id: ItemId::from_uuid(id),
            name: row.name,
            category: row.category,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ItemRepository for MySqlItemRepository {
    async fn find_by_id(&self, id: ItemId) -> SatchelResult<Option<Item>> {
        debug!("Finding item by id: {}", id);

        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, category, created_at
            FROM items
            WHERE id = ?
            "#,
        )
        .bind(id.into_inner().to_string())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Item::try_from).transpose()
    }

    async fn find_all(&self) -> SatchelResult<Vec<Item>> {
        debug!("Finding all items");

        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, category, created_at
            FROM items
            ORDER BY created_at
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(Item::try_from).collect()
    }

    async fn save(&self, item: &Item) -> SatchelResult<Item> {
        debug!("Saving item: {}", item.id);

        sqlx::query(
            r#"
            INSERT INTO items (id, name, category, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(item.id.into_inner().to_string())
        .bind(&item.name)
        .bind(&item.category)
        .bind(item.created_at)
        .execute(self.pool.inner())
        .await?;

        Ok(item.clone())
    }

    async fn update(&self, item: &Item) -> SatchelResult<bool> {
        debug!("Updating item: {}", item.id);

        let result = sqlx::query(
            r#"
            UPDATE items
            SET name = ?, category = ?
            WHERE id = ?
            "#,
        )
        .bind(&item.name)
        .bind(&item.category)
        .bind(item.id.into_inner().to_string())
        .execute(self.pool.inner())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: ItemId) -> SatchelResult<bool> {
        debug!("Deleting item: {}", id);

        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id.into_inner().to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
