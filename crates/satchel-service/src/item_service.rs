//! Item service: CRUD orchestration over the item repository with a
//! read-through cache in front of the list/detail queries.

use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::dto::{CreateItemRequest, ItemResponse, MessageResponse, UpdateItemRequest};
use async_trait::async_trait;
use satchel_core::{ItemId, SatchelError, SatchelResult};
use satchel_domain::Item;
use satchel_repository::ItemRepository;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Item service trait.
#[async_trait]
pub trait ItemService: Send + Sync {
    /// Creates a new item.
    async fn create_item(&self, request: CreateItemRequest) -> SatchelResult<ItemResponse>;

    /// Lists all items in insertion order.
    async fn list_items(&self) -> SatchelResult<Vec<ItemResponse>>;

    /// Gets a single item by ID.
    async fn get_item(&self, id: ItemId) -> SatchelResult<ItemResponse>;

    /// Applies a partial update to an item.
    async fn update_item(&self, id: ItemId, request: UpdateItemRequest)
        -> SatchelResult<ItemResponse>;

    /// Deletes an item.
    async fn delete_item(&self, id: ItemId) -> SatchelResult<MessageResponse>;
}

/// Item service implementation.
///
/// Coherence contract: a cache entry must never be readable after a write
/// touches the data it represents. Every write path deletes the list key
/// (the list aggregates all items), and update/delete also drop the
/// per-id key. Invalidation runs after the store write commits; a failed
/// invalidation surfaces as an error rather than being masked.
pub struct ItemServiceImpl<R: ItemRepository> {
    item_repository: Arc<R>,
    cache: Arc<dyn CacheInterface>,
    cache_ttl: Duration,
}

impl<R: ItemRepository> ItemServiceImpl<R> {
    /// Creates a new item service.
    pub fn new(item_repository: Arc<R>, cache: Arc<dyn CacheInterface>, cache_ttl: Duration) -> Self {
        Self {
            item_repository,
            cache,
            cache_ttl,
        }
    }

    /// Invalidate-on-write: drop the list key, and the per-id key when a
    /// specific item was touched.
    async fn invalidate(&self, id: Option<ItemId>) -> SatchelResult<()> {
        self.cache.delete(&cache_keys::items_all()).await?;
        if let Some(id) = id {
            self.cache.delete(&cache_keys::item_by_id(id)).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl<R: ItemRepository + 'static> ItemService for ItemServiceImpl<R> {
    async fn create_item(&self, request: CreateItemRequest) -> SatchelResult<ItemResponse> {
        debug!("Creating item: {}", request.name);

        let item = Item::new(request.name, request.category);
        let saved_item = self.item_repository.save(&item).await?;

        // Only the aggregate is stale; the new item has no per-id entry yet.
        self.invalidate(None).await?;

        info!("Item created: {}", saved_item.id);
        Ok(ItemResponse::from(saved_item))
    }

    async fn list_items(&self) -> SatchelResult<Vec<ItemResponse>> {
        debug!("Listing items");

        let repository = Arc::clone(&self.item_repository);
        self.cache
            .get_or_fetch(&cache_keys::items_all(), self.cache_ttl, move || async move {
                let items = repository.find_all().await?;
                Ok(items.into_iter().map(ItemResponse::from).collect::<Vec<_>>())
            })
            .await
    }

    async fn get_item(&self, id: ItemId) -> SatchelResult<ItemResponse> {
        debug!("Getting item: {}", id);

        let repository = Arc::clone(&self.item_repository);
        self.cache
            .get_or_fetch(&cache_keys::item_by_id(id), self.cache_ttl, move || async move {
                let item = repository
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| SatchelError::not_found("Item", id))?;
                Ok(ItemResponse::from(item))
            })
            .await
    }

    async fn update_item(
        &self,
        id: ItemId,
        request: UpdateItemRequest,
    ) -> SatchelResult<ItemResponse> {
        debug!("Updating item: {}", id);

        let mut item = self
            .item_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| SatchelError::not_found("Item", id))?;

        item.apply_update(request.name, request.category);

        if !self.item_repository.update(&item).await? {
            return Err(SatchelError::not_found("Item", id));
        }

        // The stale list and the stale single-item entry must not survive
        // the write.
        self.invalidate(Some(id)).await?;

        info!("Item updated: {}", id);
        Ok(ItemResponse::from(item))
    }

    async fn delete_item(&self, id: ItemId) -> SatchelResult<MessageResponse> {
        debug!("Deleting item: {}", id);

        if !self.item_repository.delete(id).await? {
            return Err(SatchelError::not_found("Item", id));
        }

        self.invalidate(Some(id)).await?;

        info!("Item deleted: {}", id);
        Ok(MessageResponse::new("Item deleted successfully"))
    }
}

impl<R: ItemRepository> std::fmt::Debug for ItemServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemServiceImpl")
            .field("cache_ttl", &self.cache_ttl)
            .finish_non_exhaustive()
    }
}
