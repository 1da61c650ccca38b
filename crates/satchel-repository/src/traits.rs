//! Repository trait definitions.

use async_trait::async_trait;
use satchel_core::{ItemId, SatchelResult, UserId};
use satchel_domain::{Item, User};

/// User repository trait.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> SatchelResult<Option<User>>;

    /// Finds a user by username.
    async fn find_by_username(&self, username: &str) -> SatchelResult<Option<User>>;

    /// Checks if a username exists.
    async fn exists_by_username(&self, username: &str) -> SatchelResult<bool>;

    /// Saves a new user.
    async fn save(&self, user: &User) -> SatchelResult<User>;
}

/// Item repository trait.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Finds an item by ID.
    async fn find_by_id(&self, id: ItemId) -> SatchelResult<Option<Item>>;

    /// Finds all items in insertion order.
    async fn find_all(&self) -> SatchelResult<Vec<Item>>;

    /// Saves a new item.
    async fn save(&self, item: &Item) -> SatchelResult<Item>;

    /// Updates an existing item. Returns `false` if no row matched.
    async fn update(&self, item: &Item) -> SatchelResult<bool>;

    /// Deletes an item by ID. Returns `false` if no row matched.
    async fn delete(&self, id: ItemId) -> SatchelResult<bool>;
}
