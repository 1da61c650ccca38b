//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use satchel_core::SatchelResult;
use std::time::Duration;
use tracing::warn;

/// Cache interface for storing and retrieving cached data.
///
/// This trait provides an abstraction over caching implementations,
/// allowing for easy swapping between Redis, in-memory, or other cache
/// backends. Uses JSON strings for type-erased storage to maintain
/// dyn-compatibility.
#[async_trait]
pub trait CacheInterface: Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> SatchelResult<Option<String>>;

    /// Set a raw JSON value in the cache with a TTL.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> SatchelResult<()>;

    /// Delete a value from the cache. Deleting an absent key is not an
    /// error.
    ///
    /// Returns `true` if the key existed and was deleted.
    async fn delete(&self, key: &str) -> SatchelResult<bool>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Extension trait with typed methods for convenience.
///
/// This trait provides generic get/set methods that work with any
/// serializable type, plus the read-through helper used by the item
/// service.
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    async fn get<T: serde::de::DeserializeOwned + Send>(&self, key: &str) -> SatchelResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> SatchelResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl).await
    }

    /// Read-through: get a value, or fetch it from the authoritative
    /// store and cache it on a miss.
    ///
    /// Cache read and populate failures are logged and treated as a miss:
    /// an unreachable cache must degrade the request, not fail it. An
    /// error from `fetch` (including a not-found) propagates and nothing
    /// is cached.
    async fn get_or_fetch<T, F, Fut>(&self, key: &str, ttl: Duration, fetch: F) -> SatchelResult<T>
    where
        T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: std::future::Future<Output = SatchelResult<T>> + Send,
    {
        match self.get::<T>(key).await {
            Ok(Some(cached)) => return Ok(cached),
            Ok(None) => {}
            Err(e) => warn!("Cache read failed for key '{}': {}", key, e),
        }

        let value = fetch().await?;

        if let Err(e) = self.set(key, &value, ttl).await {
            warn!("Cache populate failed for key '{}': {}", key, e);
        }

        Ok(value)
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}
