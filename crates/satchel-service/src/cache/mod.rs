//! Caching infrastructure for the service layer.
//!
//! A small cache abstraction with a Redis implementation, used as a
//! read-through layer in front of the item repository. The cache is an
//! optimization: when it is disabled or unreachable, reads fall back to
//! the repository.

mod cache_interface;
pub mod cache_keys;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use redis_cache::{RedisCacheService, DEFAULT_TTL};
