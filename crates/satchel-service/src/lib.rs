//! # Satchel Service
//!
//! Business logic for Satchel: the auth service, the item service with
//! its read-through cache, and the request/response DTOs.

pub mod auth_service;
pub mod cache;
pub mod dto;
pub mod item_service;

pub use auth_service::{AuthService, AuthServiceImpl};
pub use cache::{CacheExt, CacheInterface, RedisCacheService, DEFAULT_TTL};
pub use dto::*;
pub use item_service::{ItemService, ItemServiceImpl};
