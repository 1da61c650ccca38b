//! # Satchel Repository
//!
//! Data access layer for Satchel: a bounded MySQL pool plus the
//! `UserRepository` and `ItemRepository` traits and their SQLx-backed
//! implementations. Services depend on the traits; the MySQL impls are
//! wired in at startup.

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;
