//! # Satchel Config
//!
//! Layered configuration for Satchel: TOML files overridden by
//! `SATCHEL_`-prefixed environment variables.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
