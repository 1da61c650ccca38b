//! # Satchel Core
//!
//! Core types, typed IDs, and error definitions for Satchel.
//! This crate provides the foundational abstractions used across all layers.

pub mod error;
pub mod id;
pub mod result;

pub use error::*;
pub use id::*;
pub use result::*;
