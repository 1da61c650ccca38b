//! # Satchel REST
//!
//! REST API layer using Axum for Satchel.
//! Provides the auth and item endpoints plus health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
