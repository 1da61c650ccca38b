//! Application state for Axum handlers.

use satchel_service::{AuthService, ItemService};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub item_service: Arc<dyn ItemService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(auth_service: Arc<dyn AuthService>, item_service: Arc<dyn ItemService>) -> Self {
        Self {
            auth_service,
            item_service,
        }
    }
}
