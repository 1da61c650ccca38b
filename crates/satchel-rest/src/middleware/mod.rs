//! Middleware stack.

mod auth;
mod logging;

pub use auth::{require_auth, AuthGateState};
pub use logging::request_logger;
