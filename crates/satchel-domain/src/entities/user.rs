//! User entity.

use chrono::{DateTime, Utc};
use satchel_core::UserId;
use serde::{Deserialize, Serialize};

/// User entity representing a registered account.
///
/// Users are created once at registration and are immutable afterwards;
/// there is no profile update or deletion surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: UserId,

    /// Unique username (3+ chars, alphanumerics and underscore).
    pub username: String,

    /// Hashed password (never exposed via API).
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user from a username and an already-hashed password.
    ///
    /// The plaintext password must never reach this constructor; hashing
    /// happens in the auth service before the entity exists.
    #[must_use]
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            id: UserId::new(),
            username,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
