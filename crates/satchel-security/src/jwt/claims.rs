//! JWT claims structure.

use chrono::{DateTime, Utc};
use satchel_core::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims carried by a bearer token.
///
/// Tokens are stateless: validity is signature plus expiry, nothing is
/// stored server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: String,

    /// Username.
    pub username: String,

    /// Issued at timestamp.
    pub iat: i64,

    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user, expiring at the given time.
    #[must_use]
    pub fn new(user_id: UserId, username: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: user_id.to_string(),
            username,
            iat: Utc::now().timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the user ID parsed from the subject.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        Uuid::parse_str(&self.sub).ok().map(UserId::from_uuid)
    }

    /// Checks if the token is expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Returns the expiration time.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}
