//! JWT token provider for creating and validating tokens.

use super::Claims;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use satchel_config::SecurityConfig;
use satchel_core::{SatchelError, SatchelResult, UserId};
use std::sync::Arc;
use tracing::{debug, warn};

/// JWT token provider service.
#[derive(Clone)]
pub struct TokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: Arc<SecurityConfig>,
    validation: Validation,
}

impl TokenProvider {
    /// Creates a new token provider.
    #[must_use]
    pub fn new(config: Arc<SecurityConfig>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Self {
            encoding_key,
            decoding_key,
            config,
            validation,
        }
    }

    /// Generates a signed token for a user.
    pub fn generate_token(&self, user_id: UserId, username: &str) -> SatchelResult<String> {
        let expires_at =
            Utc::now() + Duration::seconds(self.config.jwt_expiration_secs as i64);

        let claims = Claims::new(user_id, username.to_string(), expires_at);

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| SatchelError::Internal(format!("Failed to generate token: {}", e)))?;

        debug!("Generated token for user {}", user_id);
        Ok(token)
    }

    /// Validates a token's signature and expiry and returns the claims.
    pub fn validate_token(&self, token: &str) -> SatchelResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                warn!("Token validation failed: {}", e);
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => SatchelError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidToken
                    | jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        SatchelError::InvalidToken("Invalid token signature".to_string())
                    }
                    _ => SatchelError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("expiration_secs", &self.config.jwt_expiration_secs)
            .finish_non_exhaustive()
    }
}
