//! JWT claims extractor.

use crate::responses::AppError;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use satchel_core::SatchelError;
use satchel_security::Claims;

/// Extractor for the authenticated user's claims.
///
/// The access-control middleware validates the bearer token and inserts
/// the claims into the request extensions; this extractor reads them back
/// in handlers behind the gate.
pub struct CurrentUser(pub Claims);

impl std::ops::Deref for CurrentUser {
    type Target = Claims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<Claims>()
            .cloned()
            .ok_or_else(|| AppError(SatchelError::unauthorized("Missing or invalid token")))?;

        Ok(CurrentUser(claims))
    }
}
