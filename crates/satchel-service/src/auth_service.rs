//! Authentication service implementation.

use crate::dto::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use async_trait::async_trait;
use satchel_core::{SatchelError, SatchelResult};
use satchel_domain::User;
use satchel_repository::UserRepository;
use satchel_security::{PasswordHasher, TokenProvider};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Authentication service trait.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Registers a new user. No token is issued; registration is
    /// decoupled from login.
    async fn register(&self, request: RegisterRequest) -> SatchelResult<MessageResponse>;

    /// Logs in a user, returning a bearer token and the username.
    async fn login(&self, request: LoginRequest) -> SatchelResult<LoginResponse>;
}

/// Authentication service implementation.
pub struct AuthServiceImpl<R: UserRepository> {
    user_repository: Arc<R>,
    password_hasher: Arc<PasswordHasher>,
    token_provider: Arc<TokenProvider>,
}

impl<R: UserRepository> AuthServiceImpl<R> {
    /// Creates a new authentication service.
    pub fn new(
        user_repository: Arc<R>,
        password_hasher: Arc<PasswordHasher>,
        token_provider: Arc<TokenProvider>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> AuthService for AuthServiceImpl<R> {
    async fn register(&self, request: RegisterRequest) -> SatchelResult<MessageResponse> {
        debug!("Registering user: {}", request.username);

        // Format rules are enforced at the API boundary; uniqueness is
        // re-checked here regardless.
        if self
            .user_repository
            .exists_by_username(&request.username)
            .await?
        {
            return Err(SatchelError::duplicate_user(request.username));
        }

        let password_hash = self.password_hasher.hash(&request.password)?;

        let user = User::new(request.username, password_hash);
        let saved_user = self.user_repository.save(&user).await?;

        info!("User registered: {}", saved_user.id);
        Ok(MessageResponse::new("User created successfully"))
    }

    async fn login(&self, request: LoginRequest) -> SatchelResult<LoginResponse> {
        debug!("Login attempt for: {}", request.username);

        // Unknown user and wrong password collapse into the same error so
        // the response does not reveal which accounts exist.
        let user = self
            .user_repository
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found - {}", request.username);
                SatchelError::InvalidCredentials
            })?;

        if !self
            .password_hasher
            .verify(&request.password, &user.password_hash)?
        {
            warn!("Login failed: invalid password - {}", user.id);
            return Err(SatchelError::InvalidCredentials);
        }

        let token = self.token_provider.generate_token(user.id, &user.username)?;

        info!("User logged in: {}", user.id);
        Ok(LoginResponse {
            token,
            name: user.username,
        })
    }
}

impl<R: UserRepository> std::fmt::Debug for AuthServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthServiceImpl").finish_non_exhaustive()
    }
}
