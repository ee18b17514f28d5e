//! Authenticate Use Case
//!
//! Turns a bearer token into the caller's identity. Stateless: no store access.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

/// Identity of the caller, attached to authenticated requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Authenticate use case
pub struct AuthenticateUseCase {
    config: Arc<AuthConfig>,
}

impl AuthenticateUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Verify signature and expiry of `token`
    pub fn execute(&self, token: &str) -> AuthResult<AuthenticatedUser> {
        let claims = self
            .config
            .token_signer()
            .verify(token)
            .map_err(|_| AuthError::TokenInvalid)?;

        Ok(AuthenticatedUser {
            user_id: UserId::from_uuid(claims.user_id),
        })
    }
}
