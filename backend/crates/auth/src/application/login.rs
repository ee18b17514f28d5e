//! Login Use Case
//!
//! Verifies credentials and issues a signed session token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::required;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{UserId, email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
#[derive(Debug, Default)]
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login output
pub struct LoginOutput {
    /// Signed session token (24h)
    pub token: String,
    pub user_id: UserId,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let email = required("email", input.email)?;
        let password = required("password", input.password)?;

        // an email that could never have been registered cannot match a row
        let email = Email::new(email).map_err(|_| AuthError::UserNotFound)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let raw_password = RawPassword::new(password).map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&raw_password) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .config
            .token_signer()
            .issue(user.user_id.into_uuid())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput {
            token,
            user_id: user.user_id,
        })
    }
}
