//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
pub mod login;
pub mod register;

// Re-exports
pub use authenticate::{AuthenticateUseCase, AuthenticatedUser};
pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};

use crate::error::{AuthError, AuthResult};

/// Unwrap a required request field; absent and empty are both missing
pub(crate) fn required(field: &'static str, value: Option<String>) -> AuthResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AuthError::MissingField(field)),
    }
}
