//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases (register, login, authenticate)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never returned to clients
//! - Stateless HS256 session tokens carrying the user id, 24h expiry
//! - Protected routes sit behind [`require_bearer_token`]

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::AuthenticatedUser;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{AuthGateState, require_bearer_token};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
