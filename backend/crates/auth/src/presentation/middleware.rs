//! Auth Middleware
//!
//! Bearer-token gate for protected routes.

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::Request;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{AuthenticateUseCase, AuthenticatedUser};
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState {
    pub config: Arc<AuthConfig>,
}

impl AuthGateState {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }
}

/// Middleware that requires `Authorization: Bearer <token>`
///
/// On success the caller's [`AuthenticatedUser`] is stored in the request
/// extensions for handlers downstream.
pub async fn require_bearer_token(
    State(state): State<AuthGateState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer(req.headers())?;

    let user = AuthenticateUseCase::new(state.config.clone()).execute(token)?;

    tracing::debug!(user_id = %user.user_id, "Bearer token accepted");

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // only present behind `require_bearer_token`
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or(AuthError::TokenMissing)
    }
}
