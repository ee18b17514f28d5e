//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::extract::JsonBody;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// POST /auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> AuthResult<(StatusCode, Json<UserResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone());

    let output = use_case
        .execute(RegisterInput {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&output.user))))
}

/// POST /auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token: output.token,
    }))
}
