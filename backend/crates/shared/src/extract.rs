//! Request Extractors
//!
//! [`JsonBody`] reads a request body as JSON and rejects with an
//! [`AppError`], so malformed input gets the same `{"error": ...}` body
//! as every other failure.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::app_error::AppError;

/// JSON request body
///
/// The `Content-Type` header is not inspected. An empty or
/// whitespace-only body reads as `{}`, so required fields surface as
/// missing rather than as a parse failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request("invalid request body").with_source(e))?;

        Ok(Self(parse_body(&bytes)?))
    }
}

fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice(b"{}")
    } else {
        serde_json::from_slice(bytes)
    }
}
