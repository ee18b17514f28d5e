//! Bearer Token Extraction
//!
//! Parses `Authorization: Bearer <token>` request headers.

use axum::http::{HeaderMap, header};
use thiserror::Error;

/// Authorization header problems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BearerError {
    /// No `Authorization` header
    #[error("Authorization header missing")]
    Missing,

    /// Header is not `<scheme> <token>` with scheme `Bearer`
    #[error("Authorization header malformed")]
    Malformed,
}

/// Extract the bearer token from the `Authorization` header
///
/// The value must be exactly two space-separated parts, and the first
/// must equal `Bearer` ignoring ASCII case.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::Missing)?
        .to_str()
        .map_err(|_| BearerError::Malformed)?;

    parse_bearer(value)
}

/// Parse an `Authorization` header value
pub fn parse_bearer(value: &str) -> Result<&str, BearerError> {
    let mut parts = value.split(' ');
    let (Some(scheme), Some(token), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(BearerError::Malformed);
    };

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(BearerError::Malformed);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_bearer("Bearer abc.def.ghi"), Ok("abc.def.ghi"));
        assert_eq!(parse_bearer("bearer abc"), Ok("abc"));
        assert_eq!(parse_bearer("BEARER abc"), Ok("abc"));
    }

    #[test]
    fn test_parse_wrong_part_count() {
        assert_eq!(parse_bearer("Bearer"), Err(BearerError::Malformed));
        assert_eq!(parse_bearer("abc"), Err(BearerError::Malformed));
        assert_eq!(parse_bearer("Bearer a b"), Err(BearerError::Malformed));
        // a double space yields three parts
        assert_eq!(parse_bearer("Bearer  abc"), Err(BearerError::Malformed));
    }

    #[test]
    fn test_parse_wrong_scheme() {
        assert_eq!(parse_bearer("Basic abc"), Err(BearerError::Malformed));
        assert_eq!(parse_bearer("Bearerx abc"), Err(BearerError::Malformed));
    }

    #[test]
    fn test_extract_missing() {
        let headers = HeaderMap::new();
        assert_eq!(extract_bearer(&headers), Err(BearerError::Missing));
    }

    #[test]
    fn test_extract_present() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer tok"));
        assert_eq!(extract_bearer(&headers), Ok("tok"));
    }
}
