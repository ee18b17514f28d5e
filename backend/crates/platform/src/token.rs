//! Signed Session Tokens
//!
//! HS256 JSON Web Tokens carrying the authenticated user's id.
//! Tokens are stateless: nothing is persisted, validity is signature + expiry.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Token lifetime used by the API (24 hours)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 3600);

/// Token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Authenticated user id
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
}

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing failed
    #[error("Token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// Signature, structure or expiry check failed
    #[error("Token is invalid or expired")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

/// Issues and verifies tokens with a server-held secret
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenSigner {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `user_id`, valid for the configured TTL from now
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        let iat = Utc::now().timestamp();
        let claims = TokenClaims {
            user_id,
            iat,
            exp: iat + self.ttl.as_secs() as i64,
        };
        self.sign(&claims)
    }

    /// Sign arbitrary claims
    pub fn sign(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(TokenError::Signing)
    }

    /// Verify signature and expiry, returning the claims
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        jsonwebtoken::decode::<TokenClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(TokenError::Invalid)
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
