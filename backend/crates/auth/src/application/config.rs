//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::token::{DEFAULT_TOKEN_TTL, TokenSigner};

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret for signing session tokens
    pub jwt_secret: Vec<u8>,
    /// Session token lifetime (24 hours)
    pub token_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: Vec::new(),
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }
}

impl AuthConfig {
    /// Create config from a server-held secret
    pub fn from_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random secret (for development)
    ///
    /// Tokens do not survive a restart.
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self::from_secret(secret.to_vec())
    }

    /// Token signer bound to this configuration
    pub fn token_signer(&self) -> TokenSigner {
        TokenSigner::new(&self.jwt_secret, self.token_ttl)
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_24h() {
        let config = AuthConfig::from_secret("s");
        assert_eq!(config.token_ttl, Duration::from_secs(86_400));
        assert_eq!(config.token_signer().ttl(), config.token_ttl);
    }

    #[test]
    fn test_with_random_secret() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_eq!(a.jwt_secret.len(), 32);
        assert_ne!(a.jwt_secret, b.jwt_secret);
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = AuthConfig::from_secret("super-secret");
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
