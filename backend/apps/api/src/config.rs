//! Server Configuration
//!
//! Read once at startup from the process environment.

use std::env;

use anyhow::{Context, bail};
use auth::AuthConfig;
use axum::http::HeaderValue;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub port: u16,
    /// `None` allows any origin
    pub cors_origins: Option<Vec<HeaderValue>>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = parse_or("PORT", env::var("PORT").ok(), DEFAULT_PORT)?;
        let max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
            DEFAULT_MAX_CONNECTIONS,
        )?;

        let cors_origins = env::var("CORS_ORIGINS")
            .ok()
            .map(|v| parse_origins(&v))
            .transpose()?;

        let auth = auth_config(env::var("JWT_SECRET").ok(), cfg!(debug_assertions))?;

        Ok(Self {
            database_url,
            max_connections,
            port,
            cors_origins,
            auth,
        })
    }
}

fn parse_or<T>(name: &str, value: Option<String>, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} is not valid: {raw:?}")),
        None => Ok(default),
    }
}

/// Comma-separated origin list; a bad entry fails startup
fn parse_origins(raw: &str) -> anyhow::Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            if origin == "*" {
                bail!("CORS_ORIGINS must list origins; leave it unset to allow any");
            }
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("CORS_ORIGINS entry is not valid: {origin:?}"))
        })
        .collect()
}

fn auth_config(secret: Option<String>, development: bool) -> anyhow::Result<AuthConfig> {
    match secret.filter(|s| !s.is_empty()) {
        Some(secret) => Ok(AuthConfig::from_secret(secret)),
        None if development => {
            tracing::warn!("JWT_SECRET not set, using a random secret; tokens will not survive a restart");
            Ok(AuthConfig::with_random_secret())
        }
        None => bail!("JWT_SECRET must be set in production"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or() {
        assert_eq!(parse_or("PORT", None, 3000u16).unwrap(), 3000);
        assert_eq!(parse_or("PORT", Some("8080".into()), 3000u16).unwrap(), 8080);
        assert!(parse_or("PORT", Some("eighty".into()), 3000u16).is_err());
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("http://a.test, http://b.test,,").unwrap(),
            vec![
                HeaderValue::from_static("http://a.test"),
                HeaderValue::from_static("http://b.test"),
            ]
        );
    }

    #[test]
    fn test_bad_origin_fails() {
        assert!(parse_origins("http://a.test,http://b\u{7f}.test").is_err());
        assert!(parse_origins("*").is_err());
    }

    #[test]
    fn test_auth_config_secret_rules() {
        let config = auth_config(Some("s3cret".into()), false).unwrap();
        assert_eq!(config.jwt_secret, b"s3cret".to_vec());

        assert!(auth_config(None, false).is_err());
        assert!(auth_config(Some(String::new()), false).is_err());

        let random = auth_config(None, true).unwrap();
        assert_eq!(random.jwt_secret.len(), 32);
    }
}
