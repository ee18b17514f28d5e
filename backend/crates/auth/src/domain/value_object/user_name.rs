//! User Name Value Object
//!
//! Display name given at registration. Free text, stored as submitted.

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

/// Maximum length for a user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(AppError::bad_request("Name cannot be empty"));
        }

        if name.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Name must be at most {} characters",
                USER_NAME_MAX_LENGTH
            )));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name() {
        assert_eq!(UserName::new("Ana").unwrap().as_str(), "Ana");
        assert_eq!(UserName::new("José da Silva").unwrap().as_str(), "José da Silva");
        assert!(UserName::new("").is_err());
        assert!(UserName::new(" ").is_err());
        assert!(UserName::new("n".repeat(USER_NAME_MAX_LENGTH + 1)).is_err());
        assert!(UserName::new("n".repeat(USER_NAME_MAX_LENGTH)).is_ok());
    }
}
