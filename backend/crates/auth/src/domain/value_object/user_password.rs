//! User Password Value Object
//!
//! Domain value object for user passwords.
//! Delegates to `platform::password` for cryptographic operations.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//!
//! let raw = RawPassword::new("secret".to_string()).unwrap();
//! let hashed = UserPassword::from_raw(&raw).unwrap();
//! assert!(hashed.verify(&raw));
//! ```

use kernel::error::app_error::{AppError, AppResult, ResultExt};
use kernel::error::kind::ErrorKind;
use platform::password::{ClearTextPassword, HashedPassword, PasswordPolicyError};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::EmptyOrWhitespace => {
                AppError::bad_request("Password cannot be empty")
            }
        })?;

        Ok(Self(clear_text))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password in Argon2id PHC string format
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password with a fresh salt
    pub fn from_raw(raw: &RawPassword) -> AppResult<Self> {
        let hashed = raw
            .inner()
            .hash()
            .map_app_err(ErrorKind::InternalServerError, "Password hashing failed")?;

        Ok(Self(hashed))
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> AppResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string).map_app_err(
            ErrorKind::InternalServerError,
            "Invalid password hash in database",
        )?;

        Ok(Self(hashed))
    }

    /// Get PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash
    pub fn verify(&self, raw: &RawPassword) -> bool {
        self.0.verify(raw.inner())
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_password_validation() {
        assert!(RawPassword::new("secret".to_string()).is_ok());
        assert!(RawPassword::new("".to_string()).is_err());
        assert!(RawPassword::new("   ".to_string()).is_err());
    }

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("secret".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw).unwrap();
        assert!(hashed.verify(&raw));

        let wrong = RawPassword::new("wrong".to_string()).unwrap();
        assert!(!hashed.verify(&wrong));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let raw = RawPassword::new("secret".to_string()).unwrap();
        let phc = UserPassword::from_raw(&raw).unwrap().as_phc_string().to_string();
        let restored = UserPassword::from_phc_string(phc).unwrap();
        assert!(restored.verify(&raw));
    }

    #[test]
    fn test_corrupt_hash_is_internal() {
        let err = UserPassword::from_phc_string("plaintext").unwrap_err();
        assert!(err.is_server_error());
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("SecretPassword".to_string()).unwrap();
        let debug = format!("{:?}", raw);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Secret"));
    }
}
