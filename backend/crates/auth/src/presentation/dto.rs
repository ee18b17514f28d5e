//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::user::User;

// ============================================================================
// Register
// ============================================================================

/// Register request
///
/// Fields are optional at the wire level so that a missing field yields
/// a 400 with a field name instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Registered user (password hash omitted)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id.into_uuid(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_missing_fields() {
        let req: RegisterRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert!(req.name.is_none());
        assert_eq!(req.email.as_deref(), Some("a@x.com"));
        assert!(req.password.is_none());
    }

    #[test]
    fn test_user_response_has_no_password() {
        let response = UserResponse {
            id: Uuid::nil(),
            name: "Ana".into(),
            email: "a@x.com".into(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("createdAt").is_some());
    }
}
