//! User Entity
//!
//! A registered account. Immutable after registration.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    UserId, email::Email, user_name::UserName, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name
    pub name: UserName,
    /// Login identifier (unique)
    pub email: Email,
    /// Argon2id hash, never serialized to clients
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(name: UserName, email: Email, password_hash: UserPassword) -> Self {
        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
