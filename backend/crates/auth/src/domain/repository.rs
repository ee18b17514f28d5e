//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user
    ///
    /// Fails with `AuthError::EmailTaken` when the email is already stored.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by exact email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;
}
