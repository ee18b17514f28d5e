//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::required;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::AuthResult;

/// Register input; every field is required
#[derive(Debug, Default)]
pub struct RegisterInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Register output
pub struct RegisterOutput {
    pub user: User,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let name = required("name", input.name)?;
        let email = required("email", input.email)?;
        let password = required("password", input.password)?;

        let name = UserName::new(name)?;
        let email = Email::new(email)?;

        let raw_password = RawPassword::new(password)?;
        let password_hash = UserPassword::from_raw(&raw_password)?;

        let user = User::new(name, email, password_hash);

        // email uniqueness is enforced by the store
        self.user_repo.create(&user).await?;

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(RegisterOutput { user })
    }
}
