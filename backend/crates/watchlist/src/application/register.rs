//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use kernel::id::UserId;
use platform::password::ClearTextPassword;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::Email;
use crate::error::{WatchlistError, WatchlistResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_id: UserId,
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

    pub async fn execute(&self, input: RegisterInput) -> WatchlistResult<RegisterOutput> {
        let email =
            Email::new(input.email).map_err(|e| WatchlistError::Validation(e.to_string()))?;

        // Email uniqueness is enforced only by this check; concurrent
        // registrations of the same email can race
        if self.user_repo.find_user_by_email(&email).await?.is_some() {
            return Err(WatchlistError::EmailTaken);
        }

        let password = ClearTextPassword::new(input.password)
            .map_err(|e| WatchlistError::Validation(e.to_string()))?;
        let password_hash = password
            .hash()
            .map_err(|e| WatchlistError::Internal(e.to_string()))?;

        let user = User::new(email, password_hash);
        self.user_repo.insert_user(&user).await?;

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(RegisterOutput {
            user_id: user.user_id,
        })
    }
}
