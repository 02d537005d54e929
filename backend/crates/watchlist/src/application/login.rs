//! Login Use Case
//!
//! Verifies credentials and returns the matched user. Populating the
//! session is the caller's job so the session write stays explicit.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::Email;
use crate::error::{WatchlistError, WatchlistResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub user: User,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: LoginInput) -> WatchlistResult<LoginOutput> {
        // Unknown email, malformed email, and wrong password all collapse
        // into the same error; no hint about which field was wrong
        let email =
            Email::new(input.email).map_err(|_| WatchlistError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_user_by_email(&email)
            .await?
            .ok_or(WatchlistError::InvalidCredentials)?;

        let password = ClearTextPassword::new(input.password)
            .map_err(|_| WatchlistError::InvalidCredentials)?;

        if !user.password.verify(&password) {
            return Err(WatchlistError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput { user })
    }
}
