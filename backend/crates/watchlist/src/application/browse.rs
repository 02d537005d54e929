//! Browse Watchlist Use Case
//!
//! Loads the current user's watchlist for the home page.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::movie::Movie;
use crate::domain::repository::{MovieRepository, UserRepository};
use crate::error::{WatchlistError, WatchlistResult};

/// Browse output
#[derive(Debug)]
pub struct BrowseOutput {
    pub movies: Vec<Movie>,
}

/// Browse watchlist use case
pub struct BrowseWatchlistUseCase<U, M>
where
    U: UserRepository,
    M: MovieRepository,
{
    user_repo: Arc<U>,
    movie_repo: Arc<M>,
}

impl<U, M> BrowseWatchlistUseCase<U, M>
where
    U: UserRepository,
    M: MovieRepository,
{
    pub fn new(user_repo: Arc<U>, movie_repo: Arc<M>) -> Self {
        Self {
            user_repo,
            movie_repo,
        }
    }

    pub async fn execute(&self, user_id: &UserId) -> WatchlistResult<BrowseOutput> {
        // The session can outlive the user record it points at
        let user = self
            .user_repo
            .find_user_by_id(user_id)
            .await?
            .ok_or(WatchlistError::Unauthenticated)?;

        let movies = self.movie_repo.find_movies_by_ids(&user.movies).await?;

        Ok(BrowseOutput { movies })
    }
}
