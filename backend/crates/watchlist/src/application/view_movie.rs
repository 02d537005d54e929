//! View Movie Use Case
//!
//! Loads one movie for the detail and edit pages.

use std::sync::Arc;

use kernel::id::MovieId;

use crate::domain::entity::movie::Movie;
use crate::domain::repository::MovieRepository;
use crate::error::{WatchlistError, WatchlistResult};

/// View movie use case
pub struct ViewMovieUseCase<M>
where
    M: MovieRepository,
{
    movie_repo: Arc<M>,
}

impl<M> ViewMovieUseCase<M>
where
    M: MovieRepository,
{
    pub fn new(movie_repo: Arc<M>) -> Self {
        Self { movie_repo }
    }

    pub async fn execute(&self, movie_id: &MovieId) -> WatchlistResult<Movie> {
        self.movie_repo
            .find_movie_by_id(movie_id)
            .await?
            .ok_or(WatchlistError::MovieNotFound)
    }
}
