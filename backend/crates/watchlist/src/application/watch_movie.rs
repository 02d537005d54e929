//! Watch Movie Use Case
//!
//! Stamps a movie as watched now.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::MovieId;

use crate::domain::entity::movie::MoviePatch;
use crate::domain::repository::MovieRepository;
use crate::error::{WatchlistError, WatchlistResult};

/// Watch movie use case
pub struct WatchMovieUseCase<M>
where
    M: MovieRepository,
{
    movie_repo: Arc<M>,
}

impl<M> WatchMovieUseCase<M>
where
    M: MovieRepository,
{
    pub fn new(movie_repo: Arc<M>) -> Self {
        Self { movie_repo }
    }

    pub async fn execute(&self, movie_id: &MovieId) -> WatchlistResult<()> {
        let matched = self
            .movie_repo
            .update_movie(movie_id, &MoviePatch::watched_at(Utc::now()))
            .await?;

        if !matched {
            return Err(WatchlistError::MovieNotFound);
        }

        tracing::info!(movie_id = %movie_id, "Movie marked watched");

        Ok(())
    }
}
