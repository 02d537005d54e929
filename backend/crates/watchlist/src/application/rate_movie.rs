//! Rate Movie Use Case

use std::sync::Arc;

use kernel::id::MovieId;

use crate::domain::entity::movie::MoviePatch;
use crate::domain::repository::MovieRepository;
use crate::error::{WatchlistError, WatchlistResult};

/// Rate movie use case
pub struct RateMovieUseCase<M>
where
    M: MovieRepository,
{
    movie_repo: Arc<M>,
}

impl<M> RateMovieUseCase<M>
where
    M: MovieRepository,
{
    pub fn new(movie_repo: Arc<M>) -> Self {
        Self { movie_repo }
    }

    pub async fn execute(&self, movie_id: &MovieId, rating: i32) -> WatchlistResult<()> {
        let matched = self
            .movie_repo
            .update_movie(movie_id, &MoviePatch::rating(rating))
            .await?;

        if !matched {
            return Err(WatchlistError::MovieNotFound);
        }

        tracing::info!(movie_id = %movie_id, rating = rating, "Movie rated");

        Ok(())
    }
}
