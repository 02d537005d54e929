//! Edit Movie Use Case
//!
//! Merges the extended optional fields into an existing movie. Required
//! fields (title, director, year) are untouchable here.

use std::sync::Arc;

use kernel::id::MovieId;

use crate::domain::entity::movie::MoviePatch;
use crate::domain::repository::MovieRepository;
use crate::error::{WatchlistError, WatchlistResult};

/// Edit movie input
pub struct EditMovieInput {
    pub movie_id: MovieId,
    pub patch: MoviePatch,
}

/// Edit movie use case
pub struct EditMovieUseCase<M>
where
    M: MovieRepository,
{
    movie_repo: Arc<M>,
}

impl<M> EditMovieUseCase<M>
where
    M: MovieRepository,
{
    pub fn new(movie_repo: Arc<M>) -> Self {
        Self { movie_repo }
    }

    pub async fn execute(&self, input: EditMovieInput) -> WatchlistResult<()> {
        // Load first: editing an absent movie is NotFound, not a silent
        // upsert
        if self
            .movie_repo
            .find_movie_by_id(&input.movie_id)
            .await?
            .is_none()
        {
            return Err(WatchlistError::MovieNotFound);
        }

        if input.patch.is_empty() {
            return Ok(());
        }

        self.movie_repo
            .update_movie(&input.movie_id, &input.patch)
            .await?;

        tracing::info!(movie_id = %input.movie_id, "Movie edited");

        Ok(())
    }
}
