//! Add Movie Use Case
//!
//! Creates a movie and links it into the current user's watchlist.

use std::sync::Arc;

use kernel::id::{MovieId, UserId};

use crate::domain::entity::movie::Movie;
use crate::domain::repository::{MovieRepository, UserRepository};
use crate::error::WatchlistResult;

/// Add movie input
pub struct AddMovieInput {
    pub user_id: UserId,
    pub title: String,
    pub director: String,
    pub year: i32,
}

/// Add movie output
pub struct AddMovieOutput {
    pub movie_id: MovieId,
}

/// Add movie use case
pub struct AddMovieUseCase<U, M>
where
    U: UserRepository,
    M: MovieRepository,
{
    user_repo: Arc<U>,
    movie_repo: Arc<M>,
}

impl<U, M> AddMovieUseCase<U, M>
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

    pub async fn execute(&self, input: AddMovieInput) -> WatchlistResult<AddMovieOutput> {
        let movie = Movie::new(input.title, input.director, input.year);

        // Two writes, no transaction. Insert first so a failed push can
        // only orphan the movie, never leave a dangling reference.
        self.movie_repo.insert_movie(&movie).await?;
        self.user_repo
            .push_movie(&input.user_id, &movie.movie_id)
            .await?;

        tracing::info!(
            user_id = %input.user_id,
            movie_id = %movie.movie_id,
            "Movie added to watchlist"
        );

        Ok(AddMovieOutput {
            movie_id: movie.movie_id,
        })
    }
}
