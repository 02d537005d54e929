//! Repository Traits
//!
//! Data access contracts, split by aggregate. All operations are direct
//! pass-throughs to the document store with no caching, retries, or
//! transactions. `trait_variant` generates the `Send` variants
//! (`UserRepository` etc.) that the async handlers require.

use chrono::{DateTime, Utc};
use kernel::id::{MovieId, SessionId, UserId};

use crate::domain::entity::movie::{Movie, MoviePatch};
use crate::domain::entity::session::Session;
use crate::domain::entity::user::User;
use crate::domain::value_object::Email;
use crate::error::WatchlistResult;

/// User collection operations
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user. Not idempotent; callers guard uniqueness by
    /// checking the email first.
    async fn insert_user(&self, user: &User) -> WatchlistResult<()>;

    /// Find a user by login email
    async fn find_user_by_email(&self, email: &Email) -> WatchlistResult<Option<User>>;

    /// Find a user by id
    async fn find_user_by_id(&self, user_id: &UserId) -> WatchlistResult<Option<User>>;

    /// Atomically append a movie id to the user's watchlist
    async fn push_movie(&self, user_id: &UserId, movie_id: &MovieId) -> WatchlistResult<()>;
}

/// Movie collection operations
#[trait_variant::make(MovieRepository: Send)]
pub trait LocalMovieRepository {
    /// Insert a new movie. Not idempotent.
    async fn insert_movie(&self, movie: &Movie) -> WatchlistResult<()>;

    /// Find a movie by id
    async fn find_movie_by_id(&self, movie_id: &MovieId) -> WatchlistResult<Option<Movie>>;

    /// Find all movies whose id is in the given set (store order)
    async fn find_movies_by_ids(&self, movie_ids: &[MovieId]) -> WatchlistResult<Vec<Movie>>;

    /// Merge the patch's present fields into the stored movie
    ///
    /// Returns whether a movie with that id exists.
    async fn update_movie(&self, movie_id: &MovieId, patch: &MoviePatch) -> WatchlistResult<bool>;
}

/// Session collection operations
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Find a session record by id
    async fn find_session(&self, session_id: &SessionId) -> WatchlistResult<Option<Session>>;

    /// Upsert a session record under its id
    async fn save_session(&self, session: &Session) -> WatchlistResult<()>;

    /// Delete sessions not seen since the cutoff, returning how many
    async fn purge_stale_sessions(&self, cutoff: DateTime<Utc>) -> WatchlistResult<u64>;
}
