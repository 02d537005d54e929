//! In-Memory Repository for Tests and Local Development

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use kernel::id::{MovieId, SessionId, UserId};

use crate::domain::entity::movie::{Movie, MoviePatch};
use crate::domain::entity::session::Session;
use crate::domain::entity::user::User;
use crate::domain::repository::{MovieRepository, SessionRepository, UserRepository};
use crate::domain::value_object::Email;
use crate::error::{WatchlistError, WatchlistResult};

#[derive(Default)]
struct Inner {
    users: HashMap<String, User>,
    movies: HashMap<String, Movie>,
    sessions: HashMap<String, Session>,
}

/// Process-local watchlist repository
///
/// Backs the router in tests without a running database. State is shared
/// across clones.
#[derive(Clone, Default)]
pub struct InMemoryWatchlistRepository {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryWatchlistRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.inner.lock().map(|inner| inner.users.len()).unwrap_or(0)
    }

    fn locked(&self) -> WatchlistResult<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| WatchlistError::Internal("store mutex poisoned".into()))
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for InMemoryWatchlistRepository {
    async fn insert_user(&self, user: &User) -> WatchlistResult<()> {
        let mut inner = self.locked()?;
        inner
            .users
            .insert(user.user_id.as_str().to_string(), user.clone());
        Ok(())
    }

    async fn find_user_by_email(&self, email: &Email) -> WatchlistResult<Option<User>> {
        let inner = self.locked()?;
        Ok(inner
            .users
            .values()
            .find(|user| user.email == *email)
            .cloned())
    }

    async fn find_user_by_id(&self, user_id: &UserId) -> WatchlistResult<Option<User>> {
        let inner = self.locked()?;
        Ok(inner.users.get(user_id.as_str()).cloned())
    }

    async fn push_movie(&self, user_id: &UserId, movie_id: &MovieId) -> WatchlistResult<()> {
        let mut inner = self.locked()?;
        if let Some(user) = inner.users.get_mut(user_id.as_str()) {
            user.movies.push(movie_id.clone());
        }
        Ok(())
    }
}

// ============================================================================
// Movie Repository Implementation
// ============================================================================

impl MovieRepository for InMemoryWatchlistRepository {
    async fn insert_movie(&self, movie: &Movie) -> WatchlistResult<()> {
        let mut inner = self.locked()?;
        inner
            .movies
            .insert(movie.movie_id.as_str().to_string(), movie.clone());
        Ok(())
    }

    async fn find_movie_by_id(&self, movie_id: &MovieId) -> WatchlistResult<Option<Movie>> {
        let inner = self.locked()?;
        Ok(inner.movies.get(movie_id.as_str()).cloned())
    }

    async fn find_movies_by_ids(&self, movie_ids: &[MovieId]) -> WatchlistResult<Vec<Movie>> {
        let inner = self.locked()?;
        Ok(movie_ids
            .iter()
            .filter_map(|id| inner.movies.get(id.as_str()).cloned())
            .collect())
    }

    async fn update_movie(&self, movie_id: &MovieId, patch: &MoviePatch) -> WatchlistResult<bool> {
        let mut inner = self.locked()?;
        match inner.movies.get_mut(movie_id.as_str()) {
            Some(movie) => {
                patch.apply(movie);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for InMemoryWatchlistRepository {
    async fn find_session(&self, session_id: &SessionId) -> WatchlistResult<Option<Session>> {
        let inner = self.locked()?;
        Ok(inner.sessions.get(session_id.as_str()).cloned())
    }

    async fn save_session(&self, session: &Session) -> WatchlistResult<()> {
        let mut inner = self.locked()?;
        inner
            .sessions
            .insert(session.session_id.as_str().to_string(), session.clone());
        Ok(())
    }

    async fn purge_stale_sessions(&self, cutoff: DateTime<Utc>) -> WatchlistResult<u64> {
        let mut inner = self.locked()?;
        let before = inner.sessions.len();
        inner.sessions.retain(|_, session| session.last_seen_at >= cutoff);
        Ok((before - inner.sessions.len()) as u64)
    }
}
