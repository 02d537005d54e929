//! User Entity
//!
//! An account identified by its email, owning an ordered watchlist of
//! movie ids. The password is only ever held in hashed form.

use kernel::id::{MovieId, UserId};
use platform::password::HashedPassword;

use crate::domain::value_object::Email;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal identifier (random hex, generated at registration)
    pub user_id: UserId,
    /// Login identifier, unique across all users
    pub email: Email,
    /// Argon2id hash in PHC format
    pub password: HashedPassword,
    /// Ids of movies this user added, in insertion order
    pub movies: Vec<MovieId>,
}

impl User {
    /// Create a new user with an empty watchlist
    pub fn new(email: Email, password: HashedPassword) -> Self {
        Self {
            user_id: UserId::new(),
            email,
            password,
            movies: Vec::new(),
        }
    }

    /// Whether this user's watchlist references the given movie
    pub fn owns_movie(&self, movie_id: &MovieId) -> bool {
        self.movies.contains(movie_id)
    }
}
