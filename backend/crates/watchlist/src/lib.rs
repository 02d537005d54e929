//! Watchlist Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - User registration/login with email + password
//! - Per-user movie watchlist (add, edit, rate, mark watched)
//! - Server-side sessions with signed cookie tokens
//! - One-shot flash messages and a persisted dark/light theme
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (OWASP-recommended parameters)
//! - Session cookies carry an HMAC-SHA256 signed session id
//! - Login failures never reveal which credential was wrong
//! - Protected routes redirect anonymous visitors to the login page

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::WatchlistConfig;
pub use error::{WatchlistError, WatchlistResult};
pub use infra::mongo::MongoWatchlistRepository;
pub use presentation::router::watchlist_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::memory::InMemoryWatchlistRepository;
    pub use crate::infra::mongo::MongoWatchlistRepository as WatchlistStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
