//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, middleware, and the session extractor.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod session_ctx;

pub use handlers::WatchlistAppState;
pub use middleware::{CurrentUser, require_login};
pub use router::{watchlist_router, watchlist_router_generic};
pub use session_ctx::SessionCtx;
