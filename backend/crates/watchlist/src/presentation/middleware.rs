//! Watchlist Middleware
//!
//! Middleware for requiring a signed-in session on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{Redirect, Response};

use kernel::id::UserId;

use crate::domain::repository::{MovieRepository, SessionRepository, UserRepository};
use crate::domain::value_object::Email;
use crate::presentation::handlers::WatchlistAppState;
use crate::presentation::session_ctx::SessionCtx;

/// Identity of the signed-in user, stored in request extensions
#[derive(Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub email: Email,
}

/// Middleware that requires a signed-in session
///
/// Anonymous visitors are redirected to the login page; the wrapped
/// handler never runs for them.
pub async fn require_login<R>(
    State(state): State<WatchlistAppState<R>>,
    ctx: SessionCtx,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + MovieRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    match (&ctx.session.user_id, &ctx.session.email) {
        (Some(user_id), Some(email)) => {
            req.extensions_mut().insert(CurrentUser {
                user_id: user_id.clone(),
                email: email.clone(),
            });
            Ok(next.run(req).await)
        }
        _ => Err(ctx.finish(&state.config, Redirect::to("/login"))),
    }
}
