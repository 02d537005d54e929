//! Session Extractor
//!
//! Resolves the request's session cookie into a `SessionCtx` before the
//! handler body runs. Handlers read and mutate the session through the
//! context and build their response with `finish`, which attaches the
//! cookie whenever the session was minted by this request.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};

use crate::application::{SessionService, WatchlistConfig};
use crate::domain::entity::session::Session;
use crate::domain::repository::{MovieRepository, SessionRepository, UserRepository};
use crate::error::WatchlistError;
use crate::presentation::handlers::WatchlistAppState;

/// Request-scoped session context
pub struct SessionCtx {
    pub session: Session,
    /// Signed token backing the cookie
    pub token: String,
    /// True when the session was created for this request and the cookie
    /// has not reached the browser yet
    pub fresh: bool,
}

impl SessionCtx {
    /// Build the handler's response, setting the session cookie when new
    pub fn finish(&self, config: &WatchlistConfig, body: impl IntoResponse) -> Response {
        let mut response = body.into_response();

        if self.fresh {
            response.headers_mut().append(
                header::SET_COOKIE,
                platform::cookie::set_cookie_header(&config.session_cookie(), &self.token),
            );
        }

        response
    }
}

impl<R> FromRequestParts<WatchlistAppState<R>> for SessionCtx
where
    R: UserRepository + MovieRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    type Rejection = WatchlistError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &WatchlistAppState<R>,
    ) -> Result<Self, Self::Rejection> {
        let token =
            platform::cookie::extract_cookie(&parts.headers, &state.config.session_cookie_name);

        let service = SessionService::new(state.repo.clone(), state.config.clone());
        let (session, token, fresh) = service.load_or_new(token.as_deref()).await?;

        Ok(Self {
            session,
            token,
            fresh,
        })
    }
}
