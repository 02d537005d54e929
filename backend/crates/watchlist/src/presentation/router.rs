//! Watchlist Router

use axum::{Router, middleware, routing::get};
use std::sync::Arc;

use crate::application::config::WatchlistConfig;
use crate::domain::repository::{MovieRepository, SessionRepository, UserRepository};
use crate::infra::mongo::MongoWatchlistRepository;
use crate::presentation::handlers::{self, WatchlistAppState};
use crate::presentation::middleware::require_login;

/// Create the watchlist router with the MongoDB repository
pub fn watchlist_router(repo: MongoWatchlistRepository, config: WatchlistConfig) -> Router {
    watchlist_router_generic(repo, config)
}

/// Create a generic watchlist router for any repository implementation
pub fn watchlist_router_generic<R>(repo: R, config: WatchlistConfig) -> Router
where
    R: UserRepository + MovieRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let state = WatchlistAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let protected = Router::new()
        .route("/", get(handlers::home::<R>))
        .route(
            "/add",
            get(handlers::add_movie_page::<R>).post(handlers::add_movie_submit::<R>),
        )
        .route(
            "/edit/{id}",
            get(handlers::edit_movie_page::<R>).post(handlers::edit_movie_submit::<R>),
        )
        .route("/movie/{id}/rate", get(handlers::rate_movie::<R>))
        .route("/movie/{id}/watch", get(handlers::watch_movie::<R>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_login::<R>,
        ));

    let public = Router::new()
        .route(
            "/register",
            get(handlers::register_page::<R>).post(handlers::register_submit::<R>),
        )
        .route(
            "/login",
            get(handlers::login_page::<R>).post(handlers::login_submit::<R>),
        )
        .route("/logout", get(handlers::logout::<R>))
        .route("/movie/{id}", get(handlers::movie_detail::<R>))
        .route("/toggle-theme", get(handlers::toggle_theme::<R>));

    protected.merge(public).with_state(state)
}
