//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use axum::Router;
use mongodb::Client;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use watchlist::application::SessionService;
use watchlist::{MongoWatchlistRepository, WatchlistConfig, watchlist_router};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                //.unwrap_or_else(|_| "api=debug,watchlist=debug,tower_http=debug".into()),
                .unwrap_or_else(|_| "api=info,watchlist=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let mongodb_uri = env::var("MONGODB_URI").expect("MONGODB_URI must be set in environment");
    let database_name =
        env::var("DATABASE_NAME").expect("DATABASE_NAME must be set in environment");

    let client = Client::with_uri_str(&mongodb_uri).await?;
    let db = client.database(&database_name);

    tracing::info!("Connected to database");

    // Session configuration
    let secret_key = env::var("SECRET_KEY").expect("SECRET_KEY must be set in environment");

    let cookie_secure = env::var("COOKIE_SECURE")
        .map(|value| !value.eq_ignore_ascii_case("false"))
        .unwrap_or(true);

    let config = WatchlistConfig {
        cookie_secure,
        ..WatchlistConfig::from_secret_key(&secret_key)
    };

    let repo = MongoWatchlistRepository::new(db);

    // Startup cleanup: remove stale session records
    // Errors here should not prevent server startup
    let session_service =
        SessionService::new(Arc::new(repo.clone()), Arc::new(config.clone()));
    match session_service.purge_stale().await {
        Ok(deleted) => {
            tracing::info!(sessions_deleted = deleted, "Session cleanup completed");
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Session cleanup failed, continuing anyway"
            );
        }
    }

    // Build router
    let app = Router::new()
        .merge(watchlist_router(repo, config))
        .layer(TraceLayer::new_for_http());

    // Start server
    let port: u16 = env::var("PORT").unwrap_or_else(|_| "5000".to_string()).parse()?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
