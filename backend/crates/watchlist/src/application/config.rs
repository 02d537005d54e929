//! Application Configuration
//!
//! Configuration for the watchlist application layer.

use chrono::{DateTime, Duration, Utc};
use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Watchlist application configuration
#[derive(Debug, Clone)]
pub struct WatchlistConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Session records idle longer than this get purged at startup
    pub session_max_idle_days: i64,
}

impl Default for WatchlistConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "watchlist_session".to_string(),
            session_secret: [0u8; 32],
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            session_max_idle_days: 30,
        }
    }
}

impl WatchlistConfig {
    /// Create config with the HMAC key derived from an arbitrary secret
    /// string (SHA-256 stretch)
    pub fn from_secret_key(secret_key: &str) -> Self {
        Self {
            session_secret: platform::crypto::sha256(secret_key.as_bytes()),
            ..Default::default()
        }
    }

    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Cookie shape for the session token
    ///
    /// No `Max-Age`: the cookie lives for the browser session.
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }

    /// Oldest `last_seen_at` a session record may have before cleanup
    /// removes it
    pub fn stale_session_cutoff(&self) -> DateTime<Utc> {
        Utc::now() - Duration::days(self.session_max_idle_days)
    }
}
