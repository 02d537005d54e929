//! Session Entity
//!
//! Server-side state for one browser session. The signed cookie token
//! proves the session id was issued here; this record is everything the
//! server remembers under that id. Presence of `email` is what "logged
//! in" means.

use chrono::{DateTime, Utc};
use kernel::id::{SessionId, UserId};

use crate::domain::value_object::{Email, FlashMessage, Theme};

/// Session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (random hex), also the cookie token's signed payload
    pub session_id: SessionId,
    /// Identity marker; present means logged in
    pub email: Option<Email>,
    /// The logged-in user's id, set together with `email`
    pub user_id: Option<UserId>,
    /// UI preference; survives logout
    pub theme: Option<Theme>,
    /// Pending one-shot notices, drained by the next page render
    pub flash: Vec<FlashMessage>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last persisted activity, used for stale-session cleanup
    pub last_seen_at: DateTime<Utc>,
}

impl Session {
    /// Create a fresh anonymous session with a new id
    pub fn new() -> Self {
        Self::with_id(SessionId::new())
    }

    /// Create an empty record under a known id
    ///
    /// Used when a request carries a validly signed token but no document
    /// exists for it (yet, or any more).
    pub fn with_id(session_id: SessionId) -> Self {
        let now = Utc::now();
        Self {
            session_id,
            email: None,
            user_id: None,
            theme: None,
            flash: Vec::new(),
            created_at: now,
            last_seen_at: now,
        }
    }

    /// Whether this session is logged in
    pub fn is_authenticated(&self) -> bool {
        self.email.is_some()
    }

    /// Attach a user's identity to this session
    pub fn sign_in(&mut self, email: Email, user_id: UserId) {
        self.email = Some(email);
        self.user_id = Some(user_id);
    }

    /// Drop everything except the UI theme
    pub fn clear_preserving_theme(&mut self) {
        self.email = None;
        self.user_id = None;
        self.flash.clear();
    }

    /// Queue a one-shot notice for the next rendered page
    pub fn push_flash(&mut self, flash: FlashMessage) {
        self.flash.push(flash);
    }

    /// Drain the pending notices
    pub fn take_flash(&mut self) -> Vec<FlashMessage> {
        std::mem::take(&mut self.flash)
    }

    /// Flip the theme preference
    ///
    /// An unset theme toggles to dark, not light.
    pub fn toggle_theme(&mut self) {
        self.theme = Some(match self.theme {
            Some(Theme::Dark) => Theme::Light,
            _ => Theme::Dark,
        });
    }

    /// The theme to render with (dark until set)
    pub fn effective_theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    /// Update the last activity timestamp
    pub fn touch(&mut self) {
        self.last_seen_at = Utc::now();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
