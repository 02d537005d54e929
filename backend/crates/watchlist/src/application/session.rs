//! Session Service
//!
//! Issues and verifies the signed session token, and loads/persists the
//! server-side session record behind it. The token is
//! `"{session_id}.{base64url(hmac_sha256(secret, session_id))}"`; the
//! signature is the only thing that makes the cookie trustworthy.

use std::sync::Arc;

use kernel::id::SessionId;

use crate::application::config::WatchlistConfig;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;
use crate::error::{WatchlistError, WatchlistResult};

/// Session service
pub struct SessionService<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    session_repo: Arc<S>,
    config: Arc<WatchlistConfig>,
}

impl<S> SessionService<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(session_repo: Arc<S>, config: Arc<WatchlistConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Sign a session id into a cookie token
    pub fn issue_token(&self, session_id: &SessionId) -> String {
        use base64::Engine;
        use hmac::{Hmac, Mac};
        use sha2::Sha256;

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.config.session_secret)
            .expect("HMAC can take key of any size");
        mac.update(session_id.as_str().as_bytes());

        let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .encode(mac.finalize().into_bytes());

        format!("{}.{}", session_id.as_str(), signature)
    }

    /// Parse and verify a session token
    ///
    /// Verification is constant-time; any malformed or forged token is
    /// rejected the same way.
    pub fn parse_token(&self, token: &str) -> WatchlistResult<SessionId> {
        use base64::Engine;
        use hmac::{Hmac, Mac};
        use sha2::Sha256;

        let Some((session_id_str, signature_b64)) = token.split_once('.') else {
            return Err(WatchlistError::InvalidSession);
        };

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.config.session_secret)
            .expect("HMAC can take key of any size");
        mac.update(session_id_str.as_bytes());

        let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| WatchlistError::InvalidSession)?;

        mac.verify_slice(&signature)
            .map_err(|_| WatchlistError::InvalidSession)?;

        Ok(SessionId::from_string(session_id_str))
    }

    /// Resolve the request's session
    ///
    /// A valid token resolves to its stored record, or to an empty record
    /// under the token's id when nothing is stored (the document only
    /// materializes on the first persisting write). Anything else gets a
    /// fresh session and a newly issued token; `fresh` tells the caller
    /// to send the cookie.
    pub async fn load_or_new(
        &self,
        token: Option<&str>,
    ) -> WatchlistResult<(Session, String, bool)> {
        if let Some(token) = token {
            if let Ok(session_id) = self.parse_token(token) {
                let session = match self.session_repo.find_session(&session_id).await? {
                    Some(session) => session,
                    None => Session::with_id(session_id),
                };
                return Ok((session, token.to_string(), false));
            }
        }

        let session = Session::new();
        let token = self.issue_token(&session.session_id);
        Ok((session, token, true))
    }

    /// Upsert the session record
    pub async fn persist(&self, session: &mut Session) -> WatchlistResult<()> {
        session.touch();
        self.session_repo.save_session(session).await
    }

    /// Remove session records idle past the configured window
    pub async fn purge_stale(&self) -> WatchlistResult<u64> {
        self.session_repo
            .purge_stale_sessions(self.config.stale_session_cutoff())
            .await
    }
}
