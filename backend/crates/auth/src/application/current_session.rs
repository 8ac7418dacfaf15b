//! Current Session Use Case
//!
//! Verifies the session token, enforces the client fingerprint binding,
//! and returns the live session. Requests on a valid session refresh its
//! activity timestamp in the background.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::verify_session_token;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

/// Session status output
pub struct SessionStatusOutput {
    pub member_id: String,
    pub full_name: String,
    pub role: kernel::identity::MemberRole,
    pub expires_at_ms: i64,
}

/// Current session use case
pub struct CurrentSessionUseCase<S>
where
    S: SessionRepository + Send + Sync + 'static,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CurrentSessionUseCase<S>
where
    S: SessionRepository + Send + Sync + 'static,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Check the session and return its status
    pub async fn execute(
        &self,
        session_token: &str,
        fingerprint_hash: &[u8],
    ) -> AuthResult<SessionStatusOutput> {
        let session = self.get_session(session_token, fingerprint_hash).await?;

        Ok(SessionStatusOutput {
            member_id: session.member_id.to_string(),
            full_name: session.member_name.clone(),
            role: session.member_role,
            expires_at_ms: session.expires_at_ms,
        })
    }

    /// Get the live session and refresh its activity
    pub async fn get_session(
        &self,
        session_token: &str,
        fingerprint_hash: &[u8],
    ) -> AuthResult<AuthSession> {
        let session_id = verify_session_token(session_token, &self.config.session_secret)?;

        let session = self
            .session_repo
            .find_by_id(session_id, fingerprint_hash)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            return Err(AuthError::SessionInvalid);
        }

        let mut session = session;
        session.touch();
        session.extend_if_needed(self.config.session_ttl_long_chrono());

        // Persist the activity refresh without blocking the request
        let session_clone = session.clone();
        let repo = Arc::clone(&self.session_repo);
        tokio::spawn(async move {
            if let Err(e) = repo.update(&session_clone).await {
                tracing::warn!(error = %e, "Failed to update session activity");
            }
        });

        Ok(session)
    }
}
