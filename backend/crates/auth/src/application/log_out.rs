//! Log Out Use Case
//!
//! Destroys the server-side session. Always succeeds: an invalid or
//! already-deleted token leaves nothing to destroy, and the handler
//! clears the cookie either way.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::verify_session_token;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// Log out use case
pub struct LogOutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> LogOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, session_token: Option<&str>) -> AuthResult<()> {
        let Some(token) = session_token else {
            return Ok(());
        };

        let Ok(session_id) = verify_session_token(token, &self.config.session_secret) else {
            // Garbage token; nothing server-side to clean up
            return Ok(());
        };

        self.session_repo.delete(session_id).await?;

        tracing::info!(session_id = %session_id, "Member logged out");

        Ok(())
    }
}
