//! Log In Use Case
//!
//! Authenticates a member and creates a session.

use std::sync::Arc;

use platform::client::ClientFingerprint;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::sign_session_token;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::{MemberRepository, SessionRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Log in input
pub struct LogInInput {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// Log in output
pub struct LogInOutput {
    /// Session token for cookie
    pub session_token: String,
    /// Whether the session outlives the browser
    pub remember_me: bool,
    /// The authenticated member
    pub member_id: String,
    pub full_name: String,
    pub role: kernel::identity::MemberRole,
}

/// Log in use case
pub struct LogInUseCase<M, S>
where
    M: MemberRepository,
    S: SessionRepository,
{
    member_repo: Arc<M>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<M, S> LogInUseCase<M, S>
where
    M: MemberRepository,
    S: SessionRepository,
{
    pub fn new(member_repo: Arc<M>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            member_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(
        &self,
        input: LogInInput,
        fingerprint: ClientFingerprint,
    ) -> AuthResult<LogInOutput> {
        // A malformed email cannot match any account; same error as a
        // wrong password so the response does not leak which field failed
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let mut member = self
            .member_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password = ClearTextPassword::new_unchecked(input.password);
        if !member.password_hash.verify(&password, self.config.pepper()) {
            tracing::warn!(email = %member.email, "Failed login attempt");
            return Err(AuthError::InvalidCredentials);
        }

        member.record_login();
        self.member_repo.record_login(&member).await?;

        // Create session
        let session = AuthSession::new(
            member.member_id,
            member.full_name.as_str().to_string(),
            member.role,
            input.remember_me,
            fingerprint.hash_vec(),
            fingerprint.ip_string(),
            fingerprint.user_agent.clone(),
            self.config.session_ttl_chrono(input.remember_me),
        );
        self.session_repo.create(&session).await?;

        let session_token = sign_session_token(session.session_id, &self.config.session_secret);

        tracing::info!(
            member_id = %member.member_id,
            remember_me = input.remember_me,
            "Member logged in"
        );

        Ok(LogInOutput {
            session_token,
            remember_me: input.remember_me,
            member_id: member.member_id.to_string(),
            full_name: member.full_name.as_str().to_string(),
            role: member.role,
        })
    }
}
