//! Register Use Case
//!
//! Creates a new member account.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::member::Member;
use crate::domain::repository::MemberRepository;
use crate::domain::value_object::{email::Email, full_name::FullName};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    pub member_id: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: MemberRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: MemberRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Validate full name and email
        let full_name = FullName::new(input.full_name)
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        let email = Email::new(&input.email)
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        // Validate and hash password
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Persist; the unique index on email rejects duplicates, no
        // pre-check read
        let member = Member::new(full_name, email, password_hash);
        self.repo.create(&member).await?;

        tracing::info!(
            member_id = %member.member_id,
            email = %member.email,
            "Member registered"
        );

        Ok(RegisterOutput {
            member_id: member.member_id.to_string(),
        })
    }
}
