//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{auth_session::AuthSession, member::Member};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;
use kernel::id::MemberId;
use uuid::Uuid;

/// Member repository trait
///
/// `create` relies on the store's unique constraint for email
/// uniqueness; implementations map that rejection to
/// `AuthError::EmailAlreadyRegistered`. There is deliberately no
/// `exists_by_email` pre-check.
#[trait_variant::make(MemberRepository: Send)]
pub trait LocalMemberRepository {
    /// Persist a new member
    async fn create(&self, member: &Member) -> AuthResult<()>;

    /// Find member by ID
    async fn find_by_id(&self, member_id: &MemberId) -> AuthResult<Option<Member>>;

    /// Find member by email (exact match on the normalized form)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Member>>;

    /// Record a successful login
    async fn record_login(&self, member: &Member) -> AuthResult<()>;
}

/// Auth session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    /// Find session by ID and verify fingerprint
    async fn find_by_id(
        &self,
        session_id: Uuid,
        fingerprint_hash: &[u8],
    ) -> AuthResult<Option<AuthSession>>;

    /// Update session (e.g., last activity)
    async fn update(&self, session: &AuthSession) -> AuthResult<()>;

    /// Delete a session; deleting an absent session is a no-op
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
