//! Auth Session Entity
//!
//! Represents an authenticated member session. Stored in the database
//! with a cookie-based token reference. The identity triple (member id,
//! name, role) is written together at login; a session is never
//! partially populated.

use chrono::{DateTime, Duration, Utc};
use kernel::id::MemberId;
use kernel::identity::{Identity, MemberRole};
use uuid::Uuid;

/// Auth session entity
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    /// Reference to the Member
    pub member_id: MemberId,
    /// Display name at login time
    pub member_name: String,
    /// Role at login time
    pub member_role: MemberRole,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Whether "Remember Me" was checked
    pub remember_me: bool,
    /// Client fingerprint hash (User-Agent based)
    pub client_fingerprint_hash: Vec<u8>,
    /// Client IP (optional, for logging)
    pub client_ip: Option<String>,
    /// User agent string (for session management display)
    pub user_agent: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp
    pub last_activity_at: DateTime<Utc>,
}

impl AuthSession {
    /// Create a new auth session
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        member_id: MemberId,
        member_name: String,
        member_role: MemberRole,
        remember_me: bool,
        fingerprint_hash: Vec<u8>,
        client_ip: Option<String>,
        user_agent: Option<String>,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            member_id,
            member_name,
            member_role,
            expires_at_ms: (now + ttl).timestamp_millis(),
            remember_me,
            client_fingerprint_hash: fingerprint_hash,
            client_ip,
            user_agent,
            created_at: now,
            last_activity_at: now,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Update last activity timestamp
    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }

    /// Extend session if "Remember Me" is enabled
    ///
    /// The extension policy is intentionally simple:
    /// - only applies to remember_me sessions
    /// - extend to (now + ttl_long) when remaining time falls below half of ttl_long
    pub fn extend_if_needed(&mut self, ttl_long: Duration) {
        if !self.remember_me {
            return;
        }

        let now = Utc::now();
        let new_expires = (now + ttl_long).timestamp_millis();

        // Only extend if less than half the TTL remains
        if self.expires_at_ms < (now + (ttl_long / 2)).timestamp_millis() {
            self.expires_at_ms = new_expires;
        }
    }

    /// The identity this session vouches for
    pub fn identity(&self) -> Identity {
        Identity::new(self.member_id, self.member_name.clone(), self.member_role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session(remember_me: bool, ttl: Duration) -> AuthSession {
        AuthSession::new(
            MemberId::new(),
            "Alice".to_string(),
            MemberRole::Student,
            remember_me,
            vec![0u8; 32],
            Some("127.0.0.1".to_string()),
            Some("test-agent".to_string()),
            ttl,
        )
    }

    #[test]
    fn test_fresh_session_not_expired() {
        let session = sample_session(false, Duration::hours(12));
        assert!(!session.is_expired());
    }

    #[test]
    fn test_expired_session() {
        let session = sample_session(false, Duration::milliseconds(-1));
        assert!(session.is_expired());
    }

    #[test]
    fn test_extend_only_remember_me() {
        let ttl_long = Duration::days(7);

        // Short-lived session near expiry, without remember_me: untouched
        let mut session = sample_session(false, Duration::minutes(1));
        let before = session.expires_at_ms;
        session.extend_if_needed(ttl_long);
        assert_eq!(session.expires_at_ms, before);

        // Remember-me session near expiry: extended
        let mut session = sample_session(true, Duration::minutes(1));
        let before = session.expires_at_ms;
        session.extend_if_needed(ttl_long);
        assert!(session.expires_at_ms > before);
    }

    #[test]
    fn test_no_extension_when_plenty_remains() {
        let ttl_long = Duration::days(7);
        let mut session = sample_session(true, Duration::days(6));
        let before = session.expires_at_ms;
        session.extend_if_needed(ttl_long);
        assert_eq!(session.expires_at_ms, before);
    }

    #[test]
    fn test_identity_mirrors_session() {
        let session = sample_session(false, Duration::hours(12));
        let identity = session.identity();
        assert_eq!(identity.member_id, session.member_id);
        assert_eq!(identity.full_name, session.member_name);
        assert_eq!(identity.role, session.member_role);
    }
}
