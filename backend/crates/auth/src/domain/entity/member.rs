//! Member Entity
//!
//! A registered member of the club system. The password travels only as
//! an Argon2id hash; plaintext never reaches this entity.

use chrono::{DateTime, Utc};
use kernel::id::MemberId;
use kernel::identity::MemberRole;
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, full_name::FullName};

/// Member entity
#[derive(Debug, Clone)]
pub struct Member {
    /// Internal UUID identifier
    pub member_id: MemberId,
    /// Display name
    pub full_name: FullName,
    /// Login identifier (unique)
    pub email: Email,
    /// Argon2id password hash (PHC string)
    pub password_hash: HashedPassword,
    /// Role; always Student on self-registration, never consulted by
    /// club authorization
    pub role: MemberRole,
    /// Last successful login time
    pub last_login_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Create a new member with the default Student role
    ///
    /// Registration never honors a caller-supplied role.
    pub fn new(full_name: FullName, email: Email, password_hash: HashedPassword) -> Self {
        let now = Utc::now();

        Self {
            member_id: MemberId::new(),
            full_name,
            email,
            password_hash,
            role: MemberRole::default(),
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record successful login
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }
}
