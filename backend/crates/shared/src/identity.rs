//! Authenticated Identity
//!
//! The identity derived from a verified session, passed explicitly to
//! every use case that needs to know who is acting. There is no ambient
//! or process-global session state; absence of an `Identity` is the
//! anonymous state.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::MemberId;

/// Role of a member
///
/// Carried as data on members and sessions. Club authorization is
/// ownership-based and never consults the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum MemberRole {
    #[default]
    Student = 0,
    Faculty = 1,
    Admin = 2,
}

impl MemberRole {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use MemberRole::*;
        match self {
            Student => "student",
            Faculty => "faculty",
            Admin => "admin",
        }
    }

    /// Parse from a stored role id; unknown ids fall back to the default
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        use MemberRole::*;
        match id {
            0 => Some(Student),
            1 => Some(Faculty),
            2 => Some(Admin),
            _ => None,
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use MemberRole::*;
        match code {
            "student" => Some(Student),
            "faculty" => Some(Faculty),
            "admin" => Some(Admin),
            _ => None,
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Identity of the acting member
///
/// All three fields originate from the same verified session row and are
/// always populated together.
#[derive(Debug, Clone)]
pub struct Identity {
    pub member_id: MemberId,
    pub full_name: String,
    pub role: MemberRole,
}

impl Identity {
    pub fn new(member_id: MemberId, full_name: impl Into<String>, role: MemberRole) -> Self {
        Self {
            member_id,
            full_name: full_name.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_ids_roundtrip() {
        assert_eq!(MemberRole::from_id(0), Some(MemberRole::Student));
        assert_eq!(MemberRole::from_id(1), Some(MemberRole::Faculty));
        assert_eq!(MemberRole::from_id(2), Some(MemberRole::Admin));
        assert_eq!(MemberRole::from_id(99), None);
    }

    #[test]
    fn test_role_codes() {
        assert_eq!(MemberRole::Student.code(), "student");
        assert_eq!(MemberRole::from_code("faculty"), Some(MemberRole::Faculty));
        assert_eq!(MemberRole::from_code("officer"), None);
    }

    #[test]
    fn test_default_role_is_student() {
        assert_eq!(MemberRole::default(), MemberRole::Student);
    }

    #[test]
    fn test_identity_display_name() {
        let identity = Identity::new(MemberId::new(), "Alice", MemberRole::Student);
        assert_eq!(identity.full_name, "Alice");
        assert_eq!(identity.role, MemberRole::Student);
    }
}
