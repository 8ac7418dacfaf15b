//! Club Entity

use chrono::{DateTime, Utc};
use kernel::id::{ClubId, MemberId};
use kernel::identity::Identity;

use crate::domain::value_objects::{ClubDescription, ClubName};

/// Club entity
#[derive(Debug, Clone)]
pub struct Club {
    /// Internal UUID identifier
    pub club_id: ClubId,
    /// Unique display name
    pub name: ClubName,
    /// Free-form description
    pub description: ClubDescription,
    /// The member who created the club; sole authority for
    /// modification, immutable for the club's lifetime
    pub officer_id: MemberId,
    /// Creator's display name at creation time. A snapshot only; the
    /// live name comes from the members table at read time
    pub created_by_name: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Club {
    /// Create a new club owned by the acting identity
    pub fn new(name: ClubName, description: ClubDescription, officer: &Identity) -> Self {
        let now = Utc::now();

        Self {
            club_id: ClubId::new(),
            name,
            description,
            officer_id: officer.member_id,
            created_by_name: officer.full_name.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A club joined with its officer's current display name
#[derive(Debug, Clone)]
pub struct ClubWithOfficer {
    pub club: Club,
    /// The officer's display name as it is now, not the creation-time
    /// snapshot
    pub officer_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::identity::MemberRole;

    #[test]
    fn test_new_club_snapshots_officer() {
        let officer = Identity::new(MemberId::new(), "Alice Johnson", MemberRole::Student);
        let club = Club::new(
            ClubName::new("Chess").unwrap(),
            ClubDescription::new("We play chess.").unwrap(),
            &officer,
        );

        assert_eq!(club.officer_id, officer.member_id);
        assert_eq!(club.created_by_name, "Alice Johnson");
    }
}
