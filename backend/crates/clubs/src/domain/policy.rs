//! Ownership Policy
//!
//! The single authorization rule for club mutation: only the officer
//! who created a club may modify it. Role is never consulted.

use kernel::identity::Identity;

use crate::domain::entities::Club;

/// True iff the acting member is the club's officer
pub fn can_modify(identity: &Identity, club: &Club) -> bool {
    identity.member_id == club.officer_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ClubDescription, ClubName};
    use kernel::id::MemberId;
    use kernel::identity::MemberRole;

    fn club_owned_by(identity: &Identity) -> Club {
        Club::new(
            ClubName::new("Chess").unwrap(),
            ClubDescription::new("We play chess.").unwrap(),
            identity,
        )
    }

    #[test]
    fn test_officer_can_modify() {
        let alice = Identity::new(MemberId::new(), "Alice", MemberRole::Student);
        let club = club_owned_by(&alice);
        assert!(can_modify(&alice, &club));
    }

    #[test]
    fn test_non_officer_cannot_modify() {
        let alice = Identity::new(MemberId::new(), "Alice", MemberRole::Student);
        let bob = Identity::new(MemberId::new(), "Bob", MemberRole::Student);
        let club = club_owned_by(&alice);
        assert!(!can_modify(&bob, &club));
    }

    #[test]
    fn test_role_is_never_consulted() {
        let alice = Identity::new(MemberId::new(), "Alice", MemberRole::Student);
        let admin = Identity::new(MemberId::new(), "Admin", MemberRole::Admin);
        let club = club_owned_by(&alice);
        assert!(!can_modify(&admin, &club));
    }
}
