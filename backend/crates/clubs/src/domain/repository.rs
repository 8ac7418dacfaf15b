//! Club Repository Trait

use kernel::id::ClubId;

use crate::domain::entities::{Club, ClubWithOfficer};
use crate::domain::value_objects::{ClubDescription, ClubName};
use crate::error::ClubResult;

/// Club repository
///
/// Name uniqueness is the store's to enforce: `create` and `update`
/// surface the unique-key rejection as `NameTaken` instead of running a
/// pre-check read.
#[trait_variant::make(ClubRepository: Send)]
pub trait LocalClubRepository {
    /// Persist a new club
    async fn create(&self, club: &Club) -> ClubResult<()>;

    /// All clubs ordered by name ascending, joined with each officer's
    /// current display name
    async fn list_with_officers(&self) -> ClubResult<Vec<ClubWithOfficer>>;

    /// Find a club by id
    async fn find_by_id(&self, club_id: &ClubId) -> ClubResult<Option<Club>>;

    /// Replace name and description; `NotFound` when no row matches,
    /// `NameTaken` when the new name collides
    async fn update(
        &self,
        club_id: &ClubId,
        name: &ClubName,
        description: &ClubDescription,
    ) -> ClubResult<()>;

    /// Delete a club; `NotFound` when no row matches
    async fn delete(&self, club_id: &ClubId) -> ClubResult<()>;
}
