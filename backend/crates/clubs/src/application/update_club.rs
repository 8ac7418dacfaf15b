//! Update Club Use Case

use std::sync::Arc;

use kernel::id::ClubId;
use kernel::identity::Identity;

use crate::domain::policy::can_modify;
use crate::domain::repository::ClubRepository;
use crate::domain::value_objects::{ClubDescription, ClubName};
use crate::error::{ClubError, ClubResult};

/// Update club input
pub struct UpdateClubInput {
    pub name: String,
    pub description: String,
}

/// Update club output
pub struct UpdateClubOutput {
    pub club_id: String,
    pub name: String,
}

/// Update club use case
pub struct UpdateClubUseCase<R>
where
    R: ClubRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateClubUseCase<R>
where
    R: ClubRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        identity: &Identity,
        club_id: ClubId,
        input: UpdateClubInput,
    ) -> ClubResult<UpdateClubOutput> {
        let name =
            ClubName::new(input.name).map_err(|e| ClubError::Validation(e.message().to_string()))?;
        let description = ClubDescription::new(input.description)
            .map_err(|e| ClubError::Validation(e.message().to_string()))?;

        let club = self
            .repo
            .find_by_id(&club_id)
            .await?
            .ok_or(ClubError::NotFound)?;

        if !can_modify(identity, &club) {
            tracing::warn!(
                club_id = %club_id,
                member_id = %identity.member_id,
                "Update denied for non-officer"
            );
            return Err(ClubError::Forbidden);
        }

        // A rename collides through the same unique key as create
        self.repo.update(&club_id, &name, &description).await?;

        tracing::info!(club_id = %club_id, name = %name, "Club updated");

        Ok(UpdateClubOutput {
            club_id: club_id.to_string(),
            name: name.as_str().to_string(),
        })
    }
}
