//! Delete Club Use Case

use std::sync::Arc;

use kernel::id::ClubId;
use kernel::identity::Identity;

use crate::domain::policy::can_modify;
use crate::domain::repository::ClubRepository;
use crate::error::{ClubError, ClubResult};

/// Delete club output
pub struct DeleteClubOutput {
    pub name: String,
}

/// Delete club use case
pub struct DeleteClubUseCase<R>
where
    R: ClubRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteClubUseCase<R>
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
    ) -> ClubResult<DeleteClubOutput> {
        let club = self
            .repo
            .find_by_id(&club_id)
            .await?
            .ok_or(ClubError::NotFound)?;

        if !can_modify(identity, &club) {
            tracing::warn!(
                club_id = %club_id,
                member_id = %identity.member_id,
                "Delete denied for non-officer"
            );
            return Err(ClubError::Forbidden);
        }

        self.repo.delete(&club_id).await?;

        tracing::info!(club_id = %club_id, name = %club.name, "Club deleted");

        Ok(DeleteClubOutput {
            name: club.name.as_str().to_string(),
        })
    }
}
