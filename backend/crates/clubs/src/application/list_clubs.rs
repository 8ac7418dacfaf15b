//! List Clubs Use Case

use std::sync::Arc;

use crate::domain::entities::ClubWithOfficer;
use crate::domain::repository::ClubRepository;
use crate::error::ClubResult;

/// List clubs use case
///
/// Any authenticated member may list; the ordering and the officer-name
/// join are the repository's contract.
pub struct ListClubsUseCase<R>
where
    R: ClubRepository,
{
    repo: Arc<R>,
}

impl<R> ListClubsUseCase<R>
where
    R: ClubRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> ClubResult<Vec<ClubWithOfficer>> {
        self.repo.list_with_officers().await
    }
}
