//! Create Club Use Case

use std::sync::Arc;

use kernel::identity::Identity;

use crate::domain::entities::Club;
use crate::domain::repository::ClubRepository;
use crate::domain::value_objects::{ClubDescription, ClubName};
use crate::error::{ClubError, ClubResult};

/// Create club input
pub struct CreateClubInput {
    pub name: String,
    pub description: String,
}

/// Create club output
pub struct CreateClubOutput {
    pub club_id: String,
    pub name: String,
}

/// Create club use case
pub struct CreateClubUseCase<R>
where
    R: ClubRepository,
{
    repo: Arc<R>,
}

impl<R> CreateClubUseCase<R>
where
    R: ClubRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        identity: &Identity,
        input: CreateClubInput,
    ) -> ClubResult<CreateClubOutput> {
        // Validation happens before the store is touched
        let name =
            ClubName::new(input.name).map_err(|e| ClubError::Validation(e.message().to_string()))?;
        let description = ClubDescription::new(input.description)
            .map_err(|e| ClubError::Validation(e.message().to_string()))?;

        let club = Club::new(name, description, identity);
        self.repo.create(&club).await?;

        tracing::info!(
            club_id = %club.club_id,
            officer_id = %club.officer_id,
            name = %club.name,
            "Club created"
        );

        Ok(CreateClubOutput {
            club_id: club.club_id.to_string(),
            name: club.name.as_str().to_string(),
        })
    }
}
