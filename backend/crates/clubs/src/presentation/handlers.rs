//! HTTP Handlers
//!
//! All routes here sit behind the auth crate's `require_session`
//! middleware; the acting [`Identity`] arrives as a request extension.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;
use uuid::Uuid;

use kernel::id::ClubId;
use kernel::identity::Identity;
use kernel::severity::Severity;

use crate::application::{
    CreateClubInput, CreateClubUseCase, DeleteClubUseCase, ListClubsUseCase, UpdateClubInput,
    UpdateClubUseCase,
};
use crate::domain::repository::ClubRepository;
use crate::error::{ClubError, ClubResult};
use crate::presentation::dto::{
    ClubMutationResponse, ClubResponse, CreateClubRequest, UpdateClubRequest,
};

/// Shared state for club handlers
#[derive(Clone)]
pub struct ClubAppState<R>
where
    R: ClubRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// The acting identity, or `Unauthorized` when the route was reached
/// without the session middleware
fn acting_identity(identity: Option<axum::Extension<Identity>>) -> ClubResult<Identity> {
    identity
        .map(|ext| ext.0)
        .ok_or(ClubError::Unauthorized)
}

// ============================================================================
// List
// ============================================================================

/// GET /api/clubs
pub async fn list_clubs<R>(
    State(state): State<ClubAppState<R>>,
    identity: Option<axum::Extension<Identity>>,
) -> ClubResult<Json<Vec<ClubResponse>>>
where
    R: ClubRepository + Clone + Send + Sync + 'static,
{
    acting_identity(identity)?;

    let use_case = ListClubsUseCase::new(state.repo.clone());
    let clubs = use_case.execute().await?;

    Ok(Json(clubs.into_iter().map(ClubResponse::from).collect()))
}

// ============================================================================
// Create
// ============================================================================

/// POST /api/clubs
pub async fn create_club<R>(
    State(state): State<ClubAppState<R>>,
    identity: Option<axum::Extension<Identity>>,
    Json(req): Json<CreateClubRequest>,
) -> ClubResult<(StatusCode, Json<ClubMutationResponse>)>
where
    R: ClubRepository + Clone + Send + Sync + 'static,
{
    let identity = acting_identity(identity)?;

    let use_case = CreateClubUseCase::new(state.repo.clone());
    let output = use_case
        .execute(
            &identity,
            CreateClubInput {
                name: req.name,
                description: req.description,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ClubMutationResponse {
            club_id: Some(output.club_id),
            message: format!("Club '{}' created successfully!", output.name),
            severity: Severity::Success,
        }),
    ))
}

// ============================================================================
// Update
// ============================================================================

/// PUT /api/clubs/{club_id}
pub async fn update_club<R>(
    State(state): State<ClubAppState<R>>,
    identity: Option<axum::Extension<Identity>>,
    Path(club_id): Path<Uuid>,
    Json(req): Json<UpdateClubRequest>,
) -> ClubResult<Json<ClubMutationResponse>>
where
    R: ClubRepository + Clone + Send + Sync + 'static,
{
    let identity = acting_identity(identity)?;

    let use_case = UpdateClubUseCase::new(state.repo.clone());
    let output = use_case
        .execute(
            &identity,
            ClubId::from_uuid(club_id),
            UpdateClubInput {
                name: req.name,
                description: req.description,
            },
        )
        .await?;

    Ok(Json(ClubMutationResponse {
        club_id: Some(output.club_id),
        message: format!("Club '{}' updated successfully.", output.name),
        severity: Severity::Success,
    }))
}

// ============================================================================
// Delete
// ============================================================================

/// DELETE /api/clubs/{club_id}
pub async fn delete_club<R>(
    State(state): State<ClubAppState<R>>,
    identity: Option<axum::Extension<Identity>>,
    Path(club_id): Path<Uuid>,
) -> ClubResult<Json<ClubMutationResponse>>
where
    R: ClubRepository + Clone + Send + Sync + 'static,
{
    let identity = acting_identity(identity)?;

    let use_case = DeleteClubUseCase::new(state.repo.clone());
    let output = use_case
        .execute(&identity, ClubId::from_uuid(club_id))
        .await?;

    Ok(Json(ClubMutationResponse {
        club_id: None,
        message: format!("Club '{}' successfully deleted.", output.name),
        severity: Severity::Success,
    }))
}
