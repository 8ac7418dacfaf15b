//! API DTOs (Data Transfer Objects)

use kernel::severity::Severity;
use serde::{Deserialize, Serialize};

use crate::domain::entities::ClubWithOfficer;

// ============================================================================
// Club Resource
// ============================================================================

/// A club as returned to clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubResponse {
    pub club_id: String,
    pub name: String,
    pub description: String,
    pub officer_id: String,
    /// The officer's current display name
    pub officer_name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ClubWithOfficer> for ClubResponse {
    fn from(item: ClubWithOfficer) -> Self {
        Self {
            club_id: item.club.club_id.to_string(),
            name: item.club.name.as_str().to_string(),
            description: item.club.description.as_str().to_string(),
            officer_id: item.club.officer_id.to_string(),
            officer_name: item.officer_name,
            created_at: item.club.created_at.to_rfc3339(),
            updated_at: item.club.updated_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Mutations
// ============================================================================

/// Create club request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClubRequest {
    pub name: String,
    pub description: String,
}

/// Update club request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClubRequest {
    pub name: String,
    pub description: String,
}

/// Outcome of a club mutation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubMutationResponse {
    pub club_id: Option<String>,
    pub message: String,
    pub severity: Severity,
}
