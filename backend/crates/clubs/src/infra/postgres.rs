//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use kernel::id::{ClubId, MemberId};

use crate::domain::entities::{Club, ClubWithOfficer};
use crate::domain::repository::ClubRepository;
use crate::domain::value_objects::{ClubDescription, ClubName};
use crate::error::{ClubError, ClubResult};

/// PostgreSQL unique_violation error code
const PG_UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL-backed club repository
#[derive(Clone)]
pub struct PgClubRepository {
    pool: PgPool,
}

impl PgClubRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_unique_violation(err: sqlx::Error, name: &ClubName) -> ClubError {
    match &err {
        sqlx::Error::Database(db_err)
            if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION) =>
        {
            ClubError::NameTaken(name.as_str().to_string())
        }
        _ => ClubError::Database(err),
    }
}

impl ClubRepository for PgClubRepository {
    async fn create(&self, club: &Club) -> ClubResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO clubs (
                club_id,
                name,
                description,
                officer_id,
                created_by_name,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(club.club_id.as_uuid())
        .bind(club.name.as_str())
        .bind(club.description.as_str())
        .bind(club.officer_id.as_uuid())
        .bind(&club.created_by_name)
        .bind(club.created_at)
        .bind(club.updated_at)
        .execute(&self.pool)
        .await;

        result
            .map(|_| ())
            .map_err(|e| map_unique_violation(e, &club.name))
    }

    async fn list_with_officers(&self) -> ClubResult<Vec<ClubWithOfficer>> {
        let rows = sqlx::query_as::<_, ClubWithOfficerRow>(
            r#"
            SELECT
                c.club_id,
                c.name,
                c.description,
                c.officer_id,
                c.created_by_name,
                c.created_at,
                c.updated_at,
                m.full_name AS officer_name
            FROM clubs c
            JOIN members m ON m.member_id = c.officer_id
            ORDER BY c.name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_club_with_officer()).collect())
    }

    async fn find_by_id(&self, club_id: &ClubId) -> ClubResult<Option<Club>> {
        let row = sqlx::query_as::<_, ClubRow>(
            r#"
            SELECT
                club_id,
                name,
                description,
                officer_id,
                created_by_name,
                created_at,
                updated_at
            FROM clubs
            WHERE club_id = $1
            "#,
        )
        .bind(club_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_club()))
    }

    async fn update(
        &self,
        club_id: &ClubId,
        name: &ClubName,
        description: &ClubDescription,
    ) -> ClubResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE clubs SET
                name = $2,
                description = $3,
                updated_at = $4
            WHERE club_id = $1
            "#,
        )
        .bind(club_id.as_uuid())
        .bind(name.as_str())
        .bind(description.as_str())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, name))?;

        if result.rows_affected() == 0 {
            return Err(ClubError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, club_id: &ClubId) -> ClubResult<()> {
        let result = sqlx::query("DELETE FROM clubs WHERE club_id = $1")
            .bind(club_id.as_uuid())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ClubError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ClubRow {
    club_id: Uuid,
    name: String,
    description: String,
    officer_id: Uuid,
    created_by_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ClubRow {
    fn into_club(self) -> Club {
        Club {
            club_id: ClubId::from_uuid(self.club_id),
            name: ClubName::from_db(self.name),
            description: ClubDescription::from_db(self.description),
            officer_id: MemberId::from_uuid(self.officer_id),
            created_by_name: self.created_by_name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ClubWithOfficerRow {
    club_id: Uuid,
    name: String,
    description: String,
    officer_id: Uuid,
    created_by_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    officer_name: String,
}

impl ClubWithOfficerRow {
    fn into_club_with_officer(self) -> ClubWithOfficer {
        ClubWithOfficer {
            club: Club {
                club_id: ClubId::from_uuid(self.club_id),
                name: ClubName::from_db(self.name),
                description: ClubDescription::from_db(self.description),
                officer_id: MemberId::from_uuid(self.officer_id),
                created_by_name: self.created_by_name,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            officer_name: self.officer_name,
        }
    }
}
