//! Repository for the `voters` table.

use sqlx::PgPool;

use crate::models::voter::VoterRow;

/// Provides voter registration. Voters have no update or delete
/// lifecycle; vote and favorite toggles live in their own repositories.
pub struct VoterRepo;

impl VoterRepo {
    /// Insert a new voter, returning the created row. Names are free
    /// text and not unique; every registration creates a fresh voter.
    pub async fn create(pool: &PgPool, name: &str) -> Result<VoterRow, sqlx::Error> {
        sqlx::query_as::<_, VoterRow>(
            "INSERT INTO voters (name) VALUES ($1) RETURNING id, name, created_at",
        )
        .bind(name)
        .fetch_one(pool)
        .await
    }
}
