use encore_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `voters` table. Voters are never updated in place and
/// never deleted; votes and favorites reference them by id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VoterRow {
    pub id: Uuid,
    pub name: String,
    pub created_at: Timestamp,
}
