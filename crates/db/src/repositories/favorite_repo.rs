//! Repository for the `favorites` table.
//!
//! Same (voter, track) pair semantics as votes, with no cardinality
//! limit. Duplicates are blocked by `uq_favorites_voter_track`.

use encore_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::activity::ActivityRow;

pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Insert a favorite row.
    pub async fn add(pool: &PgPool, voter_id: Uuid, track_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO favorites (voter_id, track_id) VALUES ($1, $2)")
            .bind(voter_id)
            .bind(track_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete a favorite row, returning whether one existed.
    pub async fn remove(pool: &PgPool, voter_id: Uuid, track_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE voter_id = $1 AND track_id = $2")
            .bind(voter_id)
            .bind(track_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Most recent favorites joined with display names, newest first.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<ActivityRow>, sqlx::Error> {
        sqlx::query_as::<_, ActivityRow>(
            "SELECT vo.name AS voter_name, t.title AS track_title, \
                    NULL::TEXT AS text, f.created_at \
             FROM favorites f \
             JOIN voters vo ON vo.id = f.voter_id \
             JOIN tracks t ON t.id = f.track_id \
             ORDER BY f.created_at DESC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Delete all favorites for a track. Part of the non-atomic track
    /// deletion sequence.
    pub async fn delete_for_track(pool: &PgPool, track_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE track_id = $1")
            .bind(track_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
