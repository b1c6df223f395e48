//! Repository for the `votes` table.
//!
//! A vote is a (voter, track) pair with at-most-one-row-per-pair
//! semantics: insert to add, delete to remove. The unique constraint
//! `uq_votes_voter_track` is the real duplicate guard; the per-voter
//! count check in the dispatcher races under rapid double-clicks and
//! only enforces the cardinality limit.

use encore_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::activity::ActivityRow;

pub struct VoteRepo;

impl VoteRepo {
    /// Number of votes the voter currently holds across all tracks.
    pub async fn count_for_voter(pool: &PgPool, voter_id: Uuid) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM votes WHERE voter_id = $1")
            .bind(voter_id)
            .fetch_one(pool)
            .await
    }

    /// Insert a vote row. A duplicate pair violates
    /// `uq_votes_voter_track` and surfaces as a database error.
    pub async fn add(pool: &PgPool, voter_id: Uuid, track_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO votes (voter_id, track_id) VALUES ($1, $2)")
            .bind(voter_id)
            .bind(track_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete a vote row, returning whether one existed.
    pub async fn remove(pool: &PgPool, voter_id: Uuid, track_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM votes WHERE voter_id = $1 AND track_id = $2")
            .bind(voter_id)
            .bind(track_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Most recent votes joined with display names, newest first.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<ActivityRow>, sqlx::Error> {
        sqlx::query_as::<_, ActivityRow>(
            "SELECT vo.name AS voter_name, t.title AS track_title, \
                    NULL::TEXT AS text, v.created_at \
             FROM votes v \
             JOIN voters vo ON vo.id = v.voter_id \
             JOIN tracks t ON t.id = v.track_id \
             ORDER BY v.created_at DESC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Delete all votes for a track. Part of the non-atomic track
    /// deletion sequence.
    pub async fn delete_for_track(pool: &PgPool, track_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM votes WHERE track_id = $1")
            .bind(track_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
