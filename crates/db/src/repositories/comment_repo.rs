//! Repository for the `comments` table. Comments are append-only.

use encore_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::activity::ActivityRow;
use crate::models::comment::CommentWithVoter;

pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment and return it joined with the author's name, so
    /// the caller gets the full wire shape in one round trip.
    pub async fn create(
        pool: &PgPool,
        voter_id: Uuid,
        track_id: DbId,
        text: &str,
        timestamp_secs: i32,
    ) -> Result<CommentWithVoter, sqlx::Error> {
        sqlx::query_as::<_, CommentWithVoter>(
            "WITH inserted AS ( \
                INSERT INTO comments (voter_id, track_id, text, timestamp_secs) \
                VALUES ($1, $2, $3, $4) \
                RETURNING id, voter_id, track_id, text, timestamp_secs, created_at \
             ) \
             SELECT i.id, i.track_id, v.name AS voter_name, i.text, i.timestamp_secs, i.created_at \
             FROM inserted i \
             JOIN voters v ON v.id = i.voter_id",
        )
        .bind(voter_id)
        .bind(track_id)
        .bind(text)
        .bind(timestamp_secs)
        .fetch_one(pool)
        .await
    }

    /// All comments joined with author names, newest first. The caller
    /// groups them by track when assembling the enriched track list.
    pub async fn list_with_voter(pool: &PgPool) -> Result<Vec<CommentWithVoter>, sqlx::Error> {
        sqlx::query_as::<_, CommentWithVoter>(
            "SELECT c.id, c.track_id, v.name AS voter_name, c.text, c.timestamp_secs, c.created_at \
             FROM comments c \
             JOIN voters v ON v.id = c.voter_id \
             ORDER BY c.created_at DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Most recent comments as activity rows, newest first.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<ActivityRow>, sqlx::Error> {
        sqlx::query_as::<_, ActivityRow>(
            "SELECT v.name AS voter_name, t.title AS track_title, \
                    c.text, c.created_at \
             FROM comments c \
             JOIN voters v ON v.id = c.voter_id \
             JOIN tracks t ON t.id = c.track_id \
             ORDER BY c.created_at DESC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Delete all comments for a track. Part of the non-atomic track
    /// deletion sequence.
    pub async fn delete_for_track(pool: &PgPool, track_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE track_id = $1")
            .bind(track_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
