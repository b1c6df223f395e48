//! Repository for the `tracks` table.

use encore_core::types::DbId;
use sqlx::PgPool;

use crate::models::track::{CreateTrack, TrackRow, TrackWithCounts, UpdateTrack};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, duration, is_bonus, edition, emotional_tag, \
                       cover_image, audio_url, sort_order, created_at, updated_at";

/// Provides CRUD and aggregation operations for tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// List all tracks with their derived vote and favorite counts.
    ///
    /// Counts are recomputed from the join tables per call so the
    /// displayed value always equals the number of referencing rows.
    /// Ordered by sort_order, then id.
    pub async fn list_with_counts(pool: &PgPool) -> Result<Vec<TrackWithCounts>, sqlx::Error> {
        sqlx::query_as::<_, TrackWithCounts>(
            "SELECT t.id, t.title, t.duration, t.is_bonus, t.edition, t.emotional_tag, \
                    t.cover_image, t.audio_url, \
                    (SELECT COUNT(*) FROM votes v WHERE v.track_id = t.id) AS votes, \
                    (SELECT COUNT(*) FROM favorites f WHERE f.track_id = t.id) AS favorites \
             FROM tracks t \
             ORDER BY t.sort_order, t.id",
        )
        .fetch_all(pool)
        .await
    }

    /// List all raw track rows for the admin panel.
    ///
    /// Ordered by sort_order, then id.
    pub async fn list(pool: &PgPool) -> Result<Vec<TrackRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks ORDER BY sort_order, id");
        sqlx::query_as::<_, TrackRow>(&query).fetch_all(pool).await
    }

    /// Insert a new track, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTrack) -> Result<TrackRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks \
                (title, duration, is_bonus, edition, emotional_tag, cover_image, audio_url, sort_order) \
             VALUES \
                (COALESCE($1, 'Untitled'), COALESCE($2, ''), COALESCE($3, false), \
                 COALESCE($4, ''), COALESCE($5, ''), COALESCE($6, ''), $7, COALESCE($8, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrackRow>(&query)
            .bind(&input.title)
            .bind(&input.duration)
            .bind(input.is_bonus)
            .bind(&input.edition)
            .bind(&input.emotional_tag)
            .bind(&input.cover_image)
            .bind(&input.audio_url)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Update a track. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTrack,
    ) -> Result<Option<TrackRow>, sqlx::Error> {
        let query = format!(
            "UPDATE tracks SET \
                title = COALESCE($2, title), \
                duration = COALESCE($3, duration), \
                is_bonus = COALESCE($4, is_bonus), \
                edition = COALESCE($5, edition), \
                emotional_tag = COALESCE($6, emotional_tag), \
                cover_image = COALESCE($7, cover_image), \
                audio_url = COALESCE($8, audio_url), \
                sort_order = COALESCE($9, sort_order), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrackRow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.duration)
            .bind(input.is_bonus)
            .bind(&input.edition)
            .bind(&input.emotional_tag)
            .bind(&input.cover_image)
            .bind(&input.audio_url)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a track row. Dependent votes, favorites, and comments must
    /// already be gone; the foreign keys have no cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tracks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
