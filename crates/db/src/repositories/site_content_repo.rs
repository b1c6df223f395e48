//! Repository for the `site_content` table.

use encore_core::types::DbId;
use sqlx::PgPool;

use crate::models::site_content::{CreateSiteContent, SiteContentRow, UpdateSiteContent};

const COLUMNS: &str = "id, key, value, created_at, updated_at";

/// Provides CRUD operations for editable site copy.
pub struct SiteContentRepo;

impl SiteContentRepo {
    /// List all items, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<SiteContentRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_content ORDER BY id");
        sqlx::query_as::<_, SiteContentRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert a new item. A duplicate key violates `uq_site_content_key`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSiteContent,
    ) -> Result<SiteContentRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_content (key, value) \
             VALUES (COALESCE($1, ''), COALESCE($2, '')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteContentRow>(&query)
            .bind(&input.key)
            .bind(&input.value)
            .fetch_one(pool)
            .await
    }

    /// Update an item. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSiteContent,
    ) -> Result<Option<SiteContentRow>, sqlx::Error> {
        let query = format!(
            "UPDATE site_content SET \
                key = COALESCE($2, key), \
                value = COALESCE($3, value), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteContentRow>(&query)
            .bind(id)
            .bind(&input.key)
            .bind(&input.value)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item, returning whether one existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM site_content WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
