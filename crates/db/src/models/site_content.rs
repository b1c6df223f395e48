use encore_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `site_content` table: one editable piece of site copy
/// addressed by a unique key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteContentRow {
    pub id: DbId,
    pub key: String,
    pub value: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a site content item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSiteContent {
    pub key: Option<String>,
    pub value: Option<String>,
}

/// DTO for updating a site content item. Only present fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSiteContent {
    pub key: Option<String>,
    pub value: Option<String>,
}
