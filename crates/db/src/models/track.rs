//! Track entity model and admin DTOs.
//!
//! The admin panel works with raw rows (snake_case, including
//! `sort_order`); the voter-facing enriched shape with derived counts
//! lives in `encore_core::track::Track` and is assembled by the
//! dispatcher from [`TrackWithCounts`] plus grouped comments.

use encore_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tracks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrackRow {
    pub id: DbId,
    pub title: String,
    pub duration: String,
    pub is_bonus: bool,
    pub edition: String,
    pub emotional_tag: String,
    pub cover_image: String,
    pub audio_url: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A track row joined with its derived vote and favorite counts.
///
/// The counts are computed per query from the `votes` and `favorites`
/// join tables; they are never persisted on the track row.
#[derive(Debug, Clone, FromRow)]
pub struct TrackWithCounts {
    pub id: DbId,
    pub title: String,
    pub duration: String,
    pub is_bonus: bool,
    pub edition: String,
    pub emotional_tag: String,
    pub cover_image: String,
    pub audio_url: Option<String>,
    pub votes: i64,
    pub favorites: i64,
}

/// DTO for creating a new track. Missing fields fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTrack {
    pub title: Option<String>,
    pub duration: Option<String>,
    pub is_bonus: Option<bool>,
    pub edition: Option<String>,
    pub emotional_tag: Option<String>,
    pub cover_image: Option<String>,
    pub audio_url: Option<String>,
    pub sort_order: Option<i32>,
}

/// DTO for updating an existing track. Only present fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTrack {
    pub title: Option<String>,
    pub duration: Option<String>,
    pub is_bonus: Option<bool>,
    pub edition: Option<String>,
    pub emotional_tag: Option<String>,
    pub cover_image: Option<String>,
    pub audio_url: Option<String>,
    pub sort_order: Option<i32>,
}
