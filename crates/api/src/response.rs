//! Typed response bodies for the action dispatcher.
//!
//! Every action responds with one of these shapes (or with the
//! `{error, code}` body produced by [`crate::error::AppError`]). Using
//! typed structs instead of ad-hoc `serde_json::json!` keeps the wire
//! contract in one place.

use encore_core::activity::Activity;
use encore_core::track::{Comment, Track, Voter};
use encore_db::models::site_content::SiteContentRow;
use encore_db::models::stats::SiteStats;
use encore_db::models::track::TrackRow;
use serde::Serialize;

/// `getTracks` — enriched tracks with derived counts and comments.
#[derive(Debug, Serialize)]
pub struct TracksResponse {
    pub tracks: Vec<Track>,
}

/// `registerVoter` — the freshly created voter with empty sets.
#[derive(Debug, Serialize)]
pub struct VoterResponse {
    pub voter: Voter,
}

/// `vote` / `favorite` — whether the toggle added or removed the row.
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub success: bool,
    pub action: &'static str,
}

/// `addComment` — the stored comment with server-assigned identity.
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: Comment,
}

/// `getRecentActivity` — bounded feed, newest first.
#[derive(Debug, Serialize)]
pub struct ActivitiesResponse {
    pub activities: Vec<Activity>,
}

/// Plain acknowledgement for actions with nothing to return.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// `adminGetTracks` — raw rows including sort_order and timestamps.
#[derive(Debug, Serialize)]
pub struct AdminTracksResponse {
    pub tracks: Vec<TrackRow>,
}

/// `adminCreateTrack` / `adminUpdateTrack` — the affected row.
#[derive(Debug, Serialize)]
pub struct AdminTrackResponse {
    pub track: TrackRow,
}

/// `adminGetStats` — live table totals.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: SiteStats,
}

/// `adminGetSiteContent` — all editable copy items.
#[derive(Debug, Serialize)]
pub struct SiteContentListResponse {
    pub content: Vec<SiteContentRow>,
}

/// `adminCreateSiteContent` / `adminUpdateSiteContent` — the affected item.
#[derive(Debug, Serialize)]
pub struct SiteContentItemResponse {
    pub item: SiteContentRow,
}

/// `adminCreateSignedUpload` — where to put the file and the token
/// authorizing the upload.
#[derive(Debug, Serialize)]
pub struct SignedUploadResponse {
    pub bucket: String,
    pub path: String,
    pub token: String,
}
