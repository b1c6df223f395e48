//! Password-gated admin actions: track metadata, site copy, stats, and
//! signed uploads. The password check itself happens in the dispatcher
//! before these run.

use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use encore_core::error::CoreError;
use encore_core::types::DbId;
use encore_db::models::site_content::{CreateSiteContent, UpdateSiteContent};
use encore_db::models::track::{CreateTrack, UpdateTrack};
use encore_db::repositories::{
    CommentRepo, FavoriteRepo, SiteContentRepo, StatsRepo, TrackRepo, VoteRepo,
};

use crate::error::{AppError, AppResult};
use crate::response::{
    AdminTrackResponse, AdminTracksResponse, SignedUploadResponse, SiteContentItemResponse,
    SiteContentListResponse, StatsResponse, SuccessResponse,
};
use crate::state::AppState;
use crate::upload;

/// `adminGetTracks` — raw rows including sort_order and timestamps.
pub async fn get_tracks(state: &AppState) -> AppResult<Response> {
    let tracks = TrackRepo::list(&state.pool).await?;
    Ok(Json(AdminTracksResponse { tracks }).into_response())
}

/// `adminCreateTrack`.
pub async fn create_track(state: &AppState, input: &CreateTrack) -> AppResult<Response> {
    let track = TrackRepo::create(&state.pool, input).await?;
    tracing::info!(track_id = track.id, title = %track.title, "Track created");
    Ok(Json(AdminTrackResponse { track }).into_response())
}

/// `adminUpdateTrack`.
pub async fn update_track(
    state: &AppState,
    track_id: DbId,
    updates: &UpdateTrack,
) -> AppResult<Response> {
    let track = TrackRepo::update(&state.pool, track_id, updates)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Track",
            id: track_id,
        }))?;
    Ok(Json(AdminTrackResponse { track }).into_response())
}

/// `adminDeleteTrack` — remove a track and everything referencing it.
///
/// The deletes run as independent statements, not one transaction: a
/// crash mid-sequence can leave orphaned vote/favorite/comment rows
/// until the track delete is retried.
pub async fn delete_track(state: &AppState, track_id: DbId) -> AppResult<Response> {
    let votes = VoteRepo::delete_for_track(&state.pool, track_id).await?;
    let favorites = FavoriteRepo::delete_for_track(&state.pool, track_id).await?;
    let comments = CommentRepo::delete_for_track(&state.pool, track_id).await?;

    let deleted = TrackRepo::delete(&state.pool, track_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Track",
            id: track_id,
        }));
    }

    tracing::info!(track_id, votes, favorites, comments, "Track deleted");
    Ok(Json(SuccessResponse { success: true }).into_response())
}

/// `adminGetStats` — live totals across all tables.
pub async fn get_stats(state: &AppState) -> AppResult<Response> {
    let stats = StatsRepo::site_totals(&state.pool).await?;
    Ok(Json(StatsResponse { stats }).into_response())
}

/// `adminGetSiteContent`.
pub async fn get_site_content(state: &AppState) -> AppResult<Response> {
    let content = SiteContentRepo::list(&state.pool).await?;
    Ok(Json(SiteContentListResponse { content }).into_response())
}

/// `adminCreateSiteContent`.
pub async fn create_site_content(
    state: &AppState,
    input: &CreateSiteContent,
) -> AppResult<Response> {
    let item = SiteContentRepo::create(&state.pool, input).await?;
    Ok(Json(SiteContentItemResponse { item }).into_response())
}

/// `adminUpdateSiteContent`.
pub async fn update_site_content(
    state: &AppState,
    id: DbId,
    updates: &UpdateSiteContent,
) -> AppResult<Response> {
    let item = SiteContentRepo::update(&state.pool, id, updates)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SiteContent",
            id,
        }))?;
    Ok(Json(SiteContentItemResponse { item }).into_response())
}

/// `adminDeleteSiteContent`.
pub async fn delete_site_content(state: &AppState, id: DbId) -> AppResult<Response> {
    let deleted = SiteContentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "SiteContent",
            id,
        }));
    }
    Ok(Json(SuccessResponse { success: true }).into_response())
}

/// `adminCreateSignedUpload` — hand out a storage path and an HMAC
/// token for it. The object store performing the actual upload stays
/// external.
pub async fn create_signed_upload(
    state: &AppState,
    bucket: String,
    folder: &str,
    file_name: &str,
    content_type: Option<String>,
) -> AppResult<Response> {
    if bucket.is_empty() {
        return Err(AppError::BadRequest("Missing bucket".to_string()));
    }

    let content_type = content_type.unwrap_or_else(|| "application/octet-stream".to_string());
    let path = upload::upload_path(folder, file_name, Utc::now().timestamp_millis());
    let token = upload::sign_upload(
        &state.config.upload_signing_secret,
        &bucket,
        &path,
        &content_type,
    );

    Ok(Json(SignedUploadResponse {
        bucket,
        path,
        token,
    })
    .into_response())
}
