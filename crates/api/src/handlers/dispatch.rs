//! The single-endpoint action dispatcher.
//!
//! Every request is a POST with a JSON body `{action: string, ...fields}`.
//! The body deserializes into [`ApiRequest`], an internally tagged enum,
//! so field parsing and the action switch live in one place. Admin
//! variants carry a `password` field checked before any data access.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use encore_core::types::DbId;
use encore_db::models::site_content::{CreateSiteContent, UpdateSiteContent};
use encore_db::models::track::{CreateTrack, UpdateTrack};
use serde::Deserialize;

use crate::auth::require_admin;
use crate::error::{AppError, AppResult};
use crate::response::SuccessResponse;
use crate::state::AppState;

use super::{admin, voting};

/// One variant per wire action. Variant names serialize camelCase to
/// match the `action` strings; fields are camelCase as well.
#[derive(Debug, Deserialize)]
#[serde(
    tag = "action",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum ApiRequest {
    // --- Public actions (voters) ---
    GetTracks,
    RegisterVoter {
        name: String,
    },
    Vote {
        voter_id: String,
        track_id: DbId,
        is_voting: bool,
    },
    Favorite {
        voter_id: String,
        track_id: DbId,
        is_favoriting: bool,
    },
    AddComment {
        voter_id: String,
        track_id: DbId,
        text: String,
        #[serde(default)]
        timestamp: i32,
    },
    GetRecentActivity,

    // --- Admin actions ---
    AdminLogin {
        password: Option<String>,
    },
    AdminGetTracks {
        password: Option<String>,
    },
    AdminCreateTrack {
        password: Option<String>,
        track: CreateTrack,
    },
    AdminUpdateTrack {
        password: Option<String>,
        track_id: DbId,
        updates: UpdateTrack,
    },
    AdminDeleteTrack {
        password: Option<String>,
        track_id: DbId,
    },
    AdminGetStats {
        password: Option<String>,
    },
    AdminGetSiteContent {
        password: Option<String>,
    },
    AdminCreateSiteContent {
        password: Option<String>,
        item: CreateSiteContent,
    },
    AdminUpdateSiteContent {
        password: Option<String>,
        id: DbId,
        updates: UpdateSiteContent,
    },
    AdminDeleteSiteContent {
        password: Option<String>,
        id: DbId,
    },
    AdminCreateSignedUpload {
        password: Option<String>,
        bucket: String,
        #[serde(default)]
        folder: String,
        file_name: String,
        content_type: Option<String>,
    },
}

/// POST /api — parse the envelope and route to the matching handler.
pub async fn dispatch(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<Response> {
    let action = match body.get("action").and_then(|a| a.as_str()) {
        Some(a) => a.to_string(),
        None => return Err(AppError::BadRequest("Missing action".to_string())),
    };

    let request: ApiRequest = serde_json::from_value(body).map_err(|e| {
        let msg = e.to_string();
        if msg.contains("unknown variant") {
            AppError::BadRequest(format!("Unknown action: {action}"))
        } else {
            AppError::BadRequest(format!("Bad input: {msg}"))
        }
    })?;

    tracing::debug!(%action, "Dispatching action");

    match request {
        ApiRequest::GetTracks => voting::get_tracks(&state).await,
        ApiRequest::RegisterVoter { name } => voting::register_voter(&state, &name).await,
        ApiRequest::Vote {
            voter_id,
            track_id,
            is_voting,
        } => voting::vote(&state, &voter_id, track_id, is_voting).await,
        ApiRequest::Favorite {
            voter_id,
            track_id,
            is_favoriting,
        } => voting::favorite(&state, &voter_id, track_id, is_favoriting).await,
        ApiRequest::AddComment {
            voter_id,
            track_id,
            text,
            timestamp,
        } => voting::add_comment(&state, &voter_id, track_id, &text, timestamp).await,
        ApiRequest::GetRecentActivity => voting::recent_activity(&state).await,

        ApiRequest::AdminLogin { password } => {
            require_admin(&state.config, password.as_deref())?;
            Ok(Json(SuccessResponse { success: true }).into_response())
        }
        ApiRequest::AdminGetTracks { password } => {
            require_admin(&state.config, password.as_deref())?;
            admin::get_tracks(&state).await
        }
        ApiRequest::AdminCreateTrack { password, track } => {
            require_admin(&state.config, password.as_deref())?;
            admin::create_track(&state, &track).await
        }
        ApiRequest::AdminUpdateTrack {
            password,
            track_id,
            updates,
        } => {
            require_admin(&state.config, password.as_deref())?;
            admin::update_track(&state, track_id, &updates).await
        }
        ApiRequest::AdminDeleteTrack { password, track_id } => {
            require_admin(&state.config, password.as_deref())?;
            admin::delete_track(&state, track_id).await
        }
        ApiRequest::AdminGetStats { password } => {
            require_admin(&state.config, password.as_deref())?;
            admin::get_stats(&state).await
        }
        ApiRequest::AdminGetSiteContent { password } => {
            require_admin(&state.config, password.as_deref())?;
            admin::get_site_content(&state).await
        }
        ApiRequest::AdminCreateSiteContent { password, item } => {
            require_admin(&state.config, password.as_deref())?;
            admin::create_site_content(&state, &item).await
        }
        ApiRequest::AdminUpdateSiteContent {
            password,
            id,
            updates,
        } => {
            require_admin(&state.config, password.as_deref())?;
            admin::update_site_content(&state, id, &updates).await
        }
        ApiRequest::AdminDeleteSiteContent { password, id } => {
            require_admin(&state.config, password.as_deref())?;
            admin::delete_site_content(&state, id).await
        }
        ApiRequest::AdminCreateSignedUpload {
            password,
            bucket,
            folder,
            file_name,
            content_type,
        } => {
            require_admin(&state.config, password.as_deref())?;
            admin::create_signed_upload(&state, bucket, &folder, &file_name, content_type).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_public_actions() {
        let request: ApiRequest = serde_json::from_value(json!({
            "action": "vote",
            "voterId": "abc",
            "trackId": 3,
            "isVoting": true,
        }))
        .unwrap();

        match request {
            ApiRequest::Vote {
                voter_id,
                track_id,
                is_voting,
            } => {
                assert_eq!(voter_id, "abc");
                assert_eq!(track_id, 3);
                assert!(is_voting);
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn comment_timestamp_defaults_to_zero() {
        let request: ApiRequest = serde_json::from_value(json!({
            "action": "addComment",
            "voterId": "abc",
            "trackId": 3,
            "text": "hi",
        }))
        .unwrap();

        match request {
            ApiRequest::AddComment { timestamp, .. } => assert_eq!(timestamp, 0),
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn admin_password_is_optional_at_parse_time() {
        // A missing password must reach require_admin (401), not fail
        // deserialization (400).
        let request: ApiRequest =
            serde_json::from_value(json!({"action": "adminGetStats"})).unwrap();
        assert!(matches!(
            request,
            ApiRequest::AdminGetStats { password: None }
        ));
    }

    #[test]
    fn unknown_action_fails_deserialization() {
        let err = serde_json::from_value::<ApiRequest>(json!({"action": "dropTables"}))
            .unwrap_err()
            .to_string();
        assert!(err.contains("unknown variant"));
    }
}
