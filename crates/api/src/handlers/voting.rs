//! Public voter-facing actions.

use std::collections::HashMap;

use axum::response::{IntoResponse, Response};
use axum::Json;
use encore_core::activity::{self, ActivityKind, RECENT_ACTIVITY_LIMIT};
use encore_core::error::CoreError;
use encore_core::track::{Comment, Track, Voter, MAX_VOTES};
use encore_core::types::DbId;
use encore_db::repositories::{CommentRepo, FavoriteRepo, TrackRepo, VoteRepo, VoterRepo};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::response::{
    ActivitiesResponse, CommentResponse, ToggleResponse, TracksResponse, VoterResponse,
};
use crate::state::AppState;

fn parse_voter_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest("Bad voterId".to_string()))
}

/// `getTracks` — all tracks with derived counts and grouped comments.
///
/// Counts come straight from the join tables on every call, so the
/// response always equals the number of rows referencing each track.
pub async fn get_tracks(state: &AppState) -> AppResult<Response> {
    let rows = TrackRepo::list_with_counts(&state.pool).await?;
    let comments = CommentRepo::list_with_voter(&state.pool).await?;

    // Comments arrive newest-first; grouping preserves that order.
    let mut by_track: HashMap<DbId, Vec<Comment>> = HashMap::new();
    for comment in comments {
        by_track
            .entry(comment.track_id)
            .or_default()
            .push(comment.into_wire());
    }

    let tracks: Vec<Track> = rows
        .into_iter()
        .map(|row| Track {
            comments: by_track.remove(&row.id).unwrap_or_default(),
            id: row.id,
            title: row.title,
            duration: row.duration,
            is_bonus: row.is_bonus,
            edition: row.edition,
            emotional_tag: row.emotional_tag,
            votes: row.votes,
            favorites: row.favorites,
            cover_image: row.cover_image,
            audio_url: row.audio_url,
        })
        .collect();

    Ok(Json(TracksResponse { tracks }).into_response())
}

/// `registerVoter` — create a fresh voter with empty vote/favorite sets.
pub async fn register_voter(state: &AppState, name: &str) -> AppResult<Response> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Missing name".to_string(),
        )));
    }

    let row = VoterRepo::create(&state.pool, name).await?;
    tracing::info!(voter_id = %row.id, "Voter registered");

    Ok(Json(VoterResponse {
        voter: Voter {
            id: row.id.to_string(),
            name: row.name,
            voted_tracks: Vec::new(),
            favorite_tracks: Vec::new(),
        },
    })
    .into_response())
}

/// `vote` — toggle a (voter, track) vote row.
///
/// Enforcement of the six-vote limit lives here, not in the client: a
/// seventh add is rejected with the `VOTE_LIMIT` code before touching
/// the table. The count check races under concurrent adds; the unique
/// constraint is what actually prevents duplicate rows.
pub async fn vote(
    state: &AppState,
    voter_id: &str,
    track_id: DbId,
    is_voting: bool,
) -> AppResult<Response> {
    let voter_id = parse_voter_id(voter_id)?;

    let action = if is_voting {
        let held = VoteRepo::count_for_voter(&state.pool, voter_id).await?;
        if held >= MAX_VOTES as i64 {
            tracing::debug!(%voter_id, held, "Vote rejected: limit reached");
            return Err(AppError::Core(CoreError::VoteLimit));
        }
        VoteRepo::add(&state.pool, voter_id, track_id).await?;
        "added"
    } else {
        VoteRepo::remove(&state.pool, voter_id, track_id).await?;
        "removed"
    };

    Ok(Json(ToggleResponse {
        success: true,
        action,
    })
    .into_response())
}

/// `favorite` — toggle a (voter, track) favorite row. No cardinality
/// limit.
pub async fn favorite(
    state: &AppState,
    voter_id: &str,
    track_id: DbId,
    is_favoriting: bool,
) -> AppResult<Response> {
    let voter_id = parse_voter_id(voter_id)?;

    let action = if is_favoriting {
        FavoriteRepo::add(&state.pool, voter_id, track_id).await?;
        "added"
    } else {
        FavoriteRepo::remove(&state.pool, voter_id, track_id).await?;
        "removed"
    };

    Ok(Json(ToggleResponse {
        success: true,
        action,
    })
    .into_response())
}

/// `addComment` — append an immutable comment at an audio offset.
pub async fn add_comment(
    state: &AppState,
    voter_id: &str,
    track_id: DbId,
    text: &str,
    timestamp: i32,
) -> AppResult<Response> {
    let voter_id = parse_voter_id(voter_id)?;
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Missing text".to_string(),
        )));
    }

    let row = CommentRepo::create(&state.pool, voter_id, track_id, text, timestamp.max(0)).await?;

    Ok(Json(CommentResponse {
        comment: row.into_wire(),
    })
    .into_response())
}

/// `getRecentActivity` — merge recent votes, favorites, and comments
/// into one feed, newest first, capped at [`RECENT_ACTIVITY_LIMIT`].
pub async fn recent_activity(state: &AppState) -> AppResult<Response> {
    let limit = RECENT_ACTIVITY_LIMIT as i64;
    let votes = VoteRepo::recent(&state.pool, limit).await?;
    let favorites = FavoriteRepo::recent(&state.pool, limit).await?;
    let comments = CommentRepo::recent(&state.pool, limit).await?;

    let merged: Vec<_> = votes
        .into_iter()
        .map(|r| r.into_activity(ActivityKind::Vote))
        .chain(
            favorites
                .into_iter()
                .map(|r| r.into_activity(ActivityKind::Favorite)),
        )
        .chain(
            comments
                .into_iter()
                .map(|r| r.into_activity(ActivityKind::Comment)),
        )
        .collect();

    let activities = activity::sort_and_cap(merged, RECENT_ACTIVITY_LIMIT);
    Ok(Json(ActivitiesResponse { activities }).into_response())
}
