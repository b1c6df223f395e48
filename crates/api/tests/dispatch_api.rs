//! Integration tests for the public voter actions: the action envelope,
//! registration, vote/favorite toggles with the six-vote limit, comments,
//! and the activity feed.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, post_action, TEST_ADMIN_PASSWORD};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a track through the admin action, returning its id.
async fn create_track(app: &Router, title: &str) -> i64 {
    let response = post_action(
        app.clone(),
        json!({
            "action": "adminCreateTrack",
            "password": TEST_ADMIN_PASSWORD,
            "track": {"title": title, "duration": "3:21"},
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["track"]["id"].as_i64().unwrap()
}

/// Register a voter, returning its id.
async fn register_voter(app: &Router, name: &str) -> String {
    let response = post_action(
        app.clone(),
        json!({"action": "registerVoter", "name": name}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["voter"]["name"], name);
    assert_eq!(json["voter"]["votedTracks"], json!([]));
    assert_eq!(json["voter"]["favoriteTracks"], json!([]));
    json["voter"]["id"].as_str().unwrap().to_string()
}

async fn vote(app: &Router, voter_id: &str, track_id: i64, is_voting: bool) -> StatusCode {
    post_action(
        app.clone(),
        json!({
            "action": "vote",
            "voterId": voter_id,
            "trackId": track_id,
            "isVoting": is_voting,
        }),
    )
    .await
    .status()
}

async fn get_tracks(app: &Router) -> serde_json::Value {
    let response = post_action(app.clone(), json!({"action": "getTracks"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["tracks"].clone()
}

fn track_by_id(tracks: &serde_json::Value, id: i64) -> serde_json::Value {
    tracks
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["id"].as_i64() == Some(id))
        .cloned()
        .unwrap_or_else(|| panic!("track {id} missing"))
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_action_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_action(app, json!({"name": "Mia"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("Missing action"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_action_returns_400_with_name(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_action(app, json!({"action": "teleport"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("Unknown action: teleport"));
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn register_voter_rejects_blank_name(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_action(app, json!({"action": "registerVoter", "name": "   "})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_voter_trims_name(pool: PgPool) {
    let app = common::build_test_app(pool);
    let voter_id = register_voter(&app, "Mia").await;
    assert!(!voter_id.is_empty());
}

// ---------------------------------------------------------------------------
// Voting
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn seventh_vote_is_rejected_with_typed_code(pool: PgPool) {
    let app = common::build_test_app(pool);
    let voter_id = register_voter(&app, "Mia").await;

    let mut track_ids = Vec::new();
    for i in 1..=7 {
        track_ids.push(create_track(&app, &format!("Track {i}")).await);
    }

    // Six votes succeed.
    for &id in &track_ids[..6] {
        assert_eq!(vote(&app, &voter_id, id, true).await, StatusCode::OK);
    }

    // The seventh is rejected before touching the table.
    let response = post_action(
        app.clone(),
        json!({
            "action": "vote",
            "voterId": voter_id,
            "trackId": track_ids[6],
            "isVoting": true,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VOTE_LIMIT");

    // Track 7's count is unchanged and the voter still holds six votes.
    let tracks = get_tracks(&app).await;
    assert_eq!(track_by_id(&tracks, track_ids[6])["votes"], 0);
    let total: i64 = tracks
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["votes"].as_i64().unwrap())
        .sum();
    assert_eq!(total, 6);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn double_toggle_restores_vote_count(pool: PgPool) {
    let app = common::build_test_app(pool);
    let voter_id = register_voter(&app, "Mia").await;
    let track_id = create_track(&app, "Track").await;

    assert_eq!(vote(&app, &voter_id, track_id, true).await, StatusCode::OK);
    let tracks = get_tracks(&app).await;
    assert_eq!(track_by_id(&tracks, track_id)["votes"], 1);

    assert_eq!(vote(&app, &voter_id, track_id, false).await, StatusCode::OK);
    let tracks = get_tracks(&app).await;
    assert_eq!(track_by_id(&tracks, track_id)["votes"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_vote_add_is_a_conflict(pool: PgPool) {
    let app = common::build_test_app(pool);
    let voter_id = register_voter(&app, "Mia").await;
    let track_id = create_track(&app, "Track").await;

    assert_eq!(vote(&app, &voter_id, track_id, true).await, StatusCode::OK);
    // The unique (voter, track) constraint, not the count check, stops
    // the duplicate row.
    assert_eq!(
        vote(&app, &voter_id, track_id, true).await,
        StatusCode::CONFLICT
    );

    let tracks = get_tracks(&app).await;
    assert_eq!(track_by_id(&tracks, track_id)["votes"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_voter_id_is_bad_input(pool: PgPool) {
    let app = common::build_test_app(pool);
    let track_id = create_track(&app, "Track").await;

    // Locally synthesized ids never reach the backend in normal flow.
    assert_eq!(
        vote(&app, "local-1700000000", track_id, true).await,
        StatusCode::BAD_REQUEST
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_voter_is_bad_input(pool: PgPool) {
    let app = common::build_test_app(pool);
    let track_id = create_track(&app, "Track").await;

    let response = post_action(
        app.clone(),
        json!({
            "action": "vote",
            "voterId": "00000000-0000-0000-0000-000000000000",
            "trackId": track_id,
            "isVoting": true,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("Unknown voter"));
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn favorites_have_no_cardinality_limit(pool: PgPool) {
    let app = common::build_test_app(pool);
    let voter_id = register_voter(&app, "Mia").await;

    let mut track_ids = Vec::new();
    for i in 1..=8 {
        track_ids.push(create_track(&app, &format!("Track {i}")).await);
    }

    for &id in &track_ids {
        let response = post_action(
            app.clone(),
            json!({
                "action": "favorite",
                "voterId": voter_id,
                "trackId": id,
                "isFavoriting": true,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["action"], "added");
    }

    let tracks = get_tracks(&app).await;
    assert!(tracks
        .as_array()
        .unwrap()
        .iter()
        .all(|t| t["favorites"] == 1));
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn comment_carries_audio_offset_and_feeds_activity(pool: PgPool) {
    let app = common::build_test_app(pool);
    let voter_id = register_voter(&app, "Mia").await;
    let track_id = create_track(&app, "Track 3").await;

    let response = post_action(
        app.clone(),
        json!({
            "action": "addComment",
            "voterId": voter_id,
            "trackId": track_id,
            "text": "love the bridge",
            "timestamp": 42,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["comment"]["voterName"], "Mia");
    assert_eq!(json["comment"]["text"], "love the bridge");
    assert_eq!(json["comment"]["timestamp"], 42);
    assert!(json["comment"]["id"].is_string());

    // The comment shows up on the track, newest first.
    let tracks = get_tracks(&app).await;
    let track = track_by_id(&tracks, track_id);
    assert_eq!(track["comments"][0]["text"], "love the bridge");
    assert_eq!(track["comments"][0]["timestamp"], 42);

    // And in the activity feed, typed as a comment.
    let response = post_action(app.clone(), json!({"action": "getRecentActivity"})).await;
    let activities = body_json(response).await["activities"].clone();
    let entry = activities
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["type"] == "comment")
        .expect("comment activity present");
    assert_eq!(entry["voterName"], "Mia");
    assert_eq!(entry["trackTitle"], "Track 3");
    assert_eq!(entry["text"], "love the bridge");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_comment_text_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let voter_id = register_voter(&app, "Mia").await;
    let track_id = create_track(&app, "Track").await;

    let response = post_action(
        app,
        json!({
            "action": "addComment",
            "voterId": voter_id,
            "trackId": track_id,
            "text": "  ",
            "timestamp": 0,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Activity feed
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn activity_feed_is_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);
    let voter_id = register_voter(&app, "Mia").await;
    let track_a = create_track(&app, "A").await;
    let track_b = create_track(&app, "B").await;

    vote(&app, &voter_id, track_a, true).await;
    vote(&app, &voter_id, track_b, true).await;

    let response = post_action(app.clone(), json!({"action": "getRecentActivity"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let activities = body_json(response).await["activities"].clone();
    let entries = activities.as_array().unwrap();

    assert_eq!(entries.len(), 2);
    let timestamps: Vec<&str> = entries
        .iter()
        .map(|a| a["timestamp"].as_str().unwrap())
        .collect();
    let mut sorted = timestamps.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(timestamps, sorted, "feed must be newest first");
}
