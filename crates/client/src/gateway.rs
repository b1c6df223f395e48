//! Gateway to the backend action endpoint.
//!
//! Every request is a POST of `{action, ...}` to `{base}/api`. The app
//! must keep working with no backend at all, so each method absorbs
//! network errors, non-2xx responses, and malformed bodies into a local
//! fallback instead of surfacing them. The single exception is the
//! vote-limit rejection, which callers need in order to roll back an
//! optimistic vote.

use std::future::Future;

use chrono::Utc;
use encore_core::activity::Activity;
use encore_core::track::{Comment, Track, Voter};
use encore_core::types::DbId;
use serde::Deserialize;
use serde_json::json;

use crate::seed;

/// Outcome of a vote or favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

impl ToggleOutcome {
    /// The outcome the caller's intent implies, used when the backend
    /// could not confirm either way.
    fn implied(adding: bool) -> Self {
        if adding {
            Self::Added
        } else {
            Self::Removed
        }
    }
}

/// The only gateway failure that reaches the caller. Everything else is
/// absorbed by a local fallback.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The backend rejected an add because the voter already holds the
    /// maximum number of votes.
    #[error("Maximum of {} votes reached", encore_core::track::MAX_VOTES)]
    VoteLimit,
}

/// Data access seam between the controller and the backend.
///
/// Implementations never fail outright: when the backend is gone they
/// answer from local fallbacks, except for the vote limit above.
pub trait VotingGateway: Send + Sync {
    /// All tracks with derived counts and comments, or the built-in
    /// seed list when the backend is unreachable.
    fn fetch_tracks(&self) -> impl Future<Output = Vec<Track>> + Send;

    /// Register a voter, or synthesize a `local-` prefixed one.
    fn register_voter(&self, name: &str) -> impl Future<Output = Voter> + Send;

    /// Toggle a vote. `is_voting` is the intent: true adds, false removes.
    fn toggle_vote(
        &self,
        voter_id: &str,
        track_id: DbId,
        is_voting: bool,
    ) -> impl Future<Output = Result<ToggleOutcome, GatewayError>> + Send;

    /// Toggle a favorite. No cardinality limit applies.
    fn toggle_favorite(
        &self,
        voter_id: &str,
        track_id: DbId,
        is_favoriting: bool,
    ) -> impl Future<Output = Result<ToggleOutcome, GatewayError>> + Send;

    /// Store a comment at `timestamp` seconds into the track, or
    /// fabricate a local one attributed to "You".
    fn add_comment(
        &self,
        voter_id: &str,
        track_id: DbId,
        text: &str,
        timestamp: i32,
    ) -> impl Future<Output = Comment> + Send;

    /// The recent activity feed, or empty when the backend is gone.
    fn fetch_recent_activity(&self) -> impl Future<Output = Vec<Activity>> + Send;
}

#[derive(Debug, Deserialize)]
struct TracksBody {
    tracks: Vec<Track>,
}

#[derive(Debug, Deserialize)]
struct VoterBody {
    voter: Voter,
}

#[derive(Debug, Deserialize)]
struct CommentBody {
    comment: Comment,
}

#[derive(Debug, Deserialize)]
struct ActivitiesBody {
    activities: Vec<Activity>,
}

/// [`VotingGateway`] backed by the real backend over HTTP.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// * `base_url` - e.g. `http://localhost:3000`; a trailing `/` is
    ///   tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// POST the action body, returning the status and parsed JSON, or
    /// `None` when the request or parse failed entirely.
    async fn post(&self, body: serde_json::Value) -> Option<(reqwest::StatusCode, serde_json::Value)> {
        let url = format!("{}/api", self.base_url);
        let response = match self.client.post(&url).json(&body).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "Backend unreachable, using local fallback");
                return None;
            }
        };
        let status = response.status();
        match response.json::<serde_json::Value>().await {
            Ok(value) => Some((status, value)),
            Err(e) => {
                tracing::warn!(error = %e, "Malformed backend response");
                None
            }
        }
    }

    async fn toggle(
        &self,
        body: serde_json::Value,
        adding: bool,
    ) -> Result<ToggleOutcome, GatewayError> {
        match self.post(body).await {
            Some((status, value)) if status.is_success() => {
                match value.get("action").and_then(|a| a.as_str()) {
                    Some("removed") => Ok(ToggleOutcome::Removed),
                    Some(_) => Ok(ToggleOutcome::Added),
                    None => Ok(ToggleOutcome::implied(adding)),
                }
            }
            Some((_, value))
                if value.get("code").and_then(|c| c.as_str()) == Some("VOTE_LIMIT") =>
            {
                Err(GatewayError::VoteLimit)
            }
            // Network failure, malformed body, or any other error: the
            // toggle is presumed to have gone the way the caller intended.
            _ => Ok(ToggleOutcome::implied(adding)),
        }
    }
}

impl VotingGateway for HttpGateway {
    async fn fetch_tracks(&self) -> Vec<Track> {
        match self.post(json!({"action": "getTracks"})).await {
            Some((status, value)) if status.is_success() => {
                match serde_json::from_value::<TracksBody>(value) {
                    Ok(body) => body.tracks,
                    Err(_) => seed::seed_tracks(),
                }
            }
            _ => seed::seed_tracks(),
        }
    }

    async fn register_voter(&self, name: &str) -> Voter {
        match self
            .post(json!({"action": "registerVoter", "name": name}))
            .await
        {
            Some((status, value)) if status.is_success() => {
                match serde_json::from_value::<VoterBody>(value) {
                    Ok(body) => body.voter,
                    Err(_) => local_voter(name),
                }
            }
            _ => local_voter(name),
        }
    }

    async fn toggle_vote(
        &self,
        voter_id: &str,
        track_id: DbId,
        is_voting: bool,
    ) -> Result<ToggleOutcome, GatewayError> {
        self.toggle(
            json!({
                "action": "vote",
                "voterId": voter_id,
                "trackId": track_id,
                "isVoting": is_voting,
            }),
            is_voting,
        )
        .await
    }

    async fn toggle_favorite(
        &self,
        voter_id: &str,
        track_id: DbId,
        is_favoriting: bool,
    ) -> Result<ToggleOutcome, GatewayError> {
        self.toggle(
            json!({
                "action": "favorite",
                "voterId": voter_id,
                "trackId": track_id,
                "isFavoriting": is_favoriting,
            }),
            is_favoriting,
        )
        .await
    }

    async fn add_comment(
        &self,
        voter_id: &str,
        track_id: DbId,
        text: &str,
        timestamp: i32,
    ) -> Comment {
        let body = json!({
            "action": "addComment",
            "voterId": voter_id,
            "trackId": track_id,
            "text": text,
            "timestamp": timestamp,
        });
        match self.post(body).await {
            Some((status, value)) if status.is_success() => {
                match serde_json::from_value::<CommentBody>(value) {
                    Ok(body) => body.comment,
                    Err(_) => local_comment(text, timestamp),
                }
            }
            _ => local_comment(text, timestamp),
        }
    }

    async fn fetch_recent_activity(&self) -> Vec<Activity> {
        match self.post(json!({"action": "getRecentActivity"})).await {
            Some((status, value)) if status.is_success() => {
                serde_json::from_value::<ActivitiesBody>(value)
                    .map(|body| body.activities)
                    .unwrap_or_default()
            }
            _ => Vec::new(),
        }
    }
}

/// A voter that exists only in this session. The `local-` prefix keeps
/// the id from ever parsing as a backend UUID.
fn local_voter(name: &str) -> Voter {
    Voter {
        id: format!("local-{}", Utc::now().timestamp_millis()),
        name: name.to_string(),
        voted_tracks: Vec::new(),
        favorite_tracks: Vec::new(),
    }
}

/// A comment that was never stored. Attributed to "You" since no voter
/// row backs it.
fn local_comment(text: &str, timestamp: i32) -> Comment {
    Comment {
        id: format!("local-{}", Utc::now().timestamp_millis()),
        voter_name: "You".to_string(),
        text: text.to_string(),
        timestamp,
        created_at: Utc::now(),
    }
}
