//! In-memory app state and the interaction flows that mutate it.
//!
//! [`AppModel`] is a plain value with pure transition methods, so every
//! state change is unit-testable without a gateway. [`Controller`] wires
//! the model to a [`VotingGateway`]: it applies optimistic updates,
//! confirms them against the backend, and reconciles by full reload when
//! the backend disagrees.

use chrono::Utc;
use encore_core::activity::{push_front_capped, Activity, ActivityKind, FEED_CAP};
use encore_core::ranking;
use encore_core::track::{Comment, Track, TrackFilter, Voter};
use encore_core::types::DbId;

use crate::gateway::{GatewayError, ToggleOutcome, VotingGateway};

/// Everything the UI renders. Votes, favorites, and ranks are all
/// derived from this one value.
#[derive(Debug, Default)]
pub struct AppModel {
    pub voter: Option<Voter>,
    pub tracks: Vec<Track>,
    /// Rolling feed, newest first, at most [`FEED_CAP`] entries.
    pub activities: Vec<Activity>,
    pub filter: TrackFilter,
    /// One-shot message for the UI, e.g. the vote-limit warning.
    pub notice: Option<String>,
}

impl AppModel {
    pub fn track(&self, track_id: DbId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == track_id)
    }

    fn track_mut(&mut self, track_id: DbId) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.id == track_id)
    }

    /// Tracks passing the current filter, in list order.
    pub fn visible_tracks(&self) -> Vec<&Track> {
        self.tracks.iter().filter(|t| self.filter.matches(t)).collect()
    }

    /// 1-based rank of a track by vote count, ties keeping list order.
    pub fn rank_of(&self, track_id: DbId) -> Option<usize> {
        ranking::rank_of(&self.tracks, track_id)
    }

    /// Apply a vote toggle locally: flip the voter's membership and
    /// adjust the displayed count. Counts never go below zero.
    pub fn apply_vote(&mut self, track_id: DbId, adding: bool) {
        if let Some(voter) = &mut self.voter {
            if adding {
                if !voter.voted_tracks.contains(&track_id) {
                    voter.voted_tracks.push(track_id);
                }
            } else {
                voter.voted_tracks.retain(|&id| id != track_id);
            }
        }
        if let Some(track) = self.track_mut(track_id) {
            track.votes = if adding {
                track.votes + 1
            } else {
                (track.votes - 1).max(0)
            };
        }
    }

    /// Apply a favorite toggle locally, same shape as [`apply_vote`](Self::apply_vote).
    pub fn apply_favorite(&mut self, track_id: DbId, adding: bool) {
        if let Some(voter) = &mut self.voter {
            if adding {
                if !voter.favorite_tracks.contains(&track_id) {
                    voter.favorite_tracks.push(track_id);
                }
            } else {
                voter.favorite_tracks.retain(|&id| id != track_id);
            }
        }
        if let Some(track) = self.track_mut(track_id) {
            track.favorites = if adding {
                track.favorites + 1
            } else {
                (track.favorites - 1).max(0)
            };
        }
    }

    /// Insert a confirmed comment at the head of its track's list.
    pub fn insert_comment(&mut self, track_id: DbId, comment: Comment) {
        if let Some(track) = self.track_mut(track_id) {
            track.comments.insert(0, comment);
        }
    }

    /// Prepend a feed entry attributed to the current voter.
    pub fn push_activity(&mut self, kind: ActivityKind, track_id: DbId, text: Option<String>) {
        let voter_name = match &self.voter {
            Some(v) => v.name.clone(),
            None => return,
        };
        let track_title = match self.track(track_id) {
            Some(t) => t.title.clone(),
            None => return,
        };
        push_front_capped(
            &mut self.activities,
            Activity {
                kind,
                voter_name,
                track_title,
                text,
                timestamp: Utc::now(),
            },
            FEED_CAP,
        );
    }

    /// Take the pending notice, clearing it.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}

/// Drives the model against a gateway.
pub struct Controller<G: VotingGateway> {
    gateway: G,
    pub model: AppModel,
}

impl<G: VotingGateway> Controller<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            model: AppModel::default(),
        }
    }

    /// Initial load: tracks and the activity feed.
    pub async fn load(&mut self) {
        self.refresh().await;
    }

    /// Replace tracks and activities with the backend's current view.
    ///
    /// Also used as the rollback path: optimistic state that the backend
    /// rejected simply gets overwritten here.
    pub async fn refresh(&mut self) {
        self.model.tracks = self.gateway.fetch_tracks().await;
        self.model.activities = self.gateway.fetch_recent_activity().await;
    }

    /// Register the session's voter under `name`.
    pub async fn register(&mut self, name: &str) {
        let voter = self.gateway.register_voter(name).await;
        tracing::debug!(voter_id = %voter.id, "Voter registered");
        self.model.voter = Some(voter);
    }

    /// Toggle the current voter's vote on `track_id`.
    ///
    /// Adds go through a local advisory limit check first; the backend
    /// remains the authority and may still reject, in which case the
    /// optimistic change is rolled back by a full reload.
    pub async fn vote(&mut self, track_id: DbId) {
        let Some(voter) = &self.model.voter else {
            return;
        };
        let adding = !voter.has_voted(track_id);

        if adding && voter.votes_remaining() == 0 {
            self.model.notice = Some(vote_limit_notice());
            return;
        }

        self.model.apply_vote(track_id, adding);

        match self.gateway.toggle_vote(&voter_id(&self.model), track_id, adding).await {
            Ok(ToggleOutcome::Added) => {
                self.model.push_activity(ActivityKind::Vote, track_id, None);
            }
            Ok(ToggleOutcome::Removed) => {}
            Err(GatewayError::VoteLimit) => {
                tracing::warn!(track_id, "Vote rejected by backend, reloading");
                if let Some(voter) = &mut self.model.voter {
                    voter.voted_tracks.retain(|&id| id != track_id);
                }
                self.refresh().await;
                self.model.notice = Some(vote_limit_notice());
            }
        }
    }

    /// Toggle the current voter's favorite on `track_id`. No limit.
    pub async fn favorite(&mut self, track_id: DbId) {
        let Some(voter) = &self.model.voter else {
            return;
        };
        let adding = !voter.has_favorited(track_id);

        self.model.apply_favorite(track_id, adding);

        match self
            .gateway
            .toggle_favorite(&voter_id(&self.model), track_id, adding)
            .await
        {
            Ok(ToggleOutcome::Added) => {
                self.model.push_activity(ActivityKind::Favorite, track_id, None);
            }
            Ok(ToggleOutcome::Removed) | Err(_) => {}
        }
    }

    /// Add a comment at `timestamp` seconds into the track.
    ///
    /// Comments are never shown optimistically: the stored (or locally
    /// fabricated) comment comes back from the gateway before anything
    /// renders.
    pub async fn comment(&mut self, track_id: DbId, text: &str, timestamp: i32) {
        if self.model.voter.is_none() {
            return;
        }
        let comment = self
            .gateway
            .add_comment(&voter_id(&self.model), track_id, text, timestamp)
            .await;
        let text = Some(comment.text.clone());
        self.model.insert_comment(track_id, comment);
        self.model.push_activity(ActivityKind::Comment, track_id, text);
    }

    pub fn set_filter(&mut self, filter: TrackFilter) {
        self.model.filter = filter;
    }
}

fn voter_id(model: &AppModel) -> String {
    model
        .voter
        .as_ref()
        .map(|v| v.id.clone())
        .unwrap_or_default()
}

fn vote_limit_notice() -> String {
    format!(
        "Maximum of {} votes reached",
        encore_core::track::MAX_VOTES
    )
}
