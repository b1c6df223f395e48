//! Client-facing track, comment, and voter shapes.
//!
//! These are the wire DTOs exchanged over the `{action, ...}` endpoint;
//! all field names serialize as camelCase. Vote and favorite counts are
//! derived values recomputed from join-table rows on every fetch and
//! must never be stored.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// Maximum number of simultaneous votes a voter may hold.
pub const MAX_VOTES: usize = 6;

/// A candidate track with its derived counts and comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: DbId,
    pub title: String,
    /// Display duration as an mm:ss string (e.g. "3:42").
    pub duration: String,
    pub is_bonus: bool,
    pub edition: String,
    pub emotional_tag: String,
    /// Count of `votes` rows referencing this track.
    pub votes: i64,
    /// Count of `favorites` rows referencing this track.
    pub favorites: i64,
    /// Newest first.
    pub comments: Vec<Comment>,
    pub cover_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

/// A timestamped comment on a track. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    /// Display name of the author, denormalized at read time.
    pub voter_name: String,
    pub text: String,
    /// Seconds into the track audio, not wall-clock time.
    pub timestamp: i32,
    pub created_at: Timestamp,
}

/// A session participant. The id is an opaque token; locally synthesized
/// voters (offline fallback) use a `local-` prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voter {
    pub id: String,
    pub name: String,
    pub voted_tracks: Vec<DbId>,
    pub favorite_tracks: Vec<DbId>,
}

impl Voter {
    pub fn has_voted(&self, track_id: DbId) -> bool {
        self.voted_tracks.contains(&track_id)
    }

    pub fn has_favorited(&self, track_id: DbId) -> bool {
        self.favorite_tracks.contains(&track_id)
    }

    pub fn votes_remaining(&self) -> usize {
        MAX_VOTES.saturating_sub(self.voted_tracks.len())
    }
}

/// View-level partition of the track list. No backend involvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackFilter {
    #[default]
    All,
    Standard,
    Bonus,
}

impl TrackFilter {
    pub fn matches(self, track: &Track) -> bool {
        match self {
            TrackFilter::All => true,
            TrackFilter::Standard => !track.is_bonus,
            TrackFilter::Bonus => track.is_bonus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: DbId, is_bonus: bool) -> Track {
        Track {
            id,
            title: format!("Track {id}"),
            duration: "3:00".into(),
            is_bonus,
            edition: String::new(),
            emotional_tag: String::new(),
            votes: 0,
            favorites: 0,
            comments: Vec::new(),
            cover_image: String::new(),
            audio_url: None,
        }
    }

    #[test]
    fn filter_partitions_by_bonus_flag() {
        let tracks = vec![track(1, false), track(2, true), track(3, false)];

        let standard: Vec<_> = tracks
            .iter()
            .filter(|t| TrackFilter::Standard.matches(t))
            .map(|t| t.id)
            .collect();
        let bonus: Vec<_> = tracks
            .iter()
            .filter(|t| TrackFilter::Bonus.matches(t))
            .map(|t| t.id)
            .collect();
        let all: Vec<_> = tracks
            .iter()
            .filter(|t| TrackFilter::All.matches(t))
            .map(|t| t.id)
            .collect();

        assert_eq!(standard, vec![1, 3]);
        assert_eq!(bonus, vec![2]);
        assert_eq!(all, vec![1, 2, 3]);
    }

    #[test]
    fn votes_remaining_saturates_at_zero() {
        let voter = Voter {
            id: "v".into(),
            name: "Mia".into(),
            voted_tracks: vec![1, 2, 3, 4, 5, 6],
            favorite_tracks: Vec::new(),
        };
        assert_eq!(voter.votes_remaining(), 0);
    }

    #[test]
    fn track_serializes_camel_case() {
        let json = serde_json::to_value(track(7, true)).unwrap();
        assert_eq!(json["isBonus"], true);
        assert!(json.get("coverImage").is_some());
        // Absent audio URL is omitted entirely, not serialized as null.
        assert!(json.get("audioUrl").is_none());
    }
}
