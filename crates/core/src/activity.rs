//! The derived activity feed.
//!
//! Activities are a non-persisted view merging recent votes, favorites,
//! and comments, sorted newest first and capped. The backend serves up
//! to [`RECENT_ACTIVITY_LIMIT`] entries; the client keeps a shorter
//! rolling feed of [`FEED_CAP`] entries.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Maximum entries returned by the `getRecentActivity` action.
pub const RECENT_ACTIVITY_LIMIT: usize = 30;

/// Maximum entries held in the client-side feed.
pub const FEED_CAP: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Vote,
    Favorite,
    Comment,
}

/// A single feed entry. Only display-safe fields are carried.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub voter_name: String,
    pub track_title: String,
    /// Comment text; absent for vote and favorite entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Wall-clock time of the underlying row.
    pub timestamp: Timestamp,
}

/// Sort strictly newest first and truncate to `cap`.
pub fn sort_and_cap(mut activities: Vec<Activity>, cap: usize) -> Vec<Activity> {
    activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    activities.truncate(cap);
    activities
}

/// Prepend `entry` to the feed, dropping the oldest entries beyond `cap`.
pub fn push_front_capped(feed: &mut Vec<Activity>, entry: Activity, cap: usize) {
    feed.insert(0, entry);
    feed.truncate(cap);
}
