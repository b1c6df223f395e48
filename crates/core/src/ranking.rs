//! Vote ranking.
//!
//! Rank is recomputed from the current in-memory vote counts on every
//! call, never cached, so it always reflects the latest reconciliation.

use crate::track::Track;
use crate::types::DbId;

/// Track ids ordered by descending vote count.
///
/// The sort is stable, so tracks with equal vote counts keep their
/// original list position.
pub fn rank_order(tracks: &[Track]) -> Vec<DbId> {
    let mut sorted: Vec<&Track> = tracks.iter().collect();
    sorted.sort_by_key(|t| std::cmp::Reverse(t.votes));
    sorted.into_iter().map(|t| t.id).collect()
}

/// 1-based rank of a track, or `None` for an unknown id.
pub fn rank_of(tracks: &[Track], track_id: DbId) -> Option<usize> {
    rank_order(tracks)
        .iter()
        .position(|&id| id == track_id)
        .map(|i| i + 1)
}
