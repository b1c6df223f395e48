use encore_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use uuid::Uuid;

/// A comment row joined with its author's display name.
///
/// `voter_name` is denormalized at read time from the `voters` table;
/// the comment row itself only stores the voter id.
#[derive(Debug, Clone, FromRow)]
pub struct CommentWithVoter {
    pub id: Uuid,
    pub track_id: DbId,
    pub voter_name: String,
    pub text: String,
    /// Seconds into the track audio.
    pub timestamp_secs: i32,
    pub created_at: Timestamp,
}

impl CommentWithVoter {
    /// Convert to the client-facing wire shape.
    pub fn into_wire(self) -> encore_core::track::Comment {
        encore_core::track::Comment {
            id: self.id.to_string(),
            voter_name: self.voter_name,
            text: self.text,
            timestamp: self.timestamp_secs,
            created_at: self.created_at,
        }
    }
}
