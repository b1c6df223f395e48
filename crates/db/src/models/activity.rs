use encore_core::activity::{Activity, ActivityKind};
use encore_core::types::Timestamp;
use sqlx::FromRow;

/// A recent vote, favorite, or comment row joined with display names.
///
/// Only display-safe fields are selected; voter and track ids stay in
/// the database.
#[derive(Debug, Clone, FromRow)]
pub struct ActivityRow {
    pub voter_name: String,
    pub track_title: String,
    /// Comment text; `None` for vote and favorite rows.
    pub text: Option<String>,
    pub created_at: Timestamp,
}

impl ActivityRow {
    pub fn into_activity(self, kind: ActivityKind) -> Activity {
        Activity {
            kind,
            voter_name: self.voter_name,
            track_title: self.track_title,
            text: self.text,
            timestamp: self.created_at,
        }
    }
}
