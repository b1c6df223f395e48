use crate::track::MAX_VOTES;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A voter attempted to hold more than [`MAX_VOTES`] votes.
    #[error("Maximum of {MAX_VOTES} votes reached")]
    VoteLimit,

    #[error("Internal error: {0}")]
    Internal(String),
}
