use serde::Serialize;
use sqlx::FromRow;

/// Site-wide totals for the admin dashboard, counted live from the
/// underlying tables.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteStats {
    pub votes: i64,
    pub favorites: i64,
    pub comments: i64,
    pub voters: i64,
}
