//! Live site-wide totals for the admin dashboard.

use sqlx::PgPool;

use crate::models::stats::SiteStats;

pub struct StatsRepo;

impl StatsRepo {
    /// Count rows in each activity table. Counts are computed per call;
    /// nothing is cached or denormalized.
    pub async fn site_totals(pool: &PgPool) -> Result<SiteStats, sqlx::Error> {
        sqlx::query_as::<_, SiteStats>(
            "SELECT \
                (SELECT COUNT(*) FROM votes) AS votes, \
                (SELECT COUNT(*) FROM favorites) AS favorites, \
                (SELECT COUNT(*) FROM comments) AS comments, \
                (SELECT COUNT(*) FROM voters) AS voters",
        )
        .fetch_one(pool)
        .await
    }
}
