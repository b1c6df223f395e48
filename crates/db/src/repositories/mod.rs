//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod comment_repo;
pub mod favorite_repo;
pub mod site_content_repo;
pub mod stats_repo;
pub mod track_repo;
pub mod vote_repo;
pub mod voter_repo;

pub use comment_repo::CommentRepo;
pub use favorite_repo::FavoriteRepo;
pub use site_content_repo::SiteContentRepo;
pub use stats_repo::StatsRepo;
pub use track_repo::TrackRepo;
pub use vote_repo::VoteRepo;
pub use voter_repo::VoterRepo;
