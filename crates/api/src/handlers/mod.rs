//! Request handling for the action dispatcher.
//!
//! `dispatch` owns the `{action, ...}` envelope; `voting` implements the
//! public actions and `admin` the password-gated ones. Handlers delegate
//! to the repositories in `encore_db` and map errors via
//! [`crate::error::AppError`].

pub mod admin;
pub mod dispatch;
pub mod voting;
