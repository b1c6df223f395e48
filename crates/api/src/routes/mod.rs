//! Route tree for the server.
//!
//! The whole public surface is two routes: a health check and the
//! single-POST action dispatcher.

pub mod health;

use axum::routing::post;
use axum::Router;

use crate::handlers::dispatch;
use crate::state::AppState;

/// Build the `/api` route: one POST endpoint dispatching on `action`.
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/", post(dispatch::dispatch))
}
