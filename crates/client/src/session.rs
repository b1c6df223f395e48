//! Periodic backend refresh.
//!
//! Reconciliation is poll-based: every [`REFRESH_INTERVAL`] the session
//! refreshes tracks and the activity feed unconditionally, whether or
//! not anything changed locally. Overlap with an in-flight user action
//! is accepted; the next tick overwrites any staleness. Runs until the
//! cancellation token fires.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::controller::Controller;
use crate::gateway::VotingGateway;

/// How often the session re-pulls backend state.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(10);

/// Run the refresh loop until `cancel` is triggered.
///
/// The first tick fires immediately, doubling as the initial load.
pub async fn run<G>(controller: Arc<Mutex<Controller<G>>>, cancel: CancellationToken)
where
    G: VotingGateway,
{
    tracing::info!(
        interval_secs = REFRESH_INTERVAL.as_secs(),
        "Refresh loop started"
    );

    let mut interval = tokio::time::interval(REFRESH_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Refresh loop stopping");
                break;
            }
            _ = interval.tick() => {
                let mut controller = controller.lock().await;
                controller.refresh().await;
                tracing::debug!(
                    tracks = controller.model.tracks.len(),
                    activities = controller.model.activities.len(),
                    "Refreshed from backend"
                );
            }
        }
    }
}
