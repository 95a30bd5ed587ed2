use std::time::Duration;

use tracing::error;

use collector_application::commands::poll_once;
use collector_application::AppState;

/// Poll forever at the configured cadence. A failed cycle is logged and the
/// loop keeps going; the next attempt happens one interval later.
pub async fn schedule_polls(state: AppState) {
    let interval = Duration::from_secs(state.config.poll_interval_seconds.max(1));
    loop {
        if let Err(err) = poll_once(&state).await {
            error!("poll cycle failed: {}", err);
        }
        tokio::time::sleep(interval).await;
    }
}
