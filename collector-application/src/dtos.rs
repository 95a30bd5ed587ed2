// DTOs for the ops surface

use collector_domain::utils::{format_rfc3339_millis, millis_to_utc};
use collector_domain::PollStatus;
use serde::Serialize;

/// Poll status with RFC3339 renderings next to the raw millis. A zero
/// millis field means "never", rendered as null rather than the epoch.
#[derive(Debug, Serialize)]
pub struct PollStatusView {
    pub last_poll: i64,
    pub last_poll_rfc3339: Option<String>,
    pub last_success: i64,
    pub last_success_rfc3339: Option<String>,
    pub devices_seen: u32,
    pub readings_written: u64,
    pub consecutive_failures: u32,
}

impl From<PollStatus> for PollStatusView {
    fn from(status: PollStatus) -> Self {
        Self {
            last_poll: status.last_poll,
            last_poll_rfc3339: render_millis(status.last_poll),
            last_success: status.last_success,
            last_success_rfc3339: render_millis(status.last_success),
            devices_seen: status.devices_seen,
            readings_written: status.readings_written,
            consecutive_failures: status.consecutive_failures,
        }
    }
}

fn render_millis(millis: i64) -> Option<String> {
    if millis == 0 {
        return None;
    }
    millis_to_utc(millis)
        .ok()
        .map(|timestamp| format_rfc3339_millis(&timestamp))
}
