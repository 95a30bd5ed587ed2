// Poll status entity

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PollStatus {
    pub last_poll: i64,
    pub last_success: i64,
    pub devices_seen: u32,
    pub readings_written: u64,
    pub consecutive_failures: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PollOutcome {
    pub devices_seen: u32,
    pub readings_written: u32,
    pub devices_skipped: u32,
}
