// Validated runtime settings handed down from the config layer

use serde::{Deserialize, Serialize};

use crate::value_objects::TemperatureUnit;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub govee_base_url: String,
    pub govee_api_key: String,
    pub measurement: String,
    pub temperature_unit: TemperatureUnit,
    pub poll_interval_seconds: u64,
    pub request_timeout_seconds: u64,
    pub recent_readings_capacity: usize,
}

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub influx_url: String,
    pub influx_org: String,
    pub influx_bucket: String,
    pub influx_token: String,
}
