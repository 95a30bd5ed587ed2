// Reading entities
// Raw vendor samples and the normalized points written to the store

use serde::{Deserialize, Serialize};

use crate::value_objects::DeviceId;

/// Field values as reported by the vendor state endpoint, before any
/// sanity checking. Either field may be absent when the device did not
/// report that capability.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDeviceState {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
}

/// A normalized sample ready to be written as one tagged point.
/// `captured_at` is epoch millis; field values are integral because the
/// store schema uses integer fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorReading {
    pub device_id: DeviceId,
    pub device_name: String,
    pub temperature: i64,
    pub humidity: i64,
    pub captured_at: i64,
}
