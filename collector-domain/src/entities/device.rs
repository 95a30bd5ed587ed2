// Device entity
// A sensor known to the vendor cloud account

use serde::{Deserialize, Serialize};

use crate::value_objects::{DeviceId, Sku};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub sku: Sku,
    pub device_id: DeviceId,
    pub name: String,
}

impl Device {
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.device_id.0
        } else {
            &self.name
        }
    }
}
