// Govee Open API client

use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use collector_domain::ports::VendorApi;
use collector_domain::value_objects::{DeviceId, Sku};
use collector_domain::{Device, RawDeviceState};

const DEVICES_PATH: &str = "/router/api/v1/user/devices";
const STATE_PATH: &str = "/router/api/v1/device/state";

const TEMPERATURE_INSTANCE: &str = "sensorTemperature";
const HUMIDITY_INSTANCE: &str = "sensorHumidity";

pub struct GoveeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GoveeClient {
    pub fn new(base_url: String, api_key: String, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds.max(3)))
            .build()?;
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }
}

#[derive(Debug, Deserialize)]
struct DevicesResponse {
    #[serde(default)]
    data: Vec<DeviceEntry>,
}

#[derive(Debug, Deserialize)]
struct DeviceEntry {
    sku: String,
    device: String,
    #[serde(default, rename = "deviceName")]
    device_name: String,
}

#[derive(Debug, Deserialize)]
struct StateResponse {
    payload: StatePayload,
}

#[derive(Debug, Default, Deserialize)]
struct StatePayload {
    #[serde(default)]
    capabilities: Vec<Capability>,
}

#[derive(Debug, Default, Deserialize)]
struct Capability {
    #[serde(default)]
    instance: String,
    #[serde(default)]
    state: CapabilityState,
}

#[derive(Debug, Default, Deserialize)]
struct CapabilityState {
    value: Option<serde_json::Value>,
}

#[async_trait]
impl VendorApi for GoveeClient {
    async fn list_devices(&self) -> Result<Vec<Device>> {
        let response: DevicesResponse = self
            .client
            .get(format!("{}{}", self.base_url, DEVICES_PATH))
            .header("Govee-API-Key", &self.api_key)
            .header("Content-Type", "application/json")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response
            .data
            .into_iter()
            .map(|entry| Device {
                sku: Sku(entry.sku),
                device_id: DeviceId(entry.device),
                name: entry.device_name,
            })
            .collect())
    }

    async fn device_state(&self, device: &Device) -> Result<RawDeviceState> {
        let body = json!({
            "requestId": Uuid::new_v4().to_string(),
            "payload": {
                "sku": device.sku.0,
                "device": device.device_id.0,
            },
        });

        let response: StateResponse = self
            .client
            .post(format!("{}{}", self.base_url, STATE_PATH))
            .header("Govee-API-Key", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let state = extract_state(&response.payload.capabilities);
        if state.temperature.is_none() && state.humidity.is_none() {
            return Err(anyhow!(
                "device {} reported no sensor capabilities",
                device.device_id.0
            ));
        }
        Ok(state)
    }

    async fn check(&self) -> Result<()> {
        self.list_devices().await.map(|_| ())
    }
}

// Temperature arrives as a bare float; humidity is either a bare number or
// wrapped as {"currentHumidity": n} depending on firmware.
fn extract_state(capabilities: &[Capability]) -> RawDeviceState {
    let mut state = RawDeviceState::default();
    for capability in capabilities {
        let Some(value) = &capability.state.value else {
            continue;
        };
        match capability.instance.as_str() {
            TEMPERATURE_INSTANCE => state.temperature = value.as_f64(),
            HUMIDITY_INSTANCE => {
                state.humidity = value
                    .get("currentHumidity")
                    .and_then(|inner| inner.as_f64())
                    .or_else(|| value.as_f64());
            }
            _ => {}
        }
    }
    state
}
