use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use collector_domain::value_objects::TemperatureUnit;
use collector_domain::{DbConfig, RuntimeConfig};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub govee_base_url: String,
    pub govee_api_key: String,
    pub influx_url: String,
    pub influx_org: String,
    pub influx_bucket: String,
    pub influx_token: String,
    pub measurement: String,
    pub temperature_unit: String,
    pub poll_interval_seconds: u64,
    pub request_timeout_seconds: u64,
    pub recent_readings_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3240".to_string(),
            api_token: None,
            govee_base_url: "https://openapi.api.govee.com".to_string(),
            govee_api_key: String::new(),
            influx_url: "http://127.0.0.1:8086".to_string(),
            influx_org: String::new(),
            influx_bucket: "sensors".to_string(),
            influx_token: String::new(),
            measurement: "govee_sensors".to_string(),
            temperature_unit: "fahrenheit".to_string(),
            poll_interval_seconds: 60,
            request_timeout_seconds: 15,
            recent_readings_capacity: 256,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("STRATUS_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        if !file_path.exists() {
            warn!("config.toml not found, using defaults");
            let mut config = AppConfig::default();
            config.apply_env_overrides();
            config.normalize();
            config.validate()?;
            return Ok(config);
        }
        let content = fs::read_to_string(file_path).await?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        if let Some(api_token) = &self.api_token {
            if api_token.trim().is_empty() {
                self.api_token = None;
            }
        }
        self.govee_base_url = trim_url(&self.govee_base_url);
        self.influx_url = trim_url(&self.influx_url);
        if self.measurement.trim().is_empty() {
            self.measurement = AppConfig::default().measurement;
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.govee_api_key.trim().is_empty() {
            return Err(anyhow!("govee_api_key must be set"));
        }
        if self.influx_org.trim().is_empty() {
            return Err(anyhow!("influx_org must be set"));
        }
        if self.influx_token.trim().is_empty() {
            return Err(anyhow!("influx_token must be set"));
        }
        if self.influx_bucket.trim().is_empty() {
            return Err(anyhow!("influx_bucket must not be empty"));
        }
        if self.poll_interval_seconds == 0 {
            return Err(anyhow!("poll_interval_seconds must be greater than 0"));
        }
        if self.recent_readings_capacity == 0 {
            return Err(anyhow!("recent_readings_capacity must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            govee_base_url: self.govee_base_url.clone(),
            govee_api_key: self.govee_api_key.clone(),
            measurement: self.measurement.clone(),
            temperature_unit: TemperatureUnit::from(self.temperature_unit.as_str()),
            poll_interval_seconds: self.poll_interval_seconds,
            request_timeout_seconds: self.request_timeout_seconds,
            recent_readings_capacity: self.recent_readings_capacity,
        }
    }

    pub fn to_db_config(&self) -> DbConfig {
        DbConfig {
            influx_url: self.influx_url.clone(),
            influx_org: self.influx_org.clone(),
            influx_bucket: self.influx_bucket.clone(),
            influx_token: self.influx_token.clone(),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("STRATUS_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("STRATUS_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Ok(value) = env::var("STRATUS_GOVEE_BASE_URL") {
            self.govee_base_url = value;
        }
        if let Ok(value) = env::var("STRATUS_GOVEE_API_KEY") {
            self.govee_api_key = value;
        }
        if let Ok(value) = env::var("STRATUS_INFLUX_URL") {
            self.influx_url = value;
        }
        if let Ok(value) = env::var("STRATUS_INFLUX_ORG") {
            self.influx_org = value;
        }
        if let Ok(value) = env::var("STRATUS_INFLUX_BUCKET") {
            self.influx_bucket = value;
        }
        if let Ok(value) = env::var("STRATUS_INFLUX_TOKEN") {
            self.influx_token = value;
        }
        if let Ok(value) = env::var("STRATUS_MEASUREMENT") {
            self.measurement = value;
        }
        if let Ok(value) = env::var("STRATUS_TEMPERATURE_UNIT") {
            self.temperature_unit = value;
        }
        if let Ok(value) = env::var("STRATUS_POLL_INTERVAL_SECONDS") {
            self.poll_interval_seconds = value.parse().unwrap_or(self.poll_interval_seconds);
        }
        if let Ok(value) = env::var("STRATUS_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Ok(value) = env::var("STRATUS_RECENT_READINGS_CAPACITY") {
            self.recent_readings_capacity =
                value.parse().unwrap_or(self.recent_readings_capacity);
        }
    }
}

fn trim_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}
