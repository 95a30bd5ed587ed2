// InfluxDB v2 measurement repository
// Speaks the plain HTTP write API with line protocol; no vendor SDK

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

use collector_domain::ports::MeasurementRepository;
use collector_domain::{DbConfig, SensorReading};

pub struct InfluxRepo {
    client: Client,
    config: DbConfig,
    measurement: String,
}

impl InfluxRepo {
    pub fn new(config: DbConfig, measurement: String, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds.max(3)))
            .build()?;
        Ok(Self {
            client,
            config,
            measurement,
        })
    }

    fn write_url(&self) -> String {
        format!("{}/api/v2/write", self.config.influx_url)
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.config.influx_url)
    }
}

#[async_trait]
impl MeasurementRepository for InfluxRepo {
    async fn write_readings(&self, readings: &[SensorReading]) -> Result<()> {
        if readings.is_empty() {
            return Ok(());
        }
        let body = readings
            .iter()
            .map(|reading| encode_line(&self.measurement, reading))
            .collect::<Vec<_>>()
            .join("\n");

        self.client
            .post(self.write_url())
            .query(&[
                ("org", self.config.influx_org.as_str()),
                ("bucket", self.config.influx_bucket.as_str()),
                ("precision", "ms"),
            ])
            .header("Authorization", format!("Token {}", self.config.influx_token))
            .header("Content-Type", "text/plain; charset=utf-8")
            .body(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        let response = self.client.get(self.health_url()).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("influx health responded {}", response.status());
        }
        Ok(())
    }
}

/// One line-protocol record: measurement, device tags, integer fields, and
/// a millisecond timestamp (the write request declares `precision=ms`).
fn encode_line(measurement: &str, reading: &SensorReading) -> String {
    format!(
        "{},device={},deviceName={} temperature={}i,humidity={}i {}",
        escape_measurement(measurement),
        escape_tag(&reading.device_id.0),
        escape_tag(&reading.device_name),
        reading.temperature,
        reading.humidity,
        reading.captured_at
    )
}

// Line protocol escaping: measurements escape commas and spaces, tag keys
// and values additionally escape equals signs.
fn escape_measurement(value: &str) -> String {
    value.replace(',', "\\,").replace(' ', "\\ ")
}

fn escape_tag(value: &str) -> String {
    value
        .replace(',', "\\,")
        .replace('=', "\\=")
        .replace(' ', "\\ ")
}
