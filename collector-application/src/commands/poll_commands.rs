use tracing::{info, warn};

use collector_domain::services::normalize_sample;
use collector_domain::utils::current_time_millis;
use collector_domain::{PollOutcome, SensorReading};

use crate::{AppError, AppState};

/// Run one poll cycle: list devices, fetch each device's state, write the
/// usable readings as a single batch.
///
/// A device that fails to answer or reports an implausible sample is
/// skipped and counted; it does not abort the cycle. Only a failure to
/// list devices or to write the batch fails the whole poll.
pub async fn poll_once(state: &AppState) -> Result<PollOutcome, AppError> {
    let started_at = current_time_millis();

    let devices = match state.vendor_api.list_devices().await {
        Ok(devices) => devices,
        Err(err) => {
            state.metrics.record_poll_error();
            record_failure(state, started_at).await;
            return Err(AppError::Upstream(err.to_string()));
        }
    };
    info!("vendor reports {} devices", devices.len());

    let mut readings: Vec<SensorReading> = Vec::with_capacity(devices.len());
    let mut skipped = 0u32;
    for device in &devices {
        match state.vendor_api.device_state(device).await {
            Ok(raw) => {
                let captured_at = current_time_millis();
                match normalize_sample(device, &raw, state.config.temperature_unit, captured_at) {
                    Some(reading) => {
                        info!(
                            "device {} ({}): temperature={} humidity={}",
                            reading.device_name,
                            reading.device_id.0,
                            reading.temperature,
                            reading.humidity
                        );
                        readings.push(reading);
                    }
                    None => {
                        skipped += 1;
                        warn!(
                            "device {} ({}) returned no usable sample",
                            device.display_name(),
                            device.device_id.0
                        );
                    }
                }
            }
            Err(err) => {
                skipped += 1;
                warn!(
                    "state fetch failed for {} ({}): {}",
                    device.display_name(),
                    device.device_id.0,
                    err
                );
            }
        }
    }

    if !readings.is_empty() {
        if let Err(err) = state.measurement_repo.write_readings(&readings).await {
            state.metrics.record_write_error();
            record_failure(state, started_at).await;
            return Err(AppError::Internal(err));
        }
    }

    retain_recent(state, &readings).await;
    state.metrics.record_poll(readings.len(), skipped as usize);

    let outcome = PollOutcome {
        devices_seen: devices.len() as u32,
        readings_written: readings.len() as u32,
        devices_skipped: skipped,
    };

    {
        let mut status = state.poll_status.write().await;
        status.last_poll = started_at;
        status.last_success = current_time_millis();
        status.devices_seen = outcome.devices_seen;
        status.readings_written += outcome.readings_written as u64;
        status.consecutive_failures = 0;
    }

    Ok(outcome)
}

async fn record_failure(state: &AppState, started_at: i64) {
    let mut status = state.poll_status.write().await;
    status.last_poll = started_at;
    status.consecutive_failures += 1;
}

async fn retain_recent(state: &AppState, readings: &[SensorReading]) {
    let mut recent = state.recent_readings.write().await;
    for reading in readings {
        recent.push_back(reading.clone());
    }
    let capacity = state.config.recent_readings_capacity.max(1);
    while recent.len() > capacity {
        recent.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use collector_domain::ports::{HealthCheckService, MeasurementRepository, VendorApi};
    use collector_domain::value_objects::{DeviceId, Sku, TemperatureUnit};
    use collector_domain::{Device, PollStatus, RawDeviceState, RuntimeConfig, SensorReading};

    use super::*;
    use crate::Metrics;

    struct StubVendor {
        devices: Vec<Device>,
        states: Vec<anyhow::Result<RawDeviceState>>,
        fail_listing: bool,
    }

    #[async_trait]
    impl VendorApi for StubVendor {
        async fn list_devices(&self) -> anyhow::Result<Vec<Device>> {
            if self.fail_listing {
                anyhow::bail!("listing unavailable");
            }
            Ok(self.devices.clone())
        }

        async fn device_state(&self, device: &Device) -> anyhow::Result<RawDeviceState> {
            let index = self
                .devices
                .iter()
                .position(|candidate| candidate.device_id == device.device_id)
                .expect("unknown device in test");
            match &self.states[index] {
                Ok(state) => Ok(state.clone()),
                Err(err) => anyhow::bail!("{}", err),
            }
        }

        async fn check(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingRepo {
        written: Mutex<Vec<SensorReading>>,
        fail_writes: AtomicBool,
    }

    #[async_trait]
    impl MeasurementRepository for RecordingRepo {
        async fn write_readings(&self, readings: &[SensorReading]) -> anyhow::Result<()> {
            if self.fail_writes.load(Ordering::Relaxed) {
                anyhow::bail!("write refused");
            }
            self.written.lock().unwrap().extend_from_slice(readings);
            Ok(())
        }

        async fn ping(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    struct StubHealth;

    #[async_trait]
    impl HealthCheckService for StubHealth {
        async fn check_database(&self) -> anyhow::Result<bool> {
            Ok(true)
        }

        async fn check_vendor(&self) -> anyhow::Result<bool> {
            Ok(true)
        }
    }

    fn device(id: &str) -> Device {
        Device {
            sku: Sku("H5100".to_string()),
            device_id: DeviceId(id.to_string()),
            name: format!("sensor-{}", id),
        }
    }

    fn config() -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            api_token: None,
            govee_base_url: "http://vendor.invalid".to_string(),
            govee_api_key: "key".to_string(),
            measurement: "sensors".to_string(),
            temperature_unit: TemperatureUnit::Fahrenheit,
            poll_interval_seconds: 60,
            request_timeout_seconds: 15,
            recent_readings_capacity: 4,
        }
    }

    fn state_with(vendor: StubVendor, repo: Arc<RecordingRepo>) -> AppState {
        AppState {
            config: config(),
            measurement_repo: repo,
            vendor_api: Arc::new(vendor),
            health_service: Arc::new(StubHealth),
            metrics: Arc::new(Metrics::default()),
            poll_status: Arc::new(RwLock::new(PollStatus::default())),
            recent_readings: Arc::new(RwLock::new(VecDeque::new())),
        }
    }

    fn sample(temperature: f64, humidity: f64) -> anyhow::Result<RawDeviceState> {
        Ok(RawDeviceState {
            temperature: Some(temperature),
            humidity: Some(humidity),
        })
    }

    #[tokio::test]
    async fn writes_one_reading_per_healthy_device() {
        let repo = Arc::new(RecordingRepo::default());
        let vendor = StubVendor {
            devices: vec![device("a"), device("b")],
            states: vec![sample(63.14, 48.0), sample(70.0, 51.6)],
            fail_listing: false,
        };
        let state = state_with(vendor, repo.clone());

        let outcome = poll_once(&state).await.expect("poll succeeds");
        assert_eq!(2, outcome.devices_seen);
        assert_eq!(2, outcome.readings_written);
        assert_eq!(0, outcome.devices_skipped);

        let written = repo.written.lock().unwrap();
        assert_eq!(2, written.len());
        assert_eq!(63, written[0].temperature);
        assert_eq!(52, written[1].humidity);

        let status = state.poll_status.read().await;
        assert_eq!(2, status.devices_seen);
        assert!(status.last_success >= status.last_poll);
        assert_eq!(0, status.consecutive_failures);
    }

    #[tokio::test]
    async fn one_bad_device_does_not_abort_the_cycle() {
        let repo = Arc::new(RecordingRepo::default());
        let vendor = StubVendor {
            devices: vec![device("a"), device("b"), device("c")],
            states: vec![
                sample(63.0, 48.0),
                Err(anyhow::anyhow!("device offline")),
                sample(900.0, 48.0),
            ],
            fail_listing: false,
        };
        let state = state_with(vendor, repo.clone());

        let outcome = poll_once(&state).await.expect("poll succeeds");
        assert_eq!(3, outcome.devices_seen);
        assert_eq!(1, outcome.readings_written);
        assert_eq!(2, outcome.devices_skipped);
        assert_eq!(1, repo.written.lock().unwrap().len());
    }

    #[tokio::test]
    async fn listing_failure_counts_as_poll_error() {
        let repo = Arc::new(RecordingRepo::default());
        let vendor = StubVendor {
            devices: Vec::new(),
            states: Vec::new(),
            fail_listing: true,
        };
        let state = state_with(vendor, repo);

        let err = poll_once(&state).await.expect_err("poll fails");
        assert!(matches!(err, AppError::Upstream(_)));

        let status = state.poll_status.read().await;
        assert_eq!(1, status.consecutive_failures);
        assert_eq!(0, status.last_success);
        assert!(state
            .metrics
            .render_prometheus()
            .contains("stratus_poll_errors_total 1"));
    }

    #[tokio::test]
    async fn write_failure_fails_the_poll() {
        let repo = Arc::new(RecordingRepo::default());
        repo.fail_writes.store(true, Ordering::Relaxed);
        let vendor = StubVendor {
            devices: vec![device("a")],
            states: vec![sample(63.0, 48.0)],
            fail_listing: false,
        };
        let state = state_with(vendor, repo);

        let err = poll_once(&state).await.expect_err("poll fails");
        assert!(matches!(err, AppError::Internal(_)));
        assert!(state
            .metrics
            .render_prometheus()
            .contains("stratus_write_errors_total 1"));
    }

    #[tokio::test]
    async fn recent_buffer_is_bounded() {
        let repo = Arc::new(RecordingRepo::default());
        let vendor = StubVendor {
            devices: vec![device("a"), device("b")],
            states: vec![sample(63.0, 48.0), sample(64.0, 49.0)],
            fail_listing: false,
        };
        let state = state_with(vendor, repo);

        for _ in 0..4 {
            poll_once(&state).await.expect("poll succeeds");
        }
        let recent = state.recent_readings.read().await;
        assert_eq!(state.config.recent_readings_capacity, recent.len());
    }
}
