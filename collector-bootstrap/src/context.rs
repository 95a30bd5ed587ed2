use std::collections::VecDeque;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;

use collector_application::{AppState, Metrics};
use collector_domain::PollStatus;
use collector_infrastructure::{AppConfig, DefaultHealthService, GoveeClient, InfluxRepo};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();
        let db_config = config.to_db_config();

        let measurement_repo = Arc::new(InfluxRepo::new(
            db_config,
            runtime_config.measurement.clone(),
            runtime_config.request_timeout_seconds,
        )?);
        let vendor_api = Arc::new(GoveeClient::new(
            runtime_config.govee_base_url.clone(),
            runtime_config.govee_api_key.clone(),
            runtime_config.request_timeout_seconds,
        )?);
        let health_service = Arc::new(DefaultHealthService::new(
            measurement_repo.clone(),
            vendor_api.clone(),
        ));

        let state = AppState {
            config: runtime_config,
            measurement_repo,
            vendor_api,
            health_service,
            metrics: Arc::new(Metrics::default()),
            poll_status: Arc::new(RwLock::new(PollStatus::default())),
            recent_readings: Arc::new(RwLock::new(VecDeque::new())),
        };

        Ok(Self { state })
    }
}
