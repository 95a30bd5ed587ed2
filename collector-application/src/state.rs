use std::collections::VecDeque;
use std::sync::Arc;

use collector_domain::ports::{HealthCheckService, MeasurementRepository, VendorApi};
use collector_domain::{PollStatus, RuntimeConfig, SensorReading};
use tokio::sync::RwLock;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub measurement_repo: Arc<dyn MeasurementRepository>,
    pub vendor_api: Arc<dyn VendorApi>,
    pub health_service: Arc<dyn HealthCheckService>,
    pub metrics: Arc<Metrics>,
    pub poll_status: Arc<RwLock<PollStatus>>,
    pub recent_readings: Arc<RwLock<VecDeque<SensorReading>>>,
}
