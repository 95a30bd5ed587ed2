use std::sync::Arc;

use async_trait::async_trait;

use collector_domain::ports::{HealthCheckService, MeasurementRepository, VendorApi};

pub struct DefaultHealthService {
    measurement_repo: Arc<dyn MeasurementRepository>,
    vendor_api: Arc<dyn VendorApi>,
}

impl DefaultHealthService {
    pub fn new(
        measurement_repo: Arc<dyn MeasurementRepository>,
        vendor_api: Arc<dyn VendorApi>,
    ) -> Self {
        Self {
            measurement_repo,
            vendor_api,
        }
    }
}

#[async_trait]
impl HealthCheckService for DefaultHealthService {
    async fn check_database(&self) -> anyhow::Result<bool> {
        self.measurement_repo.ping().await.map(|_| true)
    }

    async fn check_vendor(&self) -> anyhow::Result<bool> {
        self.vendor_api.check().await.map(|_| true)
    }
}
