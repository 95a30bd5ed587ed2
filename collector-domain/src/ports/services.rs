use async_trait::async_trait;

use crate::entities::{Device, RawDeviceState};

#[async_trait]
pub trait VendorApi: Send + Sync {
    async fn list_devices(&self) -> anyhow::Result<Vec<Device>>;
    async fn device_state(&self, device: &Device) -> anyhow::Result<RawDeviceState>;
    async fn check(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait HealthCheckService: Send + Sync {
    async fn check_database(&self) -> anyhow::Result<bool>;
    async fn check_vendor(&self) -> anyhow::Result<bool>;
}
