use async_trait::async_trait;

use crate::entities::SensorReading;

#[async_trait]
pub trait MeasurementRepository: Send + Sync {
    async fn write_readings(&self, readings: &[SensorReading]) -> anyhow::Result<()>;
    async fn ping(&self) -> anyhow::Result<()>;
}
