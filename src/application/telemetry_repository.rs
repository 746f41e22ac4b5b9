// Repository trait for telemetry storage
use crate::domain::telemetry::{Measurement, Point};
use async_trait::async_trait;

#[async_trait]
pub trait TelemetryRepository: Send + Sync {
    /// Bulk-write points into one measurement.
    async fn write_points(&self, measurement: &Measurement, points: &[Point]) -> anyhow::Result<()>;
}
