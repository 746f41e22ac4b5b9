// Source trait for vendor telemetry
use crate::domain::granularity::Granularity;
use crate::domain::solaredge::{EnergyResponse, PowerResponse, TimeFrameEnergyResponse};
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// Read side of the vendor API. All bounds are site-local wall-clock times.
#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// Power samples between the literal begin and end instants.
    async fn get_power(&self, begin: NaiveDateTime, end: NaiveDateTime) -> anyhow::Result<PowerResponse>;

    /// Per-interval energy deltas; only the dates of the bounds are used.
    async fn get_energy(
        &self,
        begin: NaiveDateTime,
        end: NaiveDateTime,
        granularity: Granularity,
    ) -> anyhow::Result<EnergyResponse>;

    /// Lifetime energy at the start and end of the range.
    async fn get_time_frame_energy(
        &self,
        begin: NaiveDateTime,
        end: NaiveDateTime,
        granularity: Granularity,
    ) -> anyhow::Result<TimeFrameEnergyResponse>;
}
