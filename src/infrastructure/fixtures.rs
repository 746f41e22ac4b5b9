// Canned SolarEdge payloads for dry runs
use crate::application::telemetry_source::TelemetrySource;
use crate::domain::granularity::Granularity;
use crate::domain::solaredge::{EnergyResponse, PowerResponse, TimeFrameEnergyResponse};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDateTime;

const POWER: &str = include_str!("../../fixtures/power.json");
const ENERGY: &str = include_str!("../../fixtures/energy.json");
const TIME_FRAME_ENERGY: &str = include_str!("../../fixtures/timeframe.json");

/// Serves the same payloads regardless of the requested range.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSource;

#[async_trait]
impl TelemetrySource for FixtureSource {
    async fn get_power(&self, _begin: NaiveDateTime, _end: NaiveDateTime) -> Result<PowerResponse> {
        serde_json::from_str(POWER).context("Failed to parse the power fixture")
    }

    async fn get_energy(
        &self,
        _begin: NaiveDateTime,
        _end: NaiveDateTime,
        _granularity: Granularity,
    ) -> Result<EnergyResponse> {
        serde_json::from_str(ENERGY).context("Failed to parse the energy fixture")
    }

    async fn get_time_frame_energy(
        &self,
        _begin: NaiveDateTime,
        _end: NaiveDateTime,
        _granularity: Granularity,
    ) -> Result<TimeFrameEnergyResponse> {
        serde_json::from_str(TIME_FRAME_ENERGY).context("Failed to parse the time frame fixture")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::time::vendor_now;

    #[tokio::test]
    async fn test_fixtures_parse() {
        let now = vendor_now();

        let power = FixtureSource.get_power(now, now).await.unwrap();
        let energy = FixtureSource.get_energy(now, now, Granularity::Hour).await.unwrap();
        let time_frame = FixtureSource
            .get_time_frame_energy(now, now, Granularity::Hour)
            .await
            .unwrap();

        assert_eq!(power.power.values.len(), 8);
        assert_eq!(energy.energy.time_unit, "DAY");
        assert_eq!(time_frame.time_frame_energy.start_lifetime_energy.energy, 1_250_000.0);
    }
}
