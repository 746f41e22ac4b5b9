// Sync service - Use case for pulling vendor telemetry into storage
use crate::application::telemetry_repository::TelemetryRepository;
use crate::application::telemetry_source::TelemetrySource;
use crate::application::transform::{transform_energy, transform_power};
use crate::domain::granularity::Granularity;
use crate::domain::telemetry::{Measurement, Point};
use anyhow::Context;
use chrono::{NaiveDateTime, TimeDelta};
use std::sync::Arc;

/// Which datasets a run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Datasets {
    pub energy: bool,
    pub power: bool,
}

impl Datasets {
    /// Selecting neither dataset selects both.
    pub fn from_flags(power: bool, energy: bool) -> Self {
        if !power && !energy {
            Self { energy: true, power: true }
        } else {
            Self { energy, power }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncRequest {
    /// Site-local, inclusive.
    pub begin: NaiveDateTime,
    /// Site-local, inclusive.
    pub end: NaiveDateTime,
    pub granularity: Granularity,
    pub datasets: Datasets,
}

/// Number of points written per dataset, `None` when the dataset was not selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub energy_points: Option<usize>,
    pub power_points: Option<usize>,
}

#[derive(Clone)]
pub struct SyncService {
    source: Arc<dyn TelemetrySource>,
    repository: Arc<dyn TelemetryRepository>,
}

impl SyncService {
    pub fn new(source: Arc<dyn TelemetrySource>, repository: Arc<dyn TelemetryRepository>) -> Self {
        Self { source, repository }
    }

    /// Energy first, then power. Any failure aborts the run; earlier writes stand.
    pub async fn run(&self, request: &SyncRequest) -> anyhow::Result<SyncSummary> {
        let mut summary = SyncSummary::default();

        if request.datasets.energy {
            summary.energy_points = Some(self.sync_lifetime_energy(request).await?);
        }
        if request.datasets.power {
            summary.power_points = Some(self.sync_current_power(request).await?);
        }

        Ok(summary)
    }

    async fn sync_lifetime_energy(&self, request: &SyncRequest) -> anyhow::Result<usize> {
        // The time frame endpoint excludes its end date.
        let time_frame_end = request.end + TimeDelta::days(1);
        let time_frame = self
            .source
            .get_time_frame_energy(request.begin, time_frame_end, request.granularity)
            .await
            .context("Failed to fetch time frame energy")?;
        tracing::debug!(?time_frame, "Raw time frame energy data");

        let energy = self
            .source
            .get_energy(request.begin, request.end, request.granularity)
            .await
            .context("Failed to fetch energy")?;
        tracing::debug!(?energy, "Raw energy data");

        let points = transform_energy(&time_frame, &energy)?;
        tracing::info!("Got {} lifetime energy data points", points.len());

        self.write(&Measurement::LIFETIME_ENERGY, &points).await
    }

    async fn sync_current_power(&self, request: &SyncRequest) -> anyhow::Result<usize> {
        let power = self
            .source
            .get_power(request.begin, request.end)
            .await
            .context("Failed to fetch power")?;
        tracing::debug!(?power, "Raw current power data");

        let points = transform_power(&power)?;
        tracing::info!("Got {} power data points", points.len());

        self.write(&Measurement::CURRENT_POWER, &points).await
    }

    async fn write(&self, measurement: &Measurement, points: &[Point]) -> anyhow::Result<usize> {
        tracing::debug!(measurement = measurement.name, ?points, "Parsed data points");
        self.repository
            .write_points(measurement, points)
            .await
            .with_context(|| format!("Failed to write {}", measurement.name))?;
        Ok(points.len())
    }
}
