// InfluxDB repository implementation
use crate::application::telemetry_repository::TelemetryRepository;
use crate::domain::telemetry::{Measurement, Point};
use crate::infrastructure::config::InfluxSettings;
use anyhow::{Context, Result};
use async_trait::async_trait;
use influxdb2::Client;
use influxdb2::models::DataPoint;

/// Writes through the v2 write API; InfluxDB 1.8+ serves it with `database/retention_policy` as bucket.
pub struct InfluxRepository {
    client: Client,
    bucket: String,
}

impl InfluxRepository {
    pub fn new(settings: InfluxSettings) -> Self {
        let host = settings.host.trim_end_matches('/').to_string();
        Self {
            client: Client::new(host, settings.org, settings.token),
            bucket: format!("{}/{}", settings.database, settings.retention_policy),
        }
    }

    fn data_points(measurement: &Measurement, points: &[Point]) -> Result<Vec<DataPoint>> {
        points
            .iter()
            .map(|point| {
                let timestamp = point
                    .timestamp
                    .timestamp_nanos_opt()
                    .with_context(|| format!("Timestamp out of range: {}", point.timestamp))?;
                let mut builder = DataPoint::builder(measurement.name);
                for (key, value) in measurement.tags() {
                    builder = builder.tag(key, value);
                }
                builder
                    .field(measurement.field, point.value)
                    .timestamp(timestamp)
                    .build()
                    .context("Failed to build InfluxDB data point")
            })
            .collect()
    }
}

#[async_trait]
impl TelemetryRepository for InfluxRepository {
    async fn write_points(&self, measurement: &Measurement, points: &[Point]) -> Result<()> {
        if points.is_empty() {
            tracing::debug!("Nothing to write to {}", measurement.name);
            return Ok(());
        }

        let data_points = Self::data_points(measurement, points)?;
        self.client
            .write(&self.bucket, futures::stream::iter(data_points))
            .await
            .context("Failed to write points to InfluxDB")?;

        tracing::info!("Wrote {} points to {} in {}", points.len(), measurement.name, self.bucket);
        Ok(())
    }
}
