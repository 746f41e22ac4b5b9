// JSON-lines repository, one record per point
use crate::application::telemetry_repository::TelemetryRepository;
use crate::domain::telemetry::{Measurement, Point};
use crate::domain::time::format_utc;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

/// Record layout, mirroring an InfluxDB JSON point.
#[derive(Debug, Serialize)]
pub struct Record<'a> {
    pub measurement: &'a str,
    pub tags: Tags<'a>,
    pub time: String,
    pub fields: Fields,
}

#[derive(Debug, Serialize)]
pub struct Tags<'a> {
    pub domain: &'a str,
    pub entity_id: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Fields {
    pub value: f64,
}

impl<'a> Record<'a> {
    pub fn new(measurement: &'a Measurement, point: &Point) -> Self {
        Self {
            measurement: measurement.name,
            tags: Tags {
                domain: measurement.domain,
                entity_id: measurement.entity_id,
            },
            time: format_utc(point.timestamp),
            fields: Fields { value: point.value },
        }
    }
}

pub struct JsonLinesRepository<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesRepository<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl JsonLinesRepository<BufWriter<std::fs::File>> {
    /// Append to `path`, creating it if needed.
    pub fn create(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

#[async_trait]
impl<W: Write + Send> TelemetryRepository for JsonLinesRepository<W> {
    async fn write_points(&self, measurement: &Measurement, points: &[Point]) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| anyhow::anyhow!("JSON-lines writer lock poisoned"))?;
        for point in points {
            serde_json::to_writer(&mut *writer, &Record::new(measurement, point))?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        tracing::info!("Wrote {} points to {}", points.len(), measurement.name);
        Ok(())
    }
}

#[cfg(test)]
impl JsonLinesRepository<Vec<u8>> {
    pub fn written(&self) -> String {
        String::from_utf8(self.writer.lock().unwrap().clone()).unwrap()
    }
}
