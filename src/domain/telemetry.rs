// Telemetry data domain models
use chrono::{DateTime, Utc};

/// A normalized sample, ready to be written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl Point {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Where a series of points is stored: measurement name, tag set and field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub name: &'static str,
    pub entity_id: &'static str,
    pub domain: &'static str,
    pub field: &'static str,
}

impl Measurement {
    pub const CURRENT_POWER: Self = Self {
        name: "sensor__power",
        entity_id: "solaredge_current_power",
        domain: "sensor",
        field: "value",
    };

    pub const LIFETIME_ENERGY: Self = Self {
        name: "sensor__energy",
        entity_id: "solaredge_lifetime_energy",
        domain: "sensor",
        field: "value",
    };

    /// Tag pairs in the order they are written.
    pub fn tags(&self) -> [(&'static str, &'static str); 2] {
        [("domain", self.domain), ("entity_id", self.entity_id)]
    }
}
