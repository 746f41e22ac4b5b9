// Raw SolarEdge monitoring API payloads
use serde::{Deserialize, Serialize};

/// One reading as reported by the vendor, stamped in site-local time.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Sample {
    pub date: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub time_unit: String,
    pub unit: String,
    #[serde(default)]
    pub values: Vec<Sample>,
}

/// `GET /site/{id}/power`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PowerResponse {
    pub power: Series,
}

/// `GET /site/{id}/energy`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EnergyResponse {
    pub energy: Series,
}

/// `GET /site/{id}/timeFrameEnergy`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeFrameEnergyResponse {
    pub time_frame_energy: TimeFrameEnergy,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeFrameEnergy {
    pub energy: f64,
    pub unit: String,
    pub start_lifetime_energy: LifetimeEnergy,
    /// Known to disagree with the sum of the interval deltas; never used.
    pub end_lifetime_energy: LifetimeEnergy,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LifetimeEnergy {
    pub date: String,
    pub energy: f64,
    pub unit: String,
}
