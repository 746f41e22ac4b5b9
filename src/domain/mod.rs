// Domain layer - Value types and pure conversions
pub mod error;
pub mod granularity;
pub mod solaredge;
pub mod telemetry;
pub mod time;
