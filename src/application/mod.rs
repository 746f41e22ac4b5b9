// Application layer - Use cases and the capabilities they depend on
pub mod sync_service;
pub mod telemetry_repository;
pub mod telemetry_source;
pub mod transform;
