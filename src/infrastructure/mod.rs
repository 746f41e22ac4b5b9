// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod fixtures;
pub mod influx_repository;
pub mod json_lines;
pub mod observability;
pub mod solaredge_client;
