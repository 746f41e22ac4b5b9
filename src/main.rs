// Main entry point - Dependency injection and a single sync run
mod application;
mod cli;
mod domain;
mod infrastructure;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use crate::application::sync_service::SyncService;
use crate::application::telemetry_repository::TelemetryRepository;
use crate::application::telemetry_source::TelemetrySource;
use crate::cli::Args;
use crate::infrastructure::config::{AppConfig, load_config};
use crate::infrastructure::fixtures::FixtureSource;
use crate::infrastructure::influx_repository::InfluxRepository;
use crate::infrastructure::json_lines::JsonLinesRepository;
use crate::infrastructure::observability::init_tracing;
use crate::infrastructure::solaredge_client::SolarEdgeClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = load_config(&args.config)?;

    let source = telemetry_source(&args, &config)?;
    let repository = telemetry_repository(&args, &config)?;

    let request = args.sync_request();
    tracing::info!(
        begin = %request.begin,
        end = %request.end,
        granularity = %request.granularity,
        "Starting sync"
    );

    let summary = SyncService::new(source, repository).run(&request).await?;
    tracing::info!(?summary, "Done");

    Ok(())
}

/// Canned payloads on a dry run, the live API otherwise.
fn telemetry_source(args: &Args, config: &AppConfig) -> anyhow::Result<Arc<dyn TelemetrySource>> {
    if args.dry_run {
        tracing::info!("Dry run, using example data");
        return Ok(Arc::new(FixtureSource));
    }
    let settings = config
        .solaredge
        .clone()
        .context("Missing [solaredge] configuration")?;
    Ok(Arc::new(SolarEdgeClient::new(settings)?))
}

/// A local file when `--output` is given, InfluxDB otherwise.
fn telemetry_repository(args: &Args, config: &AppConfig) -> anyhow::Result<Arc<dyn TelemetryRepository>> {
    match &args.output {
        Some(path) => Ok(Arc::new(JsonLinesRepository::create(path)?)),
        None => {
            let settings = config.influx.clone().context("Missing [influx] configuration")?;
            Ok(Arc::new(InfluxRepository::new(settings)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::sync_service::SyncSummary;

    fn empty_config() -> AppConfig {
        AppConfig {
            solaredge: None,
            influx: None,
        }
    }

    #[test]
    fn test_live_run_requires_solaredge_settings() {
        let args = Args::try_parse_from(["seindb", "2023-03-26"]).unwrap();
        let error = telemetry_source(&args, &empty_config()).err().unwrap();
        assert_eq!(error.to_string(), "Missing [solaredge] configuration");
    }

    #[tokio::test]
    async fn test_dry_run_matches_golden_file() {
        let args = Args::try_parse_from([
            "seindb",
            "2023-03-26",
            "2023-03-28",
            "--dry-run",
            "--energy",
            "--power",
        ])
        .unwrap();
        let source = telemetry_source(&args, &empty_config()).unwrap();
        let repository = Arc::new(JsonLinesRepository::new(Vec::new()));
        let service = SyncService::new(source, repository.clone());

        let summary = service.run(&args.sync_request()).await.unwrap();

        assert_eq!(
            summary,
            SyncSummary {
                energy_points: Some(3),
                power_points: Some(6),
            }
        );
        assert_eq!(repository.written(), include_str!("../fixtures/golden/dry_run.jsonl"));
    }
}
