use crate::application::sync_service::{Datasets, SyncRequest};
use crate::domain::granularity::Granularity;
use crate::domain::time::{LocalTimestamp, vendor_now};
use crate::infrastructure::config::DEFAULT_CONFIG_PATH;
use clap::Parser;
use std::path::PathBuf;

/// Pull data from the SolarEdge API and store it into an InfluxDB database.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Begin timestamp in the format `YYYY-MM-DD[ hh:mm:ss]`.
    pub begin: LocalTimestamp,

    /// End timestamp in the format `YYYY-MM-DD[ hh:mm:ss]`, defaults to now.
    pub end: Option<LocalTimestamp>,

    /// Include current power data.
    #[clap(short, long)]
    pub power: bool,

    /// Include lifetime energy data.
    #[clap(short, long)]
    pub energy: bool,

    /// Granularity for energy data: QUARTER_OF_AN_HOUR, HOUR, DAY or WEEK.
    #[clap(short, long, default_value = "DAY")]
    pub granularity: Granularity,

    /// Print raw and parsed payloads.
    #[clap(short, long)]
    pub verbose: bool,

    /// Use example data instead of calling the SolarEdge API.
    #[clap(short, long)]
    pub dry_run: bool,

    /// Configuration file, without extension.
    #[clap(long, env = "SEINDB_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Append points to this JSON-lines file instead of writing to InfluxDB.
    #[clap(long)]
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn sync_request(&self) -> SyncRequest {
        SyncRequest {
            begin: self.begin.naive(),
            end: self.end.map_or_else(vendor_now, LocalTimestamp::naive),
            granularity: self.granularity,
            datasets: Datasets::from_flags(self.power, self.energy),
        }
    }
}
