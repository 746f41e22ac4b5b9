use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "config/seindb";
pub const ENV_PREFIX: &str = "SEINDB";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Not needed for dry runs.
    pub solaredge: Option<SolarEdgeSettings>,
    /// Not needed when writing to a file.
    pub influx: Option<InfluxSettings>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SolarEdgeSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub api_key: String,
    pub site_id: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InfluxSettings {
    pub host: String,
    #[serde(default)]
    pub org: String,
    pub token: String,
    pub database: String,
    #[serde(default = "default_retention_policy")]
    pub retention_policy: String,
}

fn default_base_url() -> String {
    "https://monitoringapi.solaredge.com".to_string()
}

fn default_retention_policy() -> String {
    "autogen".to_string()
}

/// Load the optional config file at `path`, overridden by `SEINDB_*` variables
/// (`SEINDB_SOLAREDGE__API_KEY`, `SEINDB_INFLUX__TOKEN`, ...).
pub fn load_config(path: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
