// SolarEdge monitoring API client
use crate::application::telemetry_source::TelemetrySource;
use crate::domain::granularity::Granularity;
use crate::domain::solaredge::{EnergyResponse, PowerResponse, TimeFrameEnergyResponse};
use crate::domain::time::{format_local_date, format_local_datetime};
use crate::infrastructure::config::SolarEdgeSettings;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

#[derive(Clone)]
pub struct SolarEdgeClient {
    client: Client,
    base_url: String,
    api_key: String,
    site_id: String,
}

impl SolarEdgeClient {
    pub fn new(settings: SolarEdgeSettings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("seindb/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build the HTTP client")?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key,
            site_id: settings.site_id,
        })
    }

    fn request(&self, resource: &str, params: &[(&str, String)]) -> RequestBuilder {
        let url = format!("{}/site/{}/{}", self.base_url, self.site_id, resource);
        self.client
            .get(url)
            .header("Accept", "application/json")
            .query(params)
            .query(&[("api_key", self.api_key.as_str())])
    }

    async fn fetch<T: DeserializeOwned>(&self, resource: &str, params: &[(&str, String)]) -> Result<T> {
        tracing::debug!(resource, ?params, "Requesting SolarEdge");

        let response = self
            .request(resource, params)
            .send()
            .await
            .context("Failed to send request to SolarEdge")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("SolarEdge request `{}` failed with status {}: {}", resource, status, body);
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse SolarEdge `{resource}` response"))
    }
}

#[async_trait]
impl TelemetrySource for SolarEdgeClient {
    async fn get_power(&self, begin: NaiveDateTime, end: NaiveDateTime) -> Result<PowerResponse> {
        let params = [
            ("startTime", format_local_datetime(begin)),
            ("endTime", format_local_datetime(end)),
        ];
        self.fetch("power", &params).await
    }

    async fn get_energy(
        &self,
        begin: NaiveDateTime,
        end: NaiveDateTime,
        granularity: Granularity,
    ) -> Result<EnergyResponse> {
        let params = [
            ("timeUnit", granularity.to_string()),
            ("startDate", format_local_date(begin)),
            ("endDate", format_local_date(end)),
        ];
        self.fetch("energy", &params).await
    }

    async fn get_time_frame_energy(
        &self,
        begin: NaiveDateTime,
        end: NaiveDateTime,
        granularity: Granularity,
    ) -> Result<TimeFrameEnergyResponse> {
        let params = [
            ("timeUnit", granularity.to_string()),
            ("startDate", format_local_date(begin)),
            ("endDate", format_local_date(end)),
        ];
        self.fetch("timeFrameEnergy", &params).await
    }
}
