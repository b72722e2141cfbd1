use crate::demo;
use crate::errors::{Error, Result};
use crate::model::{DateRange, TelemetryRecord};
use anyhow::Context;
use reqwest::header::ACCEPT;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Whether fetches hit the live API or the synthetic generator.
/// Demo mode is an explicit configuration choice, never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Live,
    Demo,
}

pub struct TelemetryClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    object_id: String,
    timeout: Duration,
    mode: FetchMode,
}

impl TelemetryClient {
    pub fn new(
        base_url: String,
        api_key: String,
        object_id: String,
        mode: FetchMode,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url,
            api_key,
            object_id,
            timeout,
            mode,
        })
    }

    pub fn mode(&self) -> FetchMode {
        self.mode
    }

    pub fn object_id(&self) -> &str {
        &self.object_id
    }

    /// Fetches telemetry for the configured object over `range`.
    pub async fn fetch(&self, range: &DateRange) -> Result<Vec<TelemetryRecord>> {
        if self.mode == FetchMode::Demo {
            info!("demo mode: generating synthetic history");
            return Ok(demo::synthetic_history(&self.object_id, range.to));
        }

        let url = format!(
            "{}/objects/{}/coordinates",
            self.base_url.trim_end_matches('/'),
            self.object_id
        );
        debug!("GET {} from={} to={}", url, range.from, range.to);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("version", "2".to_string()),
                ("from_datetime", range.from.to_rfc3339()),
                ("to_datetime", range.to.to_rfc3339()),
            ])
            .header(ACCEPT, "application/json")
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("telemetry API returned {}", status);
            return Err(Error::Status(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        // Decode against the full record schema; malformed bodies stop here
        let records: Vec<TelemetryRecord> = serde_json::from_slice(&body)?;
        debug!("decoded {} records", records.len());
        Ok(records)
    }

    fn transport_error(&self, cause: reqwest::Error) -> Error {
        if cause.is_timeout() {
            Error::Timeout(self.timeout)
        } else {
            Error::Network(cause)
        }
    }
}
