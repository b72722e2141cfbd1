use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("telemetry API returned status {0}")]
    Status(StatusCode),

    #[error("network error: {0}")]
    Network(reqwest::Error),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("malformed telemetry response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}

impl Error {
    /// Transport failures are the only errors the demo fallback recovers from
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Status(_) | Error::Network(_) | Error::Timeout(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
