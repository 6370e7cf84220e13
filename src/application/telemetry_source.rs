// Source trait for the telemetry feed
use crate::domain::telemetry::TelemetryRecord;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach telemetry feed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("telemetry feed returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("telemetry feed response has unexpected shape: {0}")]
    ShapeMismatch(#[from] serde_json::Error),

    #[error("refresh was cancelled before the feed responded")]
    Cancelled,
}

#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// Fetch the full display window of readings, in feed order
    async fn fetch_records(&self) -> Result<Vec<TelemetryRecord>, FetchError>;
}
