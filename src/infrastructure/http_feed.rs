// HTTP feed source implementation
use crate::application::telemetry_source::{FetchError, TelemetrySource};
use crate::domain::telemetry::TelemetryRecord;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct FeedResponse {
    body: Vec<TelemetryRecord>,
}

#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFeedSource {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

/// Decode a feed payload; any missing or mistyped field is a shape mismatch
pub fn decode_feed(payload: &[u8]) -> Result<Vec<TelemetryRecord>, FetchError> {
    let response: FeedResponse = serde_json::from_slice(payload)?;
    Ok(response.body)
}

#[async_trait]
impl TelemetrySource for HttpFeedSource {
    async fn fetch_records(&self) -> Result<Vec<TelemetryRecord>, FetchError> {
        tracing::debug!("Fetching telemetry feed from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let payload = response.bytes().await?;
        let records = decode_feed(&payload)?;

        tracing::debug!("Telemetry feed returned {} records", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/feed", addr)
    }

    #[test]
    fn test_decode_feed() {
        let payload = br#"{"body":[
            {"datetime":"2024-01-01T00:00","temperature":3,"humidity":96},
            {"datetime":"2024-01-01T01:00","temperature":2.5,"humidity":97.5}
        ]}"#;

        let records = decode_feed(payload).unwrap();

        assert_eq!(
            records,
            vec![
                TelemetryRecord::new("2024-01-01T00:00", 3.0, 96.0),
                TelemetryRecord::new("2024-01-01T01:00", 2.5, 97.5),
            ]
        );
    }

    #[test]
    fn test_decode_empty_body() {
        assert!(decode_feed(br#"{"body":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn test_decode_missing_field_is_shape_mismatch() {
        let payload = br#"{"body":[{"datetime":"2024-01-01T00:00","temperature":3}]}"#;
        assert!(matches!(decode_feed(payload), Err(FetchError::ShapeMismatch(_))));
    }

    #[test]
    fn test_decode_missing_body_is_shape_mismatch() {
        assert!(matches!(decode_feed(br#"{"items":[]}"#), Err(FetchError::ShapeMismatch(_))));
        assert!(matches!(decode_feed(b"not json"), Err(FetchError::ShapeMismatch(_))));
    }

    #[tokio::test]
    async fn test_fetch_records_over_http() {
        let router = Router::new().route(
            "/feed",
            get(|| async {
                r#"{"body":[{"datetime":"2024-01-01T00:00","temperature":3,"humidity":96}]}"#
            }),
        );
        let source = HttpFeedSource::new(serve(router).await);

        let records = source.fetch_records().await.unwrap();

        assert_eq!(records, vec![TelemetryRecord::new("2024-01-01T00:00", 3.0, 96.0)]);
    }

    #[tokio::test]
    async fn test_fetch_records_non_success_status() {
        let router = Router::new().route(
            "/feed",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
        );
        let source = HttpFeedSource::new(serve(router).await);

        match source.fetch_records().await {
            Err(FetchError::Status { status, body }) => {
                assert_eq!(status, reqwest::StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(body, "maintenance");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_records_unreachable_endpoint() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpFeedSource::new(format!("http://{}/feed", addr));

        assert!(matches!(source.fetch_records().await, Err(FetchError::Transport(_))));
    }
}
