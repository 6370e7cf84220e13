// Telemetry data domain models
use serde::Deserialize;

/// One reading from the display feed
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TelemetryRecord {
    #[serde(rename = "datetime")]
    pub timestamp: String,
    pub temperature: f64,
    pub humidity: f64,
}

impl TelemetryRecord {
    pub fn new(timestamp: impl Into<String>, temperature: f64, humidity: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            temperature,
            humidity,
        }
    }
}

/// Index-aligned per-metric sequences.
///
/// Index `i` of `labels`, `temperature` and `humidity` always refers to the
/// same source record, in feed order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelemetrySeries {
    pub labels: Vec<String>,
    pub temperature: Vec<f64>,
    pub humidity: Vec<f64>,
}

impl TelemetrySeries {
    /// Split records into parallel sequences without reordering or filtering
    pub fn align(records: Vec<TelemetryRecord>) -> Self {
        let mut series = Self {
            labels: Vec::with_capacity(records.len()),
            temperature: Vec::with_capacity(records.len()),
            humidity: Vec::with_capacity(records.len()),
        };

        for record in records {
            series.labels.push(record.timestamp);
            series.temperature.push(record.temperature);
            series.humidity.push(record.humidity);
        }

        series
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
