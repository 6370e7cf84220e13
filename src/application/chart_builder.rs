// Chart builder - Turns aligned telemetry into a dual-axis chart descriptor
use crate::domain::axis_scaler::compute_bound;
use crate::domain::chart::{Axis, AxisId, ChartSpec, Dataset};
use crate::domain::telemetry::TelemetrySeries;

pub const TEMPERATURE_ID: &str = "temperature";
pub const HUMIDITY_ID: &str = "humidity";

#[derive(Debug, Clone, Default)]
pub struct ChartSpecBuilder;

impl ChartSpecBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the descriptor: temperature on the left axis, humidity on the right.
    ///
    /// Only upper bounds are computed, from each metric's maximum reading.
    pub fn build(&self, series: &TelemetrySeries) -> ChartSpec {
        let temperature_max = Self::upper_bound(&series.temperature);
        let humidity_max = Self::upper_bound(&series.humidity);

        tracing::debug!(
            "Building chart for {} points (temperature max {:?}, humidity max {:?})",
            series.len(),
            temperature_max,
            humidity_max
        );

        let datasets = vec![
            Dataset::new(
                TEMPERATURE_ID,
                "Temperature",
                series.temperature.clone(),
                AxisId::Left,
            ),
            Dataset::new(HUMIDITY_ID, "Humidity", series.humidity.clone(), AxisId::Right),
        ];

        let axes = vec![
            Axis::new(AxisId::Left, "Temperature (°C)", temperature_max),
            Axis::new(AxisId::Right, "Humidity (%)", humidity_max),
        ];

        ChartSpec::new(series.labels.clone(), datasets, axes)
    }

    fn upper_bound(values: &[f64]) -> Option<f64> {
        // f64::max skips NaN, so a single bad reading doesn't blank the axis
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        max.is_finite().then(|| compute_bound(max))
    }
}
