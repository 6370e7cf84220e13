// Chart descriptor domain model
use serde::Serialize;

/// Which of the two value axes a dataset is plotted against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisId {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub id: String,
    pub label: String,
    pub values: Vec<f64>,
    pub axis: AxisId,
}

impl Dataset {
    pub fn new(id: &str, label: &str, values: Vec<f64>, axis: AxisId) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            values,
            axis,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub id: AxisId,
    pub title: String,
    /// Suggested maximum; `None` when the metric had no finite reading
    pub max: Option<f64>,
}

impl Axis {
    pub fn new(id: AxisId, title: &str, max: Option<f64>) -> Self {
        Self {
            id,
            title: title.to_string(),
            max,
        }
    }
}

/// Everything the rendering widget needs for one refresh
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub axes: Vec<Axis>,
}

impl ChartSpec {
    pub fn new(labels: Vec<String>, datasets: Vec<Dataset>, axes: Vec<Axis>) -> Self {
        Self {
            labels,
            datasets,
            axes,
        }
    }

    pub fn dataset(&self, id: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.id == id)
    }

    pub fn axis(&self, id: AxisId) -> Option<&Axis> {
        self.axes.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_axis_ids_lowercase() {
        let spec = ChartSpec::new(
            vec!["t0".to_string()],
            vec![Dataset::new("temperature", "Temperature", vec![3.0], AxisId::Left)],
            vec![Axis::new(AxisId::Left, "Temperature (°C)", Some(0.0))],
        );

        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["datasets"][0]["axis"], "left");
        assert_eq!(json["axes"][0]["id"], "left");
        assert_eq!(json["axes"][0]["max"], 0.0);
    }

    #[test]
    fn test_missing_bound_serializes_as_null() {
        let axis = Axis::new(AxisId::Right, "Humidity (%)", None);
        let json = serde_json::to_value(&axis).unwrap();
        assert!(json["max"].is_null());
    }
}
