// Domain layer - Telemetry, chart descriptor and axis scaling
pub mod axis_scaler;
pub mod chart;
pub mod telemetry;
