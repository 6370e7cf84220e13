// Application layer - Use cases over the telemetry feed
pub mod chart_builder;
pub mod pipeline;
pub mod telemetry_source;
