// Application state for HTTP handlers
use crate::application::pipeline::ChartPipeline;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ChartPipeline>,
}
