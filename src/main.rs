// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::chart_builder::ChartSpecBuilder;
use crate::application::pipeline::ChartPipeline;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::http_feed::HttpFeedSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let app_config = load_app_config()?;

    // Create feed source (infrastructure layer)
    let source = Arc::new(HttpFeedSource::new(app_config.feed.endpoint.clone()));

    // Create pipeline (application layer)
    let pipeline = Arc::new(ChartPipeline::new(source, ChartSpecBuilder::new()));

    // Kick off the first fetch; handlers report Loading until it lands
    let initial = pipeline.clone();
    tokio::spawn(async move {
        initial.refresh().await;
    });

    let state = Arc::new(AppState { pipeline });

    let addr = app_config.server.bind;
    tracing::info!(
        "Starting climate-chart service on {} (feed: {})",
        addr,
        app_config.feed.endpoint
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router(state)).await?;

    Ok(())
}
