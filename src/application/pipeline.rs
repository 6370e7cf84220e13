// Chart pipeline - Fetch, align and build with a single in-flight refresh
use crate::application::chart_builder::ChartSpecBuilder;
use crate::application::telemetry_source::{FetchError, TelemetrySource};
use crate::domain::chart::ChartSpec;
use crate::domain::telemetry::TelemetrySeries;
use serde::{Serialize, Serializer};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;

/// What the chart consumer should render right now
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PipelineState {
    Loading,
    Failed {
        #[serde(serialize_with = "serialize_error")]
        error: Arc<FetchError>,
    },
    Ready {
        chart: ChartSpec,
    },
}

impl PipelineState {
    pub fn failed(error: FetchError) -> Self {
        Self::Failed {
            error: Arc::new(error),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

fn serialize_error<S>(error: &Arc<FetchError>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(error)
}

pub struct ChartPipeline {
    source: Arc<dyn TelemetrySource>,
    builder: ChartSpecBuilder,
    state: watch::Sender<PipelineState>,
    // Guards both the flag and every transition of `state`
    in_flight: Mutex<bool>,
}

impl ChartPipeline {
    pub fn new(source: Arc<dyn TelemetrySource>, builder: ChartSpecBuilder) -> Self {
        let (state, _) = watch::channel(PipelineState::Loading);
        Self {
            source,
            builder,
            state,
            in_flight: Mutex::new(false),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> PipelineState {
        self.state.borrow().clone()
    }

    /// Fetch the feed and rebuild the chart.
    ///
    /// If a refresh is already pending this does not issue another request;
    /// it waits for the pending one and returns its result.
    pub async fn refresh(&self) -> PipelineState {
        let pending = {
            let mut in_flight = self.lock_in_flight();
            if *in_flight {
                Some(self.state.subscribe())
            } else {
                *in_flight = true;
                self.state.send_replace(PipelineState::Loading);
                None
            }
        };

        if let Some(mut rx) = pending {
            tracing::debug!("Refresh already in flight, waiting for its result");
            return match rx.wait_for(|state| !state.is_loading()).await {
                Ok(state) => state.clone(),
                Err(_) => PipelineState::failed(FetchError::Cancelled),
            };
        }

        let guard = InFlight {
            pipeline: self,
            finished: false,
        };

        let next = match self.source.fetch_records().await {
            Ok(records) => {
                let series = TelemetrySeries::align(records);
                tracing::info!("Telemetry refresh complete: {} readings", series.len());
                PipelineState::Ready {
                    chart: self.builder.build(&series),
                }
            }
            Err(e) => {
                tracing::error!("Telemetry refresh failed: {}", e);
                PipelineState::failed(e)
            }
        };

        guard.finish(next.clone());
        next
    }

    fn publish(&self, next: PipelineState) {
        let mut in_flight = self.lock_in_flight();
        self.state.send_replace(next);
        *in_flight = false;
    }

    fn lock_in_flight(&self) -> MutexGuard<'_, bool> {
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Releases the in-flight slot even when the refresh future is dropped mid-fetch
struct InFlight<'a> {
    pipeline: &'a ChartPipeline,
    finished: bool,
}

impl InFlight<'_> {
    fn finish(mut self, next: PipelineState) {
        self.finished = true;
        self.pipeline.publish(next);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::warn!("Telemetry refresh dropped before the feed responded");
            self.pipeline
                .publish(PipelineState::failed(FetchError::Cancelled));
        }
    }
}
