pub mod exporter;
pub mod logging;
pub mod metrics;
pub mod trace_context;

pub use self::metrics::{DbOutcome, Metrics, PoolStats};
pub use trace_context::{TraceContext, TraceSampler};

/// Observability collaborators shared with the request pipeline.
#[derive(Clone)]
pub struct Telemetry {
    pub metrics: Metrics,
    pub sampler: TraceSampler,
}
