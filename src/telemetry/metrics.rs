//! Service metrics.
//!
//! A single [`Metrics`] value is built at start-up around an explicit
//! [`Recorder`] and handed to every component that emits observations. No
//! global recorder is installed, so tests can observe a private recorder.

use std::sync::Arc;
use std::time::{Duration, Instant};

use metrics::{Key, KeyName, Label, Level, Metadata, Recorder, SharedString};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle, PrometheusRecorder};

pub const RPC_REQUESTS_TOTAL: &str = "account_rpc_requests_total";
pub const RPC_REQUEST_DURATION_SECONDS: &str = "account_rpc_request_duration_seconds";
pub const RPC_REQUESTS_IN_FLIGHT: &str = "account_rpc_requests_in_flight";
pub const DB_QUERIES_TOTAL: &str = "account_db_queries_total";
pub const DB_QUERY_DURATION_SECONDS: &str = "account_db_query_duration_seconds";
pub const DB_POOL_OPEN_CONNECTIONS: &str = "account_db_pool_open_connections";
pub const DB_POOL_IDLE_CONNECTIONS: &str = "account_db_pool_idle_connections";
pub const DB_POOL_IN_USE_CONNECTIONS: &str = "account_db_pool_in_use_connections";
pub const DB_POOL_MAX_CONNECTIONS: &str = "account_db_pool_max_connections";

/// Histogram buckets in seconds, 5ms up to 10s.
const LATENCY_BUCKETS: &[f64] = &[0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0];

/// Outcome label for a storage operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOutcome {
    Ok,
    Conflict,
    NotFound,
    Error,
}

impl DbOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DbOutcome::Ok => "ok",
            DbOutcome::Conflict => "conflict",
            DbOutcome::NotFound => "not_found",
            DbOutcome::Error => "error",
        }
    }
}

/// Point-in-time connection pool figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    pub open: u32,
    pub idle: u32,
    pub max: u32,
}

#[derive(Clone)]
pub struct Metrics {
    recorder: Arc<dyn Recorder + Send + Sync>,
}

impl Metrics {
    pub fn new(recorder: Arc<dyn Recorder + Send + Sync>) -> Self {
        let metrics = Self { recorder };
        metrics.describe();
        metrics
    }

    /// Discards every observation.
    pub fn noop() -> Self {
        Self::new(Arc::new(metrics::NoopRecorder))
    }

    fn describe(&self) {
        let r = &self.recorder;
        r.describe_counter(
            KeyName::from_const_str(RPC_REQUESTS_TOTAL),
            None,
            SharedString::const_str("Total RPC requests by method and code."),
        );
        r.describe_histogram(
            KeyName::from_const_str(RPC_REQUEST_DURATION_SECONDS),
            None,
            SharedString::const_str("RPC request latency in seconds by method and code."),
        );
        r.describe_gauge(
            KeyName::from_const_str(RPC_REQUESTS_IN_FLIGHT),
            None,
            SharedString::const_str("Current number of in-flight RPC requests."),
        );
        r.describe_counter(
            KeyName::from_const_str(DB_QUERIES_TOTAL),
            None,
            SharedString::const_str("Total DB method calls by method and status."),
        );
        r.describe_histogram(
            KeyName::from_const_str(DB_QUERY_DURATION_SECONDS),
            None,
            SharedString::const_str("DB method duration in seconds by method and status."),
        );
        r.describe_gauge(
            KeyName::from_const_str(DB_POOL_OPEN_CONNECTIONS),
            None,
            SharedString::const_str("Open database connections."),
        );
        r.describe_gauge(
            KeyName::from_const_str(DB_POOL_IDLE_CONNECTIONS),
            None,
            SharedString::const_str("Idle database connections."),
        );
        r.describe_gauge(
            KeyName::from_const_str(DB_POOL_IN_USE_CONNECTIONS),
            None,
            SharedString::const_str("In-use database connections."),
        );
        r.describe_gauge(
            KeyName::from_const_str(DB_POOL_MAX_CONNECTIONS),
            None,
            SharedString::const_str("Configured maximum of database connections."),
        );
    }

    fn metadata() -> Metadata<'static> {
        Metadata::new(module_path!(), Level::INFO, Some(module_path!()))
    }

    fn labelled(name: &'static str, labels: [(&'static str, String); 2]) -> Key {
        Key::from_parts(
            name,
            labels
                .into_iter()
                .map(|(k, v)| Label::new(k, v))
                .collect::<Vec<_>>(),
        )
    }

    pub fn observe_rpc(&self, method: &str, code: &str, elapsed: Duration) {
        let labels = [("method", method.to_string()), ("code", code.to_string())];
        let meta = Self::metadata();

        self.recorder
            .register_counter(&Self::labelled(RPC_REQUESTS_TOTAL, labels.clone()), &meta)
            .increment(1);
        self.recorder
            .register_histogram(&Self::labelled(RPC_REQUEST_DURATION_SECONDS, labels), &meta)
            .record(elapsed.as_secs_f64());
    }

    /// Counts one request as in flight until the guard is dropped.
    pub fn rpc_in_flight(&self) -> InFlightGuard {
        let gauge = self
            .recorder
            .register_gauge(&Key::from_static_name(RPC_REQUESTS_IN_FLIGHT), &Self::metadata());
        gauge.increment(1.0);
        InFlightGuard { gauge }
    }

    pub fn observe_db(&self, method: &'static str, outcome: DbOutcome, elapsed: Duration) {
        let labels = [
            ("method", method.to_string()),
            ("status", outcome.as_str().to_string()),
        ];
        let meta = Self::metadata();

        self.recorder
            .register_counter(&Self::labelled(DB_QUERIES_TOTAL, labels.clone()), &meta)
            .increment(1);
        self.recorder
            .register_histogram(&Self::labelled(DB_QUERY_DURATION_SECONDS, labels), &meta)
            .record(elapsed.as_secs_f64());
    }

    /// Starts timing a storage operation. The observation is recorded when
    /// the timer drops, as `error` unless [`DbTimer::finish`] said otherwise.
    pub fn db_timer(&self, method: &'static str) -> DbTimer {
        DbTimer {
            metrics: self.clone(),
            method,
            outcome: DbOutcome::Error,
            started: Instant::now(),
        }
    }

    pub fn record_pool_stats(&self, stats: PoolStats) {
        let meta = Self::metadata();
        let set = |name: &'static str, value: u32| {
            self.recorder
                .register_gauge(&Key::from_static_name(name), &meta)
                .set(f64::from(value));
        };

        set(DB_POOL_OPEN_CONNECTIONS, stats.open);
        set(DB_POOL_IDLE_CONNECTIONS, stats.idle);
        set(DB_POOL_IN_USE_CONNECTIONS, stats.open.saturating_sub(stats.idle));
        set(DB_POOL_MAX_CONNECTIONS, stats.max);
    }
}

pub struct InFlightGuard {
    gauge: metrics::Gauge,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.gauge.decrement(1.0);
    }
}

pub struct DbTimer {
    metrics: Metrics,
    method: &'static str,
    outcome: DbOutcome,
    started: Instant,
}

impl DbTimer {
    pub fn finish(mut self, outcome: DbOutcome) {
        self.outcome = outcome;
    }
}

impl Drop for DbTimer {
    fn drop(&mut self) {
        self.metrics
            .observe_db(self.method, self.outcome, self.started.elapsed());
    }
}

/// Builds the Prometheus recorder backing [`Metrics`] and the handle used
/// to render the scrape endpoint.
pub fn prometheus_recorder() -> Result<(Arc<PrometheusRecorder>, PrometheusHandle), BuildError> {
    let recorder = PrometheusBuilder::new()
        .set_buckets(LATENCY_BUCKETS)?
        .build_recorder();
    let handle = recorder.handle();

    Ok((Arc::new(recorder), handle))
}
