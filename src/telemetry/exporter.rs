use std::sync::Arc;

use actix_web::{get, web, HttpResponse, Responder};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;

use crate::db;
use crate::telemetry::Metrics;

/// State of the scrape listener.
pub struct MetricsEndpoint {
    pub handle: PrometheusHandle,
    pub metrics: Metrics,
    pub db: Arc<DatabaseConnection>,
}

/// Prometheus scrape target. Pool gauges are refreshed per scrape.
#[get("/metrics")]
pub async fn metrics_handler(endpoint: web::Data<MetricsEndpoint>) -> impl Responder {
    if let Some(stats) = db::pool_stats(&endpoint.db) {
        endpoint.metrics.record_pool_stats(stats);
    }

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(endpoint.handle.render())
}
