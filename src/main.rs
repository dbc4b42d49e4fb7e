pub mod api;
pub mod config;
pub mod db;
pub mod health;
pub mod modules;
pub mod shared;
pub mod telemetry;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::modules::account::adapter::incoming::web::routes as account_routes;
use crate::modules::account::adapter::outgoing::{
    AccountRepositoryPostgres, RandomHandleGenerator,
};
use crate::modules::account::application::account_use_cases::AccountUseCases;
use crate::shared::api::custom_json_config;
use crate::telemetry::exporter::{metrics_handler, MetricsEndpoint};
use crate::telemetry::logging::init_logging;
use crate::telemetry::metrics::prometheus_recorder;
use crate::telemetry::{Metrics, Telemetry, TraceSampler};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;

use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub account: AccountUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("invalid configuration")?;
    init_logging(config.log_format);

    info!(
        service = %config.tracing.service_name,
        environment = %env,
        tracing_enabled = config.tracing.enabled,
        "Starting application..."
    );

    // Metrics
    let (recorder, prometheus) =
        prometheus_recorder().context("failed to build metrics recorder")?;
    let metrics = Metrics::new(recorder);
    let telemetry = Telemetry {
        metrics: metrics.clone(),
        sampler: TraceSampler::new(config.tracing.enabled, config.tracing.sample_ratio),
    };

    // Database connection
    let conn = db::connect(&config.database)
        .await
        .context("failed to connect to database")?;

    if config.database.run_migrations {
        info!("Running database migrations");
        Migrator::up(&conn, None)
            .await
            .context("failed to run migrations")?;
    }

    let db_arc = Arc::new(conn);

    // Repositories and use cases
    let account_repo = AccountRepositoryPostgres::new(
        Arc::clone(&db_arc),
        metrics.clone(),
        config.database.query_timeout,
    );
    let state = AppState {
        account: AccountUseCases::new(account_repo, RandomHandleGenerator),
    };

    let shutdown_secs = config.shutdown_timeout.as_secs();

    // RPC listener
    let db_for_server = Arc::clone(&db_arc);
    let rpc_server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(telemetry.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .shutdown_timeout(shutdown_secs)
    .bind(config.rpc_addr)
    .with_context(|| format!("failed to bind RPC listener on {}", config.rpc_addr))?
    .run();

    // Scrape listener
    let db_for_metrics = Arc::clone(&db_arc);
    let metrics_server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(MetricsEndpoint {
                handle: prometheus.clone(),
                metrics: metrics.clone(),
                db: Arc::clone(&db_for_metrics),
            }))
            .service(metrics_handler)
    })
    .workers(1)
    .shutdown_timeout(shutdown_secs)
    .bind(config.metrics_addr)
    .with_context(|| format!("failed to bind metrics listener on {}", config.metrics_addr))?
    .run();

    info!(
        rpc_addr = %config.rpc_addr,
        metrics_addr = %config.metrics_addr,
        "Listening"
    );

    // Both servers stop on SIGINT/SIGTERM and drain for the shutdown timeout
    futures::future::try_join(rpc_server, metrics_server)
        .await
        .context("server terminated with an error")?;

    info!("Servers stopped, closing database pool");
    db::close(&db_arc).await;
    info!("Shutdown complete");

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Account RPCs
    account_routes::configure(cfg);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
