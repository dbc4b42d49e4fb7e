use std::time::Instant;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::{web, Error};
use tracing::{info, info_span, Instrument, Span};

use super::routes::RPC_METHODS;
use crate::shared::api::RpcCode;
use crate::telemetry::trace_context::TRACEPARENT_HEADER;
use crate::telemetry::{Telemetry, TraceContext};

/// Wraps every RPC with one request observation, one log line, the
/// in-flight gauge and a request span continued from `traceparent`.
pub async fn observe_rpc(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let Some(telemetry) = req.app_data::<web::Data<Telemetry>>().cloned() else {
        return next.call(req).await;
    };

    let method = rpc_method(req.path());
    let ctx = TraceContext::from_header_or_root(
        req.headers()
            .get(TRACEPARENT_HEADER)
            .and_then(|v| v.to_str().ok()),
    );

    let span = if telemetry.sampler.should_sample(&ctx) {
        info_span!(
            "rpc",
            rpc.method = %method,
            trace_id = %ctx.trace_id,
            parent_span_id = ctx.parent_span_id.as_deref().unwrap_or(""),
        )
    } else {
        Span::none()
    };

    let _in_flight = telemetry.metrics.rpc_in_flight();
    let started = Instant::now();

    let result = next.call(req).instrument(span.clone()).await;

    let elapsed = started.elapsed();
    let code = match &result {
        Ok(res) => RpcCode::from_http_status(res.status()),
        Err(err) => RpcCode::from_http_status(err.as_response_error().status_code()),
    };

    telemetry.metrics.observe_rpc(method, code.as_str(), elapsed);
    span.in_scope(|| {
        info!(
            method = %method,
            code = code.as_str(),
            duration_ms = elapsed.as_millis() as u64,
            "rpc request"
        );
    });

    result
}

/// Label used for paths that name no known RPC.
const UNKNOWN_METHOD: &str = "unknown";

/// `/account.v1.AccountService/GetAccount` -> `GetAccount`. Anything outside
/// [`RPC_METHODS`] collapses to one label so callers cannot mint new series.
fn rpc_method(path: &str) -> &'static str {
    let last = path.trim_end_matches('/').rsplit('/').next().unwrap_or(path);
    RPC_METHODS
        .iter()
        .copied()
        .find(|m| *m == last)
        .unwrap_or(UNKNOWN_METHOD)
}
