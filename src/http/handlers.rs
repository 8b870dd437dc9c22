//! The `/health` responder.

use axum::extract::State;
use axum::http::Method;
use axum::response::Response;
use std::time::Instant;

use crate::http::response::{method_not_allowed, render_verdict};
use crate::http::server::AppState;
use crate::observability::metrics;

/// Aggregate every configured endpoint and answer with the verdict.
///
/// Only GET and HEAD run checks. If the client goes away, the handler future
/// is dropped, and with it the aggregation, which cancels the probes still
/// in flight.
pub async fn health_handler(State(state): State<AppState>, method: Method) -> Response {
    let start = Instant::now();

    if method != Method::GET && method != Method::HEAD {
        tracing::debug!(method = %method, "Rejecting health request");
        metrics::record_request("method_not_allowed", start);
        return method_not_allowed();
    }

    let verdict = state.aggregator.aggregate(&state.shutdown, &state.endpoints).await;

    if verdict.is_healthy() {
        metrics::record_request("healthy", start);
    } else {
        tracing::info!(failed = ?verdict.failed_names(), elapsed = ?start.elapsed(), "Reporting unhealthy");
        metrics::record_request("unhealthy", start);
    }
    render_verdict(&verdict)
}
