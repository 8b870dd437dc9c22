//! Metrics collection and exposition.
//!
//! # Metrics
//! - `health_requests_total` (counter): health requests by result
//! - `health_request_duration_seconds` (histogram): aggregation latency
//! - `health_checks_total` (counter): checks by endpoint and result
//! - `health_check_duration_seconds` (histogram): per-endpoint probe latency
//! - `health_endpoint_up` (gauge): 1=last check ok, 0=failed
//!
//! Without an installed recorder every call is a no-op, which keeps the
//! library usable (and testable) without the exporter.

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

use crate::health::checker::CheckError;

/// Install the Prometheus recorder globally and return a handle for rendering.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    tracing::info!("Prometheus recorder installed");
    Ok(handle)
}

/// How often recorder buffers are drained between scrapes.
pub const UPKEEP_INTERVAL: Duration = Duration::from_secs(5);

/// Drain histogram buffers every `period` until `shutdown` fires.
///
/// `install_recorder` leaves upkeep to the caller, so `serve` spawns this
/// next to the monitor server.
pub async fn run_upkeep(handle: PrometheusHandle, period: Duration, shutdown: CancellationToken) {
    let mut ticker = tokio::time::interval(period);
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => return,
            _ = ticker.tick() => handle.run_upkeep(),
        }
    }
}

/// Record one answered `/health` request.
pub fn record_request(result: &'static str, start: Instant) {
    metrics::counter!("health_requests_total", "result" => result).increment(1);
    metrics::histogram!("health_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

/// Record the result of one endpoint check.
pub fn record_check(endpoint: &str, error: Option<&CheckError>, start: Instant) {
    let result = error.map_or("ok", CheckError::kind);
    let endpoint = endpoint.to_string();

    metrics::counter!("health_checks_total", "endpoint" => endpoint.clone(), "result" => result)
        .increment(1);
    metrics::histogram!("health_check_duration_seconds", "endpoint" => endpoint.clone())
        .record(start.elapsed().as_secs_f64());
    metrics::gauge!("health_endpoint_up", "endpoint" => endpoint)
        .set(if error.is_none() { 1.0 } else { 0.0 });
}
