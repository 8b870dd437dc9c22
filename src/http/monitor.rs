//! Monitoring listener: `/metrics` and `/info`.
//!
//! Served separately from `/health` so operational scrapes never share a
//! listener with load balancer probes.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

use crate::lifecycle::Shutdown;
use crate::observability::BuildInfo;

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

#[derive(Clone)]
struct MonitorState {
    metrics: PrometheusHandle,
    info: BuildInfo,
}

pub struct MonitorServer {
    router: Router,
    shutdown: CancellationToken,
}

impl MonitorServer {
    pub fn new(metrics: PrometheusHandle, info: BuildInfo, shutdown: &Shutdown) -> Self {
        let router = Router::new()
            .route("/metrics", get(metrics_handler))
            .route("/info", get(info_handler))
            .with_state(MonitorState { metrics, info })
            .layer(TraceLayer::new_for_http());

        Self {
            router,
            shutdown: shutdown.token(),
        }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Monitor server starting");

        let shutdown = self.shutdown;
        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await?;

        tracing::info!("Monitor server stopped");
        Ok(())
    }
}

async fn metrics_handler(State(state): State<MonitorState>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], state.metrics.render())
}

async fn info_handler(State(state): State<MonitorState>) -> Json<BuildInfo> {
    Json(state.info)
}
