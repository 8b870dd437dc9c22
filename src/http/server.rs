//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router for `/health`
//! - Wire up middleware (request ID, tracing)
//! - Serve until the shutdown token fires

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::health::{EndpointSet, HealthAggregator};
use crate::http::handlers::health_handler;
use crate::http::request::{self, MakeRequestUuid, X_REQUEST_ID};
use crate::lifecycle::Shutdown;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Endpoints checked on every request; immutable after startup.
    pub endpoints: EndpointSet,
    pub aggregator: HealthAggregator,
    /// Parent of every request's check context.
    pub shutdown: CancellationToken,
}

/// HTTP server answering `/health`.
pub struct HttpServer {
    router: Router,
    shutdown: CancellationToken,
}

impl HttpServer {
    pub fn new(endpoints: EndpointSet, aggregator: HealthAggregator, shutdown: &Shutdown) -> Self {
        let state = AppState {
            endpoints,
            aggregator,
            shutdown: shutdown.token(),
        };

        Self {
            router: Self::build_router(state),
            shutdown: shutdown.token(),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/health", any(health_handler))
            .with_state(state)
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http().make_span_with(request::make_span))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
    }

    /// The router, for embedding or driving it without a listener.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Health server starting");

        let shutdown = self.shutdown;
        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await?;

        tracing::info!("Health server stopped");
        Ok(())
    }
}
