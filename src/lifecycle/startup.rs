//! Startup orchestration for `health serve`.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Install the metrics recorder and its upkeep task
//! - Bind the health and monitor listeners
//! - Serve both until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listeners bind before serving starts, so a bad address aborts startup
//!   instead of leaving half a service running

use metrics_exporter_prometheus::BuildError;
use std::path::PathBuf;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{load_endpoints, ConfigError};
use crate::health::{EndpointChecker, HealthAggregator};
use crate::http::{HttpServer, MonitorServer};
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals;
use crate::observability::{metrics, BuildInfo};

pub const DEFAULT_ADDRESS: &str = "localhost:8000";
pub const DEFAULT_MONITOR_ADDRESS: &str = "localhost:8001";

#[derive(Debug, Clone)]
pub struct ServeOptions {
    /// Address serving `/health`.
    pub address: String,
    /// Address serving `/metrics` and `/info`.
    pub monitor_address: String,
    pub config_path: PathBuf,
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("parsing config file: {0}")]
    Config(#[from] ConfigError),

    #[error("installing metrics recorder: {0}")]
    Metrics(#[from] BuildError),

    #[error("building http client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("binding {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("serving: {0}")]
    Serve(#[from] std::io::Error),
}

async fn bind(address: &str) -> Result<TcpListener, StartupError> {
    TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.to_string(),
            source,
        })
}

/// Run the service until SIGINT/SIGTERM.
pub async fn serve(options: ServeOptions) -> Result<(), StartupError> {
    let endpoints = load_endpoints(&options.config_path)?;
    tracing::info!(
        path = %options.config_path.display(),
        endpoints = endpoints.len(),
        "Configuration loaded"
    );

    let metrics_handle = metrics::init_metrics()?;
    let client = reqwest::Client::builder().build()?;
    let info = BuildInfo::current();

    let listener = bind(&options.address).await?;
    let monitor_listener = bind(&options.monitor_address).await?;

    tracing::info!(
        version = %info.full_version(),
        address = %options.address,
        monitor_address = %options.monitor_address,
        "health listening"
    );

    let shutdown = Shutdown::new();
    let health = HttpServer::new(endpoints, HealthAggregator::new(EndpointChecker::new(client)), &shutdown);
    tokio::spawn(metrics::run_upkeep(metrics_handle.clone(), metrics::UPKEEP_INTERVAL, shutdown.token()));
    let monitor = MonitorServer::new(metrics_handle, info, &shutdown);

    tokio::spawn(signals::shutdown_on_signal(shutdown.clone()));

    let result = tokio::try_join!(health.run(listener), monitor.run(monitor_listener));
    shutdown.trigger();
    result?;

    tracing::info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_config_fails_before_binding() {
        let dir = tempfile::tempdir().unwrap();
        let options = ServeOptions {
            address: "127.0.0.1:0".into(),
            monitor_address: "127.0.0.1:0".into(),
            config_path: dir.path().join("missing.toml"),
        };

        let err = serve(options).await.unwrap_err();
        assert!(matches!(err, StartupError::Config(ConfigError::Io(_))));
        assert!(err.to_string().starts_with("parsing config file: "));
    }

    #[tokio::test]
    async fn bind_error_names_the_address() {
        let err = bind("not-an-address").await.unwrap_err();
        assert!(err.to_string().starts_with("binding not-an-address: "));
    }
}
