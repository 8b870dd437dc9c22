//! Single-endpoint probing.
//!
//! # Responsibilities
//! - Issue one HTTP GET per check, bound to the request's deadline and
//!   cancellation
//! - Classify the result as ok (2xx) or failed
//! - Log failures with endpoint name, URL and detail
//!
//! # Design Decisions
//! - No retries; redirects follow the client's default policy
//! - Every error is folded into a failed outcome here, callers only ever
//!   see an [`Outcome`]

use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};
use std::time::Instant;
use thiserror::Error;
use url::Url;

use crate::health::context::CheckContext;
use crate::health::endpoint::Endpoint;
use crate::health::verdict::Outcome;
use crate::observability::metrics;

const USER_AGENT_VALUE: &str = concat!("health-aggregator/", env!("CARGO_PKG_VERSION"));

/// Why a single check failed.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("http get: invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("http get: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("http get: deadline exceeded")]
    DeadlineExceeded,

    #[error("http get: cancelled")]
    Cancelled,

    #[error("http response: status {0}")]
    Status(StatusCode),

    #[error("check ended without reporting an outcome")]
    Unreported,
}

impl CheckError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            CheckError::InvalidUrl(_) => "invalid_url",
            CheckError::Transport(_) => "transport",
            CheckError::DeadlineExceeded => "deadline",
            CheckError::Cancelled => "cancelled",
            CheckError::Status(_) => "status",
            CheckError::Unreported => "unreported",
        }
    }
}

/// Probes endpoints over HTTP.
///
/// Cheap to clone; clones share the underlying client.
#[derive(Debug, Clone, Default)]
pub struct EndpointChecker {
    client: Client,
}

impl EndpointChecker {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Check one endpoint. Always returns an outcome.
    pub async fn check(&self, ctx: &CheckContext, endpoint: &Endpoint) -> Outcome {
        let start = Instant::now();
        let result = self.probe(ctx, endpoint).await;
        metrics::record_check(&endpoint.name, result.as_ref().err(), start);

        match result {
            Ok(()) => {
                tracing::debug!(endpoint = %endpoint.name, elapsed = ?start.elapsed(), "Endpoint healthy");
                Outcome::success(endpoint.clone())
            }
            Err(e) => {
                tracing::warn!(
                    endpoint = %endpoint.name,
                    url = %endpoint.url,
                    error = %e,
                    "checking endpoint failed"
                );
                Outcome::failure(endpoint.clone(), e.to_string())
            }
        }
    }

    async fn probe(&self, ctx: &CheckContext, endpoint: &Endpoint) -> Result<(), CheckError> {
        let url = Url::parse(&endpoint.url)?;
        let request = self
            .client
            .get(url)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .send();

        let response = tokio::select! {
            biased;
            _ = ctx.cancelled() => return Err(CheckError::Cancelled),
            result = tokio::time::timeout_at(ctx.deadline(), request) => match result {
                Ok(response) => response.map_err(CheckError::Transport)?,
                Err(_) => return Err(CheckError::DeadlineExceeded),
            },
        };

        // Status alone decides; the body is never read.
        let status = response.status();
        drop(response);
        if !status.is_success() {
            return Err(CheckError::Status(status));
        }
        Ok(())
    }
}
