//! Concurrent fan-out and verdict aggregation.
//!
//! # Responsibilities
//! - Derive one bounded context per request and share it with every check
//! - Spawn one check task per endpoint
//! - Collect exactly one outcome per endpoint
//! - Reduce outcomes to an [`AggregateVerdict`]
//!
//! # Design Decisions
//! - Collection waits for N outcomes, not for the deadline; every probe is
//!   itself bound to the deadline, so N outcomes arrive by then
//! - The derived context is cancelled when aggregation finishes or is
//!   dropped, so abandoned requests do not leave probes running

use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::health::checker::EndpointChecker;
use crate::health::context::CheckContext;
use crate::health::endpoint::EndpointSet;
use crate::health::report::{Report, Reporter};
use crate::health::verdict::{AggregateVerdict, Outcome};

/// Deadline shared by all checks of one health request.
pub const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct HealthAggregator {
    checker: EndpointChecker,
    timeout: Duration,
}

impl HealthAggregator {
    pub fn new(checker: EndpointChecker) -> Self {
        Self {
            checker,
            timeout: CHECK_TIMEOUT,
        }
    }

    /// Override the shared deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Check every endpoint concurrently and derive the verdict.
    ///
    /// Cancelling `parent` fails all in-flight checks promptly.
    pub async fn aggregate(&self, parent: &CancellationToken, endpoints: &EndpointSet) -> AggregateVerdict {
        let ctx = CheckContext::with_timeout(parent, self.timeout);
        let _cancel_on_exit = ctx.token().clone().drop_guard();

        let expected = endpoints.len();
        let (tx, mut rx) = mpsc::channel::<Report>(expected);

        tracing::debug!(endpoints = expected, timeout = ?self.timeout, "Dispatching health checks");

        for (index, endpoint) in endpoints.iter().enumerate() {
            let reporter = Reporter::new(index, endpoint.clone(), tx.clone());
            let checker = self.checker.clone();
            let ctx = ctx.clone();
            let endpoint = endpoint.clone();

            tokio::spawn(async move {
                let outcome = checker.check(&ctx, &endpoint).await;
                reporter.report(outcome);
            });
        }
        drop(tx);

        let mut outcomes = Vec::with_capacity(expected);
        let mut reported = vec![false; expected];
        while outcomes.len() < expected {
            match rx.recv().await {
                Some((index, outcome)) => {
                    reported[index] = true;
                    outcomes.push(outcome);
                }
                None => break,
            }
        }

        if outcomes.len() < expected {
            tracing::error!(
                expected,
                received = outcomes.len(),
                "Report channel closed early, counting missing endpoints as failed"
            );
            for (index, endpoint) in endpoints.iter().enumerate() {
                if !reported[index] {
                    outcomes.push(Outcome::failure(endpoint.clone(), "no outcome reported"));
                }
            }
        }

        let verdict = AggregateVerdict::from_outcomes(outcomes);
        tracing::debug!(healthy = verdict.is_healthy(), failed = ?verdict.failed_names(), "Health checks collected");
        verdict
    }
}

impl Default for HealthAggregator {
    fn default() -> Self {
        Self::new(EndpointChecker::default())
    }
}
