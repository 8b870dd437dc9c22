//! Guaranteed outcome reporting for check tasks.
//!
//! # Responsibilities
//! - Deliver exactly one outcome per spawned check
//! - Turn a task that ends without reporting (panic, abort, runtime
//!   shutdown) into a failed outcome
//!
//! # Design Decisions
//! - The guard owns its endpoint until it reports; `Drop` reports a failure
//!   for whatever is still owned
//! - Sends use `try_send` on a channel with one slot per endpoint, so a
//!   reporter never waits on the collector

use tokio::sync::mpsc;

use crate::health::checker::CheckError;
use crate::health::endpoint::Endpoint;
use crate::health::verdict::Outcome;

/// An outcome tagged with the position of its endpoint in the set.
pub type Report = (usize, Outcome);

/// Report guard held by one check task.
#[derive(Debug)]
pub struct Reporter {
    index: usize,
    pending: Option<Endpoint>,
    tx: mpsc::Sender<Report>,
}

impl Reporter {
    pub fn new(index: usize, endpoint: Endpoint, tx: mpsc::Sender<Report>) -> Self {
        Self {
            index,
            pending: Some(endpoint),
            tx,
        }
    }

    /// Deliver the outcome and disarm the guard.
    pub fn report(mut self, outcome: Outcome) {
        self.pending = None;
        self.send(outcome);
    }

    fn send(&self, outcome: Outcome) {
        if let Err(e) = self.tx.try_send((self.index, outcome)) {
            // Closed means the request is gone; Full cannot happen with one
            // slot per endpoint.
            tracing::debug!(index = self.index, error = %e, "Outcome dropped, collector gone");
        }
    }
}

impl Drop for Reporter {
    fn drop(&mut self) {
        if let Some(endpoint) = self.pending.take() {
            let detail = CheckError::Unreported.to_string();
            tracing::warn!(
                endpoint = %endpoint.name,
                url = %endpoint.url,
                error = %detail,
                "checking endpoint failed"
            );
            self.send(Outcome::failure(endpoint, detail));
        }
    }
}
