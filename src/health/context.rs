//! Cancellation and deadline shared by the checks of one request.

use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Cancellation token plus a fixed deadline.
///
/// Derived from a parent token, so cancelling the parent (client disconnect,
/// server shutdown) cancels every check holding this context.
#[derive(Debug, Clone)]
pub struct CheckContext {
    token: CancellationToken,
    deadline: Instant,
}

impl CheckContext {
    /// Derive a child context that expires `timeout` from now.
    pub fn with_timeout(parent: &CancellationToken, timeout: Duration) -> Self {
        Self {
            token: parent.child_token(),
            deadline: Instant::now() + timeout,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Completes once the context is cancelled.
    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }
}
