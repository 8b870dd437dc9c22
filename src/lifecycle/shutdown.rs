//! Shutdown coordination.

use tokio_util::sync::CancellationToken;

/// Coordinator for graceful shutdown.
///
/// Hands out child tokens to servers and request handlers; triggering the
/// coordinator cancels all of them.
#[derive(Debug, Clone)]
pub struct Shutdown {
    root: CancellationToken,
}

impl Shutdown {
    pub fn new() -> Self {
        Self {
            root: CancellationToken::new(),
        }
    }

    /// A token cancelled when shutdown is triggered.
    pub fn token(&self) -> CancellationToken {
        self.root.child_token()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        self.root.cancel();
    }

    pub fn is_triggered(&self) -> bool {
        self.root.is_cancelled()
    }

    /// Wait until shutdown is triggered.
    pub async fn wait(&self) {
        self.root.cancelled().await
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
