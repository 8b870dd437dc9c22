//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Install metrics → Bind listeners → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Cancel root token → In-flight checks fail fast
//!     → Servers stop accepting and drain → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The shutdown token is the root of every request's check context

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{serve, ServeOptions, StartupError};
