//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Health checks and handlers produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stderr (log aggregation)
//!     → /metrics on the monitor listener (Prometheus scrape)
//!     → /info on the monitor listener (build info)
//! ```

pub mod info;
pub mod logging;
pub mod metrics;

pub use info::BuildInfo;
