//! Health aggregation subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound /health request:
//!     → aggregator.rs (derive CheckContext with the shared deadline)
//!     → spawn one checker.rs task per endpoint
//!     → each task reports exactly one Outcome (report.rs guard)
//!     → aggregator collects N outcomes
//!     → verdict.rs (healthy, or the set of failed names)
//! ```
//!
//! # Design Decisions
//! - Every check shares one deadline; total latency is bounded by it
//! - Per-endpoint errors never escape a check, they become failed outcomes
//! - The report channel holds one slot per endpoint, so reporting never blocks
//! - The endpoint set is immutable and shared without locking

pub mod aggregator;
pub mod checker;
pub mod context;
pub mod endpoint;
pub mod report;
pub mod verdict;

pub use aggregator::{HealthAggregator, CHECK_TIMEOUT};
pub use checker::{CheckError, EndpointChecker};
pub use context::CheckContext;
pub use endpoint::{EmptyEndpointSet, Endpoint, EndpointSet};
pub use verdict::{AggregateVerdict, Outcome};
