//! Aggregated health endpoint.
//!
//! Serves `/health` as a single verdict over a fixed set of remote
//! endpoints: every request probes all of them concurrently under one
//! shared deadline and answers 200 only if all of them answered 2xx.
//!
//! # Architecture Overview
//!
//! ```text
//!     GET /health ──▶ http::handlers ──▶ health::aggregator
//!                                             │
//!                         ┌───────────────────┼───────────────────┐
//!                         ▼                   ▼                   ▼
//!                  health::checker     health::checker     health::checker
//!                         │                   │                   │
//!                         └────── one Outcome each (report guard) ┘
//!                                             │
//!     200 ok / 500 unhealthy ◀── http::response ◀── AggregateVerdict
//! ```

pub mod config;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::HealthConfig;
pub use health::{AggregateVerdict, Endpoint, EndpointChecker, EndpointSet, HealthAggregator};
pub use http::{HttpServer, MonitorServer};
pub use lifecycle::Shutdown;
