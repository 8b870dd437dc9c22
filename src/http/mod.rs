//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Health listener:
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, span)
//!     → handlers.rs (method check, aggregation)
//!     → response.rs (render verdict)
//!
//! Monitor listener:
//!     → monitor.rs (/metrics, /info)
//! ```

pub mod handlers;
pub mod monitor;
pub mod request;
pub mod response;
pub mod server;

pub use monitor::MonitorServer;
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
