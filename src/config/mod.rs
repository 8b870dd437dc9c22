//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → HealthConfig (validated, immutable)
//!     → EndpointSet handed to the HTTP server once at startup
//! ```
//!
//! # Design Decisions
//! - Config is loaded once; there is no reload
//! - Unknown fields are rejected so typos surface at `testconfig` time
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_endpoints, ConfigError};
pub use schema::HealthConfig;
pub use validation::{validate_config, ValidationError};
