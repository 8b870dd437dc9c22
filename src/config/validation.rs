//! Configuration validation.
//!
//! # Responsibilities
//! - Reject configurations the service cannot run with (no endpoints,
//!   blank names or URLs)
//! - Warn about suspicious but tolerated input (duplicate names, URLs that
//!   do not parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - A malformed URL is not fatal: it fails its own check at request time

use std::collections::HashSet;
use thiserror::Error;
use url::Url;

use crate::config::schema::HealthConfig;

/// A semantic problem in an otherwise well-formed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("need one or more endpoints")]
    NoEndpoints,

    #[error("endpoint #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("endpoint {name:?} has an empty url")]
    EmptyUrl { name: String },
}

/// Validate a parsed configuration.
pub fn validate_config(config: &HealthConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.endpoints.is_empty() {
        errors.push(ValidationError::NoEndpoints);
    }

    let mut seen = HashSet::new();
    for (index, endpoint) in config.endpoints.iter().enumerate() {
        if endpoint.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName { index });
        } else if !seen.insert(endpoint.name.as_str()) {
            tracing::warn!(endpoint = %endpoint.name, "Duplicate endpoint name");
        }

        if endpoint.url.trim().is_empty() {
            errors.push(ValidationError::EmptyUrl {
                name: endpoint.name.clone(),
            });
        } else if let Err(e) = Url::parse(&endpoint.url) {
            tracing::warn!(
                endpoint = %endpoint.name,
                url = %endpoint.url,
                error = %e,
                "Endpoint url does not parse, its check will always fail"
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
