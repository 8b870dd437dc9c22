//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::health::endpoint::Endpoint;

/// Root configuration for the health service.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct HealthConfig {
    /// Endpoints that must all answer 2xx for the host to be healthy.
    pub endpoints: Vec<Endpoint>,
}

const DESCRIBE_HEADER: &str = "\
# Endpoints checked on every request to /health.
#
# Each endpoint is probed with an HTTP GET. The host is healthy only if every
# endpoint answers with a 2xx status within 5 seconds. Unhealthy endpoints are
# listed by name in the 500 response body.
";

impl HealthConfig {
    /// A small configuration showing every field.
    pub fn example() -> Self {
        Self {
            endpoints: vec![
                Endpoint::new("database", "http://localhost:5433/health"),
                Endpoint::new("search", "http://localhost:9200/_cluster/health"),
            ],
        }
    }

    /// Render the example configuration with explanatory comments.
    pub fn describe() -> Result<String, toml::ser::Error> {
        let body = toml::to_string_pretty(&Self::example())?;
        Ok(format!("{DESCRIBE_HEADER}\n{body}"))
    }
}
