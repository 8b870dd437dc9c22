//! Configuration loading from disk.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::HealthConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::health::endpoint::EndpointSet;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<HealthConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: HealthConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load a configuration file and build the endpoint set from it.
pub fn load_endpoints(path: &Path) -> Result<EndpointSet, ConfigError> {
    let config = load_config(path)?;
    EndpointSet::new(config.endpoints)
        .map_err(|_| ConfigError::Validation(vec![ValidationError::NoEndpoints]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_endpoints_in_order() {
        let file = write_config(
            r#"
            [[endpoints]]
            name = "db"
            url = "http://localhost:5433/health"

            [[endpoints]]
            name = "search"
            url = "http://localhost:9200/"
            "#,
        );

        let endpoints = load_endpoints(file.path()).unwrap();
        let names: Vec<_> = endpoints.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["db", "search"]);
    }

    #[test]
    fn empty_file_fails_validation() {
        let file = write_config("");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref errors) if errors == &[ValidationError::NoEndpoints]));
        assert_eq!(err.to_string(), "Validation failed: need one or more endpoints");
    }

    #[test]
    fn syntax_error_is_parse_error() {
        let file = write_config("[[endpoints]\nname = ");
        assert!(matches!(load_config(file.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("health.toml");
        assert!(matches!(load_config(&missing), Err(ConfigError::Io(_))));
    }
}
