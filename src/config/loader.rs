//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::CounterConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable holding the listening port.
pub const PORT_VAR: &str = "PORT";
/// Environment variable holding the deployment environment name.
pub const ENVIRONMENT_VAR: &str = "APP_ENV";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid value '{value}' for environment variable {var}")]
    Env { var: &'static str, value: String },
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<CounterConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: CounterConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Resolve the runtime configuration.
///
/// Starts from the file at `path` (or defaults when absent), applies
/// environment overrides, then validates the result.
pub fn resolve_config(path: Option<&Path>) -> Result<CounterConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => CounterConfig::default(),
    };

    apply_env_overrides(&mut config, |var| std::env::var(var).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply `PORT` and `APP_ENV` overrides read through `lookup`.
pub fn apply_env_overrides<F>(config: &mut CounterConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(PORT_VAR) {
        config.server.port = value.trim().parse().map_err(|_| ConfigError::Env {
            var: PORT_VAR,
            value: value.clone(),
        })?;
    }

    if let Some(value) = lookup(ENVIRONMENT_VAR) {
        if !value.is_empty() {
            config.environment = value;
        }
    }

    Ok(())
}
