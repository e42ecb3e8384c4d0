//! Environment helpers shared by the client and server configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check the `.env.example` file for the variables each binary expects.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be used.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

/// Reads a required environment variable, rejecting blank values.
pub fn require_env(name: &str) -> Result<String, ConfigError> {
    optional_env(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an optional environment variable; blank values count as unset.
pub fn optional_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
