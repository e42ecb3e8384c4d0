use std::net::SocketAddr;

use crate::{
    config::{optional_env, require_env},
    server::error::{config::ConfigError, AppError},
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    /// Shared secret expected in the `api_key` query parameter.
    pub api_key: String,

    pub bind_addr: SocketAddr,
    /// Browser origin allowed by CORS; any origin when unset.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_addr = optional_env("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                name: "BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            api_key: require_env("FORUM_API_KEY")?,
            bind_addr,
            cors_origin: optional_env("CORS_ORIGIN"),
        })
    }
}
