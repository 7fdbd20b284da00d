//! Configuration management for the tip splitter service.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (a `.env` file is honoured) or defaults.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::Result;
use super::transport::HttpConfig;

/// Main configuration structure for the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP transport configuration.
    pub transport: HttpConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported on the health endpoint.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "tip-splitter".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: HttpConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `TIP_SPLITTER_`.
    /// For example: `TIP_SPLITTER_SERVER_NAME`, `TIP_SPLITTER_LOG_LEVEL`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(name) = lookup("TIP_SPLITTER_SERVER_NAME") {
            config.server.name = name;
        }

        if let Some(level) = lookup("TIP_SPLITTER_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = HttpConfig::from_lookup(&lookup)?;
        info!("Configuration loaded: {}", config.transport.description());

        Ok(config)
    }
}
