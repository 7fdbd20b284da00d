//! Transport configuration types.

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};

/// HTTP transport configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_cors() -> bool {
    true
}

const DEFAULT_PORT: u16 = 8000;

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: default_host(),
            enable_cors: default_cors(),
        }
    }
}

impl HttpConfig {
    /// Create an HTTP config bound to the given host and port.
    pub fn new(port: u16, host: impl Into<String>) -> Self {
        Self {
            port,
            host: host.into(),
            ..Default::default()
        }
    }

    /// Load HTTP config from a key lookup (environment variables in practice).
    ///
    /// A port that is set but not a valid `u16` is an error rather than a
    /// silent fallback.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("TIP_SPLITTER_HTTP_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                Error::config(format!("TIP_SPLITTER_HTTP_PORT is not a valid port: {raw:?}"))
            })?,
            None => DEFAULT_PORT,
        };
        let host = lookup("TIP_SPLITTER_HTTP_HOST").unwrap_or_else(default_host);
        let enable_cors = lookup("TIP_SPLITTER_HTTP_CORS")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true);

        Ok(Self {
            port,
            host,
            enable_cors,
        })
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        format!("HTTP on {}", self.address())
    }
}
