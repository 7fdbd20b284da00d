//! Error types and handling for the tip splitter service.
//!
//! This module defines a unified error type for the process-level failures:
//! configuration loading and the transport layer. Request-level failures stay
//! `PricingError` and are answered over HTTP.

use thiserror::Error;

/// A specialized Result type for service operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the service.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] crate::core::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
