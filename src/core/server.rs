//! Service handle and lifecycle management.
//!
//! `PriceServer` owns the configuration and runs the validate → calculate
//! pipeline for a request body. Transports hold a clone and delegate to it.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use super::error::Result;
use super::transport::HttpTransport;
use crate::domains::pricing::{PriceRequest, PriceResult, PricingError, calculate};

/// The main service handler.
#[derive(Debug, Clone)]
pub struct PriceServer {
    /// Server configuration.
    config: Arc<Config>,
}

impl PriceServer {
    /// Create a new server with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Validate a raw request body and compute the per-person share.
    #[instrument(skip_all, fields(body_len = body.len()))]
    pub fn quote(&self, body: &[u8]) -> std::result::Result<PriceResult, PricingError> {
        let request = PriceRequest::from_slice(body).inspect_err(|e| {
            warn!("Rejected price request: {}", e);
        })?;

        let result = calculate(&request);
        info!(
            price = request.price(),
            people = request.people(),
            tip = request.tip(),
            amount_per_person = result.amount_per_person,
            "Computed price per person"
        );

        Ok(result)
    }

    /// Serve HTTP until the listener fails.
    pub async fn run(self) -> Result<()> {
        let transport = HttpTransport::new(self.config.transport.clone());
        transport.run(self).await?;
        Ok(())
    }
}
