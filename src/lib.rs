//! Tip Splitter Library
//!
//! An HTTP service that splits a bill, tip included, between several people,
//! and answers malformed requests with a per-field error envelope.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the server handle and the HTTP transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **pricing**: Request validation, the per-person calculation and the error envelope
//!
//! # Example
//!
//! ```rust,no_run
//! use tip_splitter::core::{Config, PriceServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     PriceServer::new(config).run().await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, PriceServer, Result};
