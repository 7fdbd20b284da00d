//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the service:
//! error handling, configuration, the server handle and the HTTP transport.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::PriceServer;
pub use transport::{HttpConfig, HttpTransport};
