//! Transport layer for the service.
//!
//! Serves the pricing pipeline over HTTP (axum). The transport handles the
//! connection lifecycle and delegates request processing to `PriceServer`.

mod config;
mod error;
pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use self::http::{HttpTransport, router};
