//! Pricing domain module.
//!
//! Splits a bill, tip included, between several people.
//!
//! ## Architecture
//!
//! - `constraints.rs` - Field descriptors (name, numeric type, lower bound)
//! - `request.rs` - Body validation into a `PriceRequest`
//! - `calculator.rs` - Per-person share and its display string
//! - `envelope.rs` - Error envelope returned for rejected requests
//! - `violation.rs` - Field-level violation records
//! - `error.rs` - Pricing error types

pub mod calculator;
pub mod constraints;
mod envelope;
mod error;
pub mod request;
mod violation;

pub use calculator::{PriceResult, calculate};
pub use envelope::{ENVELOPE_MESSAGE, ErrorEnvelope};
pub use error::PricingError;
pub use request::PriceRequest;
pub use violation::{FieldViolation, Location, ViolationKind};
