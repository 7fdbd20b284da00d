//! Price request validation.
//!
//! Turns an untrusted request body into a [`PriceRequest`] or the complete
//! list of what is wrong with it. Field checks never short-circuit: a body
//! with three bad fields yields three violations, in declaration order.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::constraints::{PEOPLE, PRICE, TIP, WholeNumber};
use super::error::PricingError;
use super::violation::{FieldViolation, Location, ViolationKind};

const BODY_LOC: &str = "body";
const NOT_AN_OBJECT_MSG: &str =
    "Input should be a valid dictionary or object to extract fields from";

/// A validated bill-splitting request.
///
/// Only obtainable through [`PriceRequest::from_slice`] or
/// [`PriceRequest::from_value`], so every instance satisfies the field bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRequest {
    price: f64,
    people: WholeNumber,
    tip: f64,
}

impl PriceRequest {
    /// Names of the validated fields, in the order violations are reported.
    pub const FIELDS: [&'static str; 3] = ["price", "people", "tip"];

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Head count. Always integral, possibly beyond the 64-bit range.
    pub fn people(&self) -> f64 {
        self.people.get()
    }

    /// Tip as a percentage of the price.
    pub fn tip(&self) -> f64 {
        self.tip
    }

    /// Validate a raw request body.
    ///
    /// An empty body is reported as a missing body, and a body that is not
    /// JSON at all collapses into a single `json_invalid` violation.
    pub fn from_slice(body: &[u8]) -> Result<Self, PricingError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(PricingError::single(FieldViolation::missing(BODY_LOC)));
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| PricingError::single(json_violation(body, &e)))?;

        Self::from_value(&value)
    }

    /// Validate an already decoded JSON value.
    pub fn from_value(value: &Value) -> Result<Self, PricingError> {
        let Value::Object(object) = value else {
            return Err(PricingError::single(FieldViolation::field(
                ViolationKind::ModelAttributesType,
                BODY_LOC,
                NOT_AN_OBJECT_MSG,
            )));
        };

        match (PRICE.check(object), PEOPLE.check(object), TIP.check(object)) {
            (Ok(price), Ok(people), Ok(tip)) => Ok(Self { price, people, tip }),
            (price, people, tip) => {
                let violations: Vec<FieldViolation> = [price.err(), people.err(), tip.err()]
                    .into_iter()
                    .flatten()
                    .collect();
                debug!("Request rejected with {} violation(s)", violations.len());
                Err(PricingError::InvalidRequest(violations))
            }
        }
    }
}

/// Describe a JSON syntax error, located at the byte where parsing stopped.
///
/// Truncated input is located one past the last byte, where more input was
/// expected.
fn json_violation(body: &[u8], err: &serde_json::Error) -> FieldViolation {
    let text = err.to_string();
    let msg = match text.rfind(" at line ") {
        Some(idx) => &text[..idx],
        None => text.as_str(),
    };

    let offset = if err.is_eof() {
        body.len()
    } else {
        byte_offset(body, err.line(), err.column())
    };

    FieldViolation::new(ViolationKind::JsonInvalid, Location::Offset(offset), msg)
}

/// Convert a 1-based line/column pair into a byte offset within `body`.
fn byte_offset(body: &[u8], line: usize, column: usize) -> usize {
    let line_start: usize = body
        .split(|b| *b == b'\n')
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();

    (line_start + column.saturating_sub(1)).min(body.len())
}
