//! Public error envelope for rejected requests.

use serde::Serialize;

use super::violation::FieldViolation;

/// Top-level message attached to every validation failure.
pub const ENVELOPE_MESSAGE: &str =
    "Incorrect data entry. All fields must be filled in and in numerical format.";

/// Body returned with a 422 response.
///
/// ```json
/// {"Error": "Incorrect data entry. ...", "detail": [{"type": "...", "loc": "...", "msg": "..."}]}
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope<'a> {
    #[serde(rename = "Error")]
    pub error: &'static str,
    pub detail: &'a [FieldViolation],
}

impl<'a> ErrorEnvelope<'a> {
    /// Wrap violations without reordering them.
    pub fn from_violations(violations: &'a [FieldViolation]) -> Self {
        Self {
            error: ENVELOPE_MESSAGE,
            detail: violations,
        }
    }
}
