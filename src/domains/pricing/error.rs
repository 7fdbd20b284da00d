//! Pricing-specific error types.

use thiserror::Error;

use super::violation::FieldViolation;

/// Errors that can occur while turning a request body into a quote.
#[derive(Debug, Error)]
pub enum PricingError {
    /// The request body failed validation. Always holds at least one violation.
    #[error("Invalid request: {} violation(s), first: {}", .0.len(), first_violation(.0))]
    InvalidRequest(Vec<FieldViolation>),
}

impl PricingError {
    /// Create a new "invalid request" error from a single violation.
    pub fn single(violation: FieldViolation) -> Self {
        Self::InvalidRequest(vec![violation])
    }

    /// The violations carried by this error, in field declaration order.
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            Self::InvalidRequest(violations) => violations,
        }
    }
}

fn first_violation(violations: &[FieldViolation]) -> String {
    violations
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_count_and_first() {
        let err = PricingError::InvalidRequest(vec![
            FieldViolation::missing("price"),
            FieldViolation::missing("tip"),
        ]);
        let text = err.to_string();
        assert!(text.contains("2 violation(s)"));
        assert!(text.contains("missing at 'price'"));
    }

    #[test]
    fn test_single() {
        let err = PricingError::single(FieldViolation::missing("people"));
        assert_eq!(err.violations().len(), 1);
    }
}
