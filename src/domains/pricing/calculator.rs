//! Per-person share computation.

use serde::Serialize;
use std::fmt;

use super::request::PriceRequest;

/// Outcome of splitting a bill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceResult {
    /// Amount each person pays, rounded to cents.
    pub amount_per_person: f64,
}

impl PriceResult {
    /// Human-readable summary returned to clients.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PriceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total price per person: {}",
            format_amount(self.amount_per_person)
        )
    }
}

/// Split the bill, tip included, between the request's people.
pub fn calculate(request: &PriceRequest) -> PriceResult {
    let total_tip = request.tip() * request.price() / 100.0;
    let total = (total_tip + request.price()) / request.people();

    PriceResult {
        // adding 0.0 turns -0.0 into 0.0
        amount_per_person: round_to_cents(total) + 0.0,
    }
}

/// Round to two decimals, working on the exact binary value.
fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Render an amount the way a shortest-round-trip float display does:
/// integral values keep a trailing `.0`, very large values switch to
/// exponent notation with an explicit sign.
fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value.abs() >= 1e16 {
        return exponent_form(value);
    }
    if value.fract() == 0.0 {
        return format!("{:.1}", value);
    }
    value.to_string()
}

fn exponent_form(value: f64) -> String {
    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn quote(body: serde_json::Value) -> PriceResult {
        calculate(&PriceRequest::from_value(&body).unwrap())
    }

    #[test]
    fn test_reference_quote() {
        let result = quote(json!({"price": 199.99, "people": 4, "tip": 1.5}));
        assert_eq!(result.amount_per_person, 50.75);
        assert_eq!(result.message(), "Total price per person: 50.75");
    }

    #[test]
    fn test_integral_amount_keeps_decimal() {
        let result = quote(json!({"price": 100, "people": 4, "tip": 0}));
        assert_eq!(result.message(), "Total price per person: 25.0");
    }

    #[test]
    fn test_single_person_with_tip() {
        let result = quote(json!({"price": 60, "people": 2, "tip": 1.5}));
        assert_eq!(result.message(), "Total price per person: 30.45");
    }

    #[test]
    fn test_rounds_to_cents() {
        let result = quote(json!({"price": 10, "people": 3, "tip": 0}));
        assert_eq!(result.amount_per_person, 3.33);
        assert_eq!(result.message(), "Total price per person: 3.33");
    }

    #[test]
    fn test_never_negative() {
        let result = quote(json!({"price": -0.0, "people": 3, "tip": 15}));
        assert!(result.amount_per_person.is_sign_positive());
        assert_eq!(result.message(), "Total price per person: 0.0");
    }

    #[test]
    fn test_huge_head_count() {
        let result = quote(json!({"price": 100, "people": 9_223_372_036_854_775_808u64, "tip": 0}));
        assert_eq!(result.message(), "Total price per person: 0.0");
    }

    #[test]
    fn test_matches_formula() {
        let cases = [(12.5, 1, 10.0), (80.0, 3, 12.5), (0.99, 7, 100.0), (1234.56, 5, 18.0)];
        for (price, people, tip) in cases {
            let result = quote(json!({"price": price, "people": people, "tip": tip}));
            let expected = (tip * price / 100.0 + price) / people as f64;
            assert!((result.amount_per_person - expected).abs() <= 0.005 + f64::EPSILON);
            assert!(result.amount_per_person >= 0.0);
        }
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.5), "0.5");
        assert_eq!(format_amount(7.0), "7.0");
        assert_eq!(format_amount(1e16), "1e+16");
        assert_eq!(format_amount(1.5e20), "1.5e+20");
        assert_eq!(format_amount(f64::INFINITY), "inf");
        assert_eq!(format_amount(f64::NAN), "nan");
    }
}
