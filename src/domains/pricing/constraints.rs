//! Declarative field constraints.
//!
//! Each field of a request is described by a [`FieldConstraint`]: its name,
//! the numeric type it must coerce to, and its inclusive lower bound. Every
//! descriptor is evaluated the same way:
//!
//! 1. look the field up (absent → `missing`)
//! 2. coerce the JSON value to the target type (lax: numeric strings and
//!    booleans are accepted, like most schema-validation layers do)
//! 3. check the lower bound (→ `greater_than_equal`)

use serde::Serialize;
use serde_json::{Map, Value};
use std::marker::PhantomData;

use super::violation::{FieldViolation, ViolationKind};

const FLOAT_TYPE_MSG: &str = "Input should be a valid number";
const FLOAT_PARSING_MSG: &str = "Input should be a valid number, unable to parse string as a number";
const INT_TYPE_MSG: &str = "Input should be a valid integer";
const INT_PARSING_MSG: &str =
    "Input should be a valid integer, unable to parse string as an integer";
const INT_FROM_FLOAT_MSG: &str =
    "Input should be a valid integer, got a number with a fractional part";
const INT_PARSING_SIZE_MSG: &str =
    "Unable to parse input string as an integer, exceeded maximum size";

/// Longest digit string accepted for an integer field.
const MAX_INTEGER_DIGITS: usize = 4300;

/// Why a JSON value could not be coerced: the violation kind and its message.
pub type Rejection = (ViolationKind, &'static str);

/// A numeric type a field can be coerced into.
pub trait NumericField: Sized + Copy {
    /// Coerce a JSON value into this type.
    fn coerce(value: &Value) -> Result<Self, Rejection>;

    /// Whether the value satisfies an inclusive lower bound.
    fn at_least(self, minimum: i64) -> bool;
}

impl NumericField for f64 {
    fn coerce(value: &Value) -> Result<Self, Rejection> {
        match value {
            Value::Number(n) => n
                .as_f64()
                .ok_or((ViolationKind::FloatType, FLOAT_TYPE_MSG)),
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| (ViolationKind::FloatParsing, FLOAT_PARSING_MSG)),
            _ => Err((ViolationKind::FloatType, FLOAT_TYPE_MSG)),
        }
    }

    fn at_least(self, minimum: i64) -> bool {
        // NaN compares false and is rejected here
        self >= minimum as f64
    }
}

/// An integer of unbounded magnitude, held as the `f64` it divides by.
///
/// Values past 2^53 lose precision but stay integral, so a head count of
/// any size is accepted rather than rejected for overflow.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct WholeNumber(f64);

impl WholeNumber {
    pub fn get(self) -> f64 {
        self.0
    }
}

impl NumericField for WholeNumber {
    fn coerce(value: &Value) -> Result<Self, Rejection> {
        match value {
            Value::Number(n) => {
                let f = n
                    .as_f64()
                    .ok_or((ViolationKind::IntType, INT_TYPE_MSG))?;
                integral_float(f)
            }
            Value::Bool(b) => Ok(Self(if *b { 1.0 } else { 0.0 })),
            Value::String(s) => parse_integer(s),
            _ => Err((ViolationKind::IntType, INT_TYPE_MSG)),
        }
    }

    fn at_least(self, minimum: i64) -> bool {
        self.0 >= minimum as f64
    }
}

/// Accept a float as an integer only when it is finite with no fractional part.
fn integral_float(f: f64) -> Result<WholeNumber, Rejection> {
    if !f.is_finite() || f.fract() != 0.0 {
        return Err((ViolationKind::IntFromFloat, INT_FROM_FLOAT_MSG));
    }
    Ok(WholeNumber(f))
}

/// Parse an integer literal: optional sign, digits, and an optional
/// fractional part made only of zeros (`"4.00"` is 4).
fn parse_integer(text: &str) -> Result<WholeNumber, Rejection> {
    let text = text.trim();
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let digits = match unsigned.split_once('.') {
        Some((whole, fraction)) if fraction.bytes().all(|b| b == b'0') => whole,
        Some(_) => return Err((ViolationKind::IntParsing, INT_PARSING_MSG)),
        None => unsigned,
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err((ViolationKind::IntParsing, INT_PARSING_MSG));
    }
    if digits.len() > MAX_INTEGER_DIGITS {
        return Err((ViolationKind::IntParsingSize, INT_PARSING_SIZE_MSG));
    }

    let magnitude: f64 = digits
        .parse()
        .map_err(|_| (ViolationKind::IntParsing, INT_PARSING_MSG))?;
    let value = if text.starts_with('-') { -magnitude } else { magnitude };
    Ok(WholeNumber(value))
}

/// Descriptor for one numeric field of a request body.
#[derive(Debug, Clone, Copy)]
pub struct FieldConstraint<T> {
    name: &'static str,
    minimum: i64,
    _target: PhantomData<T>,
}

impl<T: NumericField> FieldConstraint<T> {
    pub const fn new(name: &'static str, minimum: i64) -> Self {
        Self {
            name,
            minimum,
            _target: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn minimum(&self) -> i64 {
        self.minimum
    }

    /// Evaluate this constraint against a decoded JSON object.
    pub fn check(&self, object: &Map<String, Value>) -> Result<T, FieldViolation> {
        let value = object
            .get(self.name)
            .ok_or_else(|| FieldViolation::missing(self.name))?;

        let number = T::coerce(value)
            .map_err(|(kind, msg)| FieldViolation::field(kind, self.name, msg))?;

        if !number.at_least(self.minimum) {
            return Err(FieldViolation::below_minimum(self.name, self.minimum));
        }

        Ok(number)
    }
}

/// Bill amount: any non-negative number.
pub const PRICE: FieldConstraint<f64> = FieldConstraint::new("price", 0);

/// Number of people sharing the bill: an integer, at least one.
pub const PEOPLE: FieldConstraint<WholeNumber> = FieldConstraint::new("people", 1);

/// Tip percentage: any non-negative number.
pub const TIP: FieldConstraint<f64> = FieldConstraint::new("tip", 0);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_float_accepts_numbers_and_numeric_strings() {
        assert_eq!(PRICE.check(&object(json!({"price": 12}))).unwrap(), 12.0);
        assert_eq!(PRICE.check(&object(json!({"price": 12.5}))).unwrap(), 12.5);
        assert_eq!(PRICE.check(&object(json!({"price": " 7.25 "}))).unwrap(), 7.25);
        assert_eq!(PRICE.check(&object(json!({"price": true}))).unwrap(), 1.0);
    }

    #[test]
    fn test_float_rejects_text() {
        let err = PRICE
            .check(&object(json!({"price": "fifteen"})))
            .unwrap_err();
        assert_eq!(err.kind, ViolationKind::FloatParsing);
        assert_eq!(err.msg, FLOAT_PARSING_MSG);
    }

    #[test]
    fn test_float_rejects_null_and_containers() {
        for value in [json!(null), json!([1]), json!({"a": 1})] {
            let err = TIP.check(&object(json!({"tip": value}))).unwrap_err();
            assert_eq!(err.kind, ViolationKind::FloatType);
            assert_eq!(err.msg, "Input should be a valid number");
        }
    }

    #[test]
    fn test_nan_string_fails_lower_bound() {
        let err = PRICE.check(&object(json!({"price": "NaN"}))).unwrap_err();
        assert_eq!(err.kind, ViolationKind::GreaterThanEqual);
    }

    fn people(value: Value) -> Result<f64, FieldViolation> {
        PEOPLE
            .check(&object(json!({"people": value})))
            .map(WholeNumber::get)
    }

    #[test]
    fn test_integer_accepts_integral_values() {
        assert_eq!(people(json!(3)).unwrap(), 3.0);
        assert_eq!(people(json!(4.0)).unwrap(), 4.0);
        assert_eq!(people(json!("5")).unwrap(), 5.0);
        assert_eq!(people(json!(" +6 ")).unwrap(), 6.0);
        assert_eq!(people(json!(true)).unwrap(), 1.0);
    }

    #[test]
    fn test_integer_strings_with_zero_fraction() {
        assert_eq!(people(json!("4.0")).unwrap(), 4.0);
        assert_eq!(people(json!("12.000")).unwrap(), 12.0);
    }

    #[test]
    fn test_integer_rejects_fractional_number() {
        let err = people(json!(2.5)).unwrap_err();
        assert_eq!(err.kind, ViolationKind::IntFromFloat);
        assert_eq!(err.msg, INT_FROM_FLOAT_MSG);
    }

    #[test]
    fn test_integer_rejects_non_integer_strings() {
        for text in ["four", "2.5", "", "-", ".0", "1e3", "4.01"] {
            let err = people(json!(text)).unwrap_err();
            assert_eq!(err.kind, ViolationKind::IntParsing, "input {text:?}");
            assert_eq!(err.msg, INT_PARSING_MSG);
        }
    }

    #[test]
    fn test_integer_accepts_values_beyond_64_bits() {
        assert_eq!(people(json!(9_223_372_036_854_775_808u64)).unwrap(), 9.223372036854775808e18);
        assert_eq!(people(json!(u64::MAX)).unwrap(), u64::MAX as f64);
        assert_eq!(people(json!("99999999999999999999")).unwrap(), 1e20);
        assert_eq!(people(json!(1e300)).unwrap(), 1e300);
    }

    #[test]
    fn test_integer_rejects_overlong_digit_strings() {
        let err = people(json!("9".repeat(MAX_INTEGER_DIGITS + 1))).unwrap_err();
        assert_eq!(err.kind, ViolationKind::IntParsingSize);
        assert_eq!(err.msg, INT_PARSING_SIZE_MSG);
    }

    #[test]
    fn test_negative_integer_fails_lower_bound() {
        let err = people(json!("-3")).unwrap_err();
        assert_eq!(err.kind, ViolationKind::GreaterThanEqual);
    }

    #[test]
    fn test_integer_rejects_null() {
        let err = people(json!(null)).unwrap_err();
        assert_eq!(err.kind, ViolationKind::IntType);
        assert_eq!(err.msg, "Input should be a valid integer");
    }

    #[test]
    fn test_lower_bounds() {
        let err = PRICE.check(&object(json!({"price": -0.01}))).unwrap_err();
        assert_eq!(err.msg, "Input should be greater than or equal to 0");

        let err = PEOPLE.check(&object(json!({"people": 0}))).unwrap_err();
        assert_eq!(err.msg, "Input should be greater than or equal to 1");

        assert_eq!(TIP.check(&object(json!({"tip": 0}))).unwrap(), 0.0);
    }

    #[test]
    fn test_missing_field() {
        let err = TIP.check(&object(json!({"price": 1}))).unwrap_err();
        assert_eq!(err, FieldViolation::missing("tip"));
    }

    #[test]
    fn test_descriptor_accessors() {
        assert_eq!(PEOPLE.name(), "people");
        assert_eq!(PEOPLE.minimum(), 1);
        assert_eq!(PRICE.minimum(), 0);
    }
}
