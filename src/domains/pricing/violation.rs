//! Field-level validation failures.

use serde::Serialize;
use std::fmt;

/// Category of a validation failure.
///
/// Serialized names follow the error types emitted by common
/// schema-validation layers so that clients can switch on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The field (or the whole body) is absent.
    Missing,
    /// The value is below the field's lower bound.
    GreaterThanEqual,
    /// A string was given to a number field and could not be parsed.
    FloatParsing,
    /// A non-numeric, non-string value was given to a number field.
    FloatType,
    /// A string was given to an integer field and could not be parsed.
    IntParsing,
    /// A non-numeric, non-string value was given to an integer field.
    IntType,
    /// A number with a fractional part was given to an integer field.
    IntFromFloat,
    /// An integer too large to be represented.
    IntParsingSize,
    /// The body is not valid JSON.
    JsonInvalid,
    /// The body is valid JSON but not an object.
    ModelAttributesType,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::GreaterThanEqual => "greater_than_equal",
            Self::FloatParsing => "float_parsing",
            Self::FloatType => "float_type",
            Self::IntParsing => "int_parsing",
            Self::IntType => "int_type",
            Self::IntFromFloat => "int_from_float",
            Self::IntParsingSize => "int_parsing_size",
            Self::JsonInvalid => "json_invalid",
            Self::ModelAttributesType => "model_attributes_type",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a violation occurred.
///
/// Field-level failures point at a field name. A JSON syntax error points at
/// the byte offset where parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Location {
    Field(String),
    Offset(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Offset(offset) => write!(f, "{}", offset),
        }
    }
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    #[serde(rename = "type")]
    pub kind: ViolationKind,
    pub loc: Location,
    pub msg: String,
}

impl FieldViolation {
    pub fn new(kind: ViolationKind, loc: Location, msg: impl Into<String>) -> Self {
        Self {
            kind,
            loc,
            msg: msg.into(),
        }
    }

    /// Violation attached to a named field.
    pub fn field(kind: ViolationKind, field: &str, msg: impl Into<String>) -> Self {
        Self::new(kind, Location::Field(field.to_string()), msg)
    }

    /// A required field is absent.
    pub fn missing(field: &str) -> Self {
        Self::field(ViolationKind::Missing, field, "Field required")
    }

    /// The value is below `minimum`.
    pub fn below_minimum(field: &str, minimum: i64) -> Self {
        Self::field(
            ViolationKind::GreaterThanEqual,
            field,
            format!("Input should be greater than or equal to {}", minimum),
        )
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at '{}': {}", self.kind, self.loc, self.msg)
    }
}
