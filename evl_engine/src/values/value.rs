//! The typed value produced and consumed by the evaluation pipeline
//!
//! The front-end only creates values for configured constants; evaluation
//! itself happens downstream. Numbers are arbitrary-precision decimals.

use bigdecimal::BigDecimal;
use std::fmt;
use std::str::FromStr;

/// A typed expression value: number, boolean, string, array, or null.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationValue {
    /// Arbitrary-precision decimal number
    Number(BigDecimal),
    /// Boolean value
    Bool(bool),
    /// String value
    Str(String),
    /// Ordered array of values
    Array(Vec<EvaluationValue>),
    /// The null value
    Null,
}

impl EvaluationValue {
    /// Create a number value from a decimal literal string.
    ///
    /// Returns `None` when the literal does not parse as a decimal.
    pub fn number_from_str(literal: &str) -> Option<Self> {
        BigDecimal::from_str(literal).ok().map(Self::Number)
    }

    /// Create a number value from an integer
    pub fn number_from_i64(value: i64) -> Self {
        Self::Number(BigDecimal::from(value))
    }

    /// Check if this value is a number
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Check if this value is a boolean
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Check if this value is a string
    pub fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    /// Check if this value is an array
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Get the number if this value is one
    pub fn as_number(&self) -> Option<&BigDecimal> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Get the boolean if this value is one
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the string if this value is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Name of this value's type, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Str(_) => "string",
            Self::Array(_) => "array",
            Self::Null => "null",
        }
    }
}

impl From<bool> for EvaluationValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for EvaluationValue {
    fn from(value: i64) -> Self {
        Self::Number(BigDecimal::from(value))
    }
}

impl From<&str> for EvaluationValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for EvaluationValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<BigDecimal> for EvaluationValue {
    fn from(value: BigDecimal) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for EvaluationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Str(s) => write!(f, "{}", s),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Null => write!(f, "null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_from_str() {
        let value = EvaluationValue::number_from_str("3.25").unwrap();
        assert!(value.is_number());
        assert_eq!(value.to_string(), "3.25");

        assert!(EvaluationValue::number_from_str("not-a-number").is_none());
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(EvaluationValue::from(true), EvaluationValue::Bool(true));
        assert_eq!(
            EvaluationValue::from(42i64),
            EvaluationValue::number_from_i64(42)
        );
        assert_eq!(
            EvaluationValue::from("hello"),
            EvaluationValue::Str("hello".to_string())
        );
    }

    #[test]
    fn test_type_predicates() {
        assert!(EvaluationValue::Null.is_null());
        assert!(EvaluationValue::Array(vec![]).is_array());
        assert_eq!(EvaluationValue::Null.type_name(), "null");
        assert_eq!(EvaluationValue::from(1i64).type_name(), "number");
    }

    #[test]
    fn test_array_display() {
        let array = EvaluationValue::Array(vec![
            EvaluationValue::from(1i64),
            EvaluationValue::from("x"),
            EvaluationValue::Null,
        ]);
        assert_eq!(array.to_string(), "[1, x, null]");
    }

    #[test]
    fn test_as_accessors() {
        let value = EvaluationValue::from("text");
        assert_eq!(value.as_str(), Some("text"));
        assert_eq!(value.as_bool(), None);
        assert!(EvaluationValue::Bool(true).as_bool().unwrap());
    }
}
