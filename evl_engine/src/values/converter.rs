//! Conversion of host values into evaluation values
//!
//! The conversion layer itself lives downstream; the configuration carries a
//! converter so embedders can override how host data enters the engine.

use super::value::EvaluationValue;
use bigdecimal::BigDecimal;
use std::fmt;

/// A host-side value before conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Array(Vec<RawValue>),
    Null,
}

/// Converts host values into [`EvaluationValue`]s.
pub trait ValueConverter: fmt::Debug + Send + Sync {
    fn convert(&self, raw: RawValue) -> EvaluationValue;
}

/// The stock converter: structural mapping, floats through `BigDecimal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValueConverter;

impl ValueConverter for DefaultValueConverter {
    fn convert(&self, raw: RawValue) -> EvaluationValue {
        match raw {
            RawValue::Int(i) => EvaluationValue::Number(BigDecimal::from(i)),
            RawValue::Float(f) => BigDecimal::try_from(f)
                .map(EvaluationValue::Number)
                .unwrap_or(EvaluationValue::Null),
            RawValue::Bool(b) => EvaluationValue::Bool(b),
            RawValue::Str(s) => EvaluationValue::Str(s),
            RawValue::Array(items) => {
                EvaluationValue::Array(items.into_iter().map(|item| self.convert(item)).collect())
            }
            RawValue::Null => EvaluationValue::Null,
        }
    }
}
