//! Variable data access for expression evaluation
//!
//! Evaluation resolves `VARIABLE_OR_CONSTANT` tokens through a
//! [`DataAccessor`]. The configuration carries a supplier producing a fresh
//! accessor per expression so expressions never share variable state by
//! accident.

use super::value::EvaluationValue;
use std::collections::HashMap;
use std::sync::Arc;

/// Read/write access to named variable data.
pub trait DataAccessor: Send {
    /// Get the value bound to a variable name, if any
    fn get_data(&self, variable: &str) -> Option<EvaluationValue>;

    /// Bind a value to a variable name
    fn set_data(&mut self, variable: &str, value: EvaluationValue);
}

/// Factory invoked once per expression to produce a fresh accessor.
pub type DataAccessorSupplier = Arc<dyn Fn() -> Box<dyn DataAccessor> + Send + Sync>;

/// Scalar-map accessor with case-insensitive variable names.
#[derive(Debug, Default)]
pub struct MapBasedDataAccessor {
    data: HashMap<String, EvaluationValue>,
}

impl MapBasedDataAccessor {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Number of bound variables
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no variables are bound
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl DataAccessor for MapBasedDataAccessor {
    fn get_data(&self, variable: &str) -> Option<EvaluationValue> {
        self.data.get(&variable.to_lowercase()).cloned()
    }

    fn set_data(&mut self, variable: &str, value: EvaluationValue) {
        self.data.insert(variable.to_lowercase(), value);
    }
}

/// The default supplier: a fresh scalar-map accessor per expression.
pub fn default_data_accessor_supplier() -> DataAccessorSupplier {
    Arc::new(|| Box::new(MapBasedDataAccessor::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_accessor_roundtrip() {
        let mut accessor = MapBasedDataAccessor::new();
        assert!(accessor.is_empty());

        accessor.set_data("x", EvaluationValue::from(5i64));
        assert_eq!(accessor.get_data("x"), Some(EvaluationValue::from(5i64)));
        assert_eq!(accessor.len(), 1);
    }

    #[test]
    fn test_case_insensitive_names() {
        let mut accessor = MapBasedDataAccessor::new();
        accessor.set_data("Total", EvaluationValue::from(10i64));

        assert_eq!(
            accessor.get_data("TOTAL"),
            Some(EvaluationValue::from(10i64))
        );
        assert_eq!(
            accessor.get_data("total"),
            Some(EvaluationValue::from(10i64))
        );
        assert_eq!(accessor.get_data("other"), None);
    }

    #[test]
    fn test_supplier_produces_fresh_accessors() {
        let supplier = default_data_accessor_supplier();

        let mut first = supplier();
        first.set_data("x", EvaluationValue::from(1i64));

        let second = supplier();
        assert_eq!(second.get_data("x"), None);
    }
}
