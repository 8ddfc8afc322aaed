//! Function dictionary with case-insensitive lookup
//!
//! Keys are normalized on insert and on query, so `sum`, `SUM`, and `Sum`
//! all resolve to the same definition. No ordered case-insensitive
//! container is involved.

use crate::definitions::function::FunctionDefinition;
use std::collections::HashMap;
use std::sync::Arc;

/// Name→definition lookup for functions.
#[derive(Debug, Clone, Default)]
pub struct FunctionDictionary {
    functions: HashMap<String, Arc<FunctionDefinition>>,
}

impl FunctionDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function definition under a case-insensitive name.
    pub fn add_function(&mut self, name: &str, definition: FunctionDefinition) {
        self.functions
            .insert(name.to_lowercase(), Arc::new(definition));
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(&name.to_lowercase())
    }

    pub fn get_function(&self, name: &str) -> Option<Arc<FunctionDefinition>> {
        self.functions.get(&name.to_lowercase()).cloned()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::function::FunctionParameter;

    fn one_arg_function() -> FunctionDefinition {
        FunctionDefinition::new(vec![FunctionParameter::required("value")]).unwrap()
    }

    #[test]
    fn test_add_and_lookup() {
        let mut dictionary = FunctionDictionary::new();
        dictionary.add_function("ABS", one_arg_function());

        assert!(dictionary.has_function("ABS"));
        assert!(dictionary.get_function("ABS").is_some());
        assert!(!dictionary.has_function("CEILING"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut dictionary = FunctionDictionary::new();
        dictionary.add_function("Max", one_arg_function());

        assert!(dictionary.has_function("max"));
        assert!(dictionary.has_function("MAX"));
        assert!(dictionary.has_function("mAx"));
        assert!(dictionary.get_function("MAX").is_some());
    }

    #[test]
    fn test_reinsertion_replaces() {
        let mut dictionary = FunctionDictionary::new();
        dictionary.add_function("f", one_arg_function());
        dictionary.add_function(
            "F",
            FunctionDefinition::new(vec![
                FunctionParameter::required("a"),
                FunctionParameter::required("b"),
            ])
            .unwrap(),
        );

        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.get_function("f").unwrap().parameter_count(), 2);
    }
}
