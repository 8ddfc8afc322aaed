//! Operator dictionary with per-fixity partitions
//!
//! A name may exist in several partitions at once (`+` as prefix and as
//! infix). Lookups are exact and case-sensitive. Registering a second
//! definition under the same name and fixity silently replaces the first.

use crate::definitions::operator::{Fixity, OperatorDefinition};
use std::collections::HashMap;
use std::sync::Arc;

/// Name→definition lookups, partitioned by fixity.
#[derive(Debug, Clone, Default)]
pub struct OperatorDictionary {
    prefix_operators: HashMap<String, Arc<OperatorDefinition>>,
    postfix_operators: HashMap<String, Arc<OperatorDefinition>>,
    infix_operators: HashMap<String, Arc<OperatorDefinition>>,
}

impl OperatorDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition under every fixity partition it carries.
    pub fn add_operator(&mut self, name: &str, definition: OperatorDefinition) {
        let definition = Arc::new(definition);
        for fixity in definition.fixities() {
            let partition = match fixity {
                Fixity::Prefix => &mut self.prefix_operators,
                Fixity::Postfix => &mut self.postfix_operators,
                Fixity::Infix => &mut self.infix_operators,
            };
            if partition
                .insert(name.to_string(), definition.clone())
                .is_some()
            {
                crate::log_debug!("Operator redefined",
                    "name" => name,
                    "fixity" => fixity.as_str()
                );
            }
        }
    }

    pub fn has_prefix_operator(&self, name: &str) -> bool {
        self.prefix_operators.contains_key(name)
    }

    pub fn has_postfix_operator(&self, name: &str) -> bool {
        self.postfix_operators.contains_key(name)
    }

    pub fn has_infix_operator(&self, name: &str) -> bool {
        self.infix_operators.contains_key(name)
    }

    pub fn get_prefix_operator(&self, name: &str) -> Option<Arc<OperatorDefinition>> {
        self.prefix_operators.get(name).cloned()
    }

    pub fn get_postfix_operator(&self, name: &str) -> Option<Arc<OperatorDefinition>> {
        self.postfix_operators.get(name).cloned()
    }

    pub fn get_infix_operator(&self, name: &str) -> Option<Arc<OperatorDefinition>> {
        self.infix_operators.get(name).cloned()
    }

    /// Total registrations across all partitions
    pub fn len(&self) -> usize {
        self.prefix_operators.len() + self.postfix_operators.len() + self.infix_operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::operator::{
        OPERATOR_PRECEDENCE_ADDITIVE, OPERATOR_PRECEDENCE_UNARY,
    };

    #[test]
    fn test_add_and_lookup() {
        let mut dictionary = OperatorDictionary::new();
        dictionary.add_operator("-", OperatorDefinition::prefix(OPERATOR_PRECEDENCE_UNARY));

        assert!(dictionary.has_prefix_operator("-"));
        assert!(!dictionary.has_infix_operator("-"));
        assert!(dictionary.get_prefix_operator("-").is_some());
        assert!(dictionary.get_infix_operator("-").is_none());
    }

    #[test]
    fn test_same_name_in_multiple_partitions() {
        let mut dictionary = OperatorDictionary::new();
        dictionary.add_operator("+", OperatorDefinition::prefix(OPERATOR_PRECEDENCE_UNARY));
        dictionary.add_operator("+", OperatorDefinition::infix(OPERATOR_PRECEDENCE_ADDITIVE));

        assert!(dictionary.has_prefix_operator("+"));
        assert!(dictionary.has_infix_operator("+"));
        assert_eq!(
            dictionary.get_prefix_operator("+").unwrap().precedence(),
            OPERATOR_PRECEDENCE_UNARY
        );
        assert_eq!(
            dictionary.get_infix_operator("+").unwrap().precedence(),
            OPERATOR_PRECEDENCE_ADDITIVE
        );
    }

    #[test]
    fn test_multi_fixity_definition_indexed_everywhere() {
        let mut dictionary = OperatorDictionary::new();
        let definition = OperatorDefinition::prefix(OPERATOR_PRECEDENCE_UNARY)
            .with_fixity(crate::definitions::operator::Fixity::Infix);
        dictionary.add_operator("~", definition);

        assert!(dictionary.has_prefix_operator("~"));
        assert!(dictionary.has_infix_operator("~"));
        assert!(!dictionary.has_postfix_operator("~"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut dictionary = OperatorDictionary::new();
        dictionary.add_operator("mod", OperatorDefinition::infix(OPERATOR_PRECEDENCE_ADDITIVE));

        assert!(dictionary.has_infix_operator("mod"));
        assert!(!dictionary.has_infix_operator("MOD"));
        assert!(!dictionary.has_infix_operator("Mod"));
    }

    #[test]
    fn test_last_write_wins() {
        let mut dictionary = OperatorDictionary::new();
        dictionary.add_operator("+", OperatorDefinition::infix(1));
        dictionary.add_operator("+", OperatorDefinition::infix(OPERATOR_PRECEDENCE_ADDITIVE));

        assert_eq!(
            dictionary.get_infix_operator("+").unwrap().precedence(),
            OPERATOR_PRECEDENCE_ADDITIVE
        );
    }
}
