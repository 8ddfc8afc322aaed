//! The expression configuration: dictionaries, numeric policy, flags, and
//! collaborator seams bundled into one immutable value
//!
//! A configuration is built once, then shared by every tokenizer created
//! from it. The additive mutators take the configuration by value and
//! return it, so a configuration that is visible to other threads can
//! never be mutated underneath them; dictionaries inside a configuration
//! are therefore safe to share read-only across threads. Chained
//! registration looks like:
//!
//! ```
//! use evl_engine::config::ExpressionConfiguration;
//! use evl_engine::definitions::function::{FunctionDefinition, FunctionParameter};
//!
//! let configuration = ExpressionConfiguration::default_configuration()
//!     .with_additional_functions(vec![(
//!         "CLAMP",
//!         FunctionDefinition::new(vec![
//!             FunctionParameter::required("value"),
//!             FunctionParameter::required("low"),
//!             FunctionParameter::required("high"),
//!         ])
//!         .unwrap(),
//!     )]);
//! assert!(configuration.function_dictionary().has_function("clamp"));
//! ```

use crate::config::constants::compile_time::numeric::{
    DECIMAL_PLACES_ROUNDING_UNLIMITED, DEFAULT_MATH_CONTEXT_PRECISION,
};
use crate::definitions::function::FunctionDefinition;
use crate::definitions::operator::{OperatorDefinition, OPERATOR_PRECEDENCE_POWER};
use crate::definitions::standard::{standard_function_dictionary, standard_operator_dictionary};
use crate::dictionaries::{FunctionDictionary, OperatorDictionary};
use crate::values::accessor::{default_data_accessor_supplier, DataAccessorSupplier};
use crate::values::constants::standard_constants_map;
use crate::values::converter::{DefaultValueConverter, ValueConverter};
use crate::values::math::MathContext;
use crate::values::value::EvaluationValue;
use bigdecimal::RoundingMode;
use chrono::{FixedOffset, Local};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Immutable bundle of everything the front-end and its downstream
/// collaborators are configured with.
#[derive(Clone)]
pub struct ExpressionConfiguration {
    operator_dictionary: OperatorDictionary,
    function_dictionary: FunctionDictionary,
    math_context: MathContext,
    decimal_places_rounding: i32,
    strip_trailing_zeros: bool,
    allow_overwrite_constants: bool,
    arrays_allowed: bool,
    variables_allowed: bool,
    implicit_multiplication_allowed: bool,
    power_of_precedence: i32,
    zone_offset: FixedOffset,
    value_converter: Arc<dyn ValueConverter>,
    data_accessor_supplier: DataAccessorSupplier,
    default_constants: HashMap<String, EvaluationValue>,
}

impl ExpressionConfiguration {
    /// Start building a configuration from the standard defaults
    pub fn builder() -> ExpressionConfigurationBuilder {
        ExpressionConfigurationBuilder::new()
    }

    /// The standard configuration: standard operators, standard functions,
    /// standard constants, 68-digit banker's-rounding arithmetic.
    pub fn default_configuration() -> Self {
        Self::builder().build()
    }

    /// Register additional operators into the held dictionary, in entry
    /// order, and return the configuration for chaining.
    pub fn with_additional_operators(mut self, operators: Vec<(&str, OperatorDefinition)>) -> Self {
        for (name, definition) in operators {
            self.operator_dictionary.add_operator(name, definition);
        }
        self
    }

    /// Register additional functions into the held dictionary, in entry
    /// order, and return the configuration for chaining.
    pub fn with_additional_functions(mut self, functions: Vec<(&str, FunctionDefinition)>) -> Self {
        for (name, definition) in functions {
            self.function_dictionary.add_function(name, definition);
        }
        self
    }

    pub fn operator_dictionary(&self) -> &OperatorDictionary {
        &self.operator_dictionary
    }

    pub fn function_dictionary(&self) -> &FunctionDictionary {
        &self.function_dictionary
    }

    pub fn math_context(&self) -> MathContext {
        self.math_context
    }

    /// Fixed decimal places applied after evaluation;
    /// [`DECIMAL_PLACES_ROUNDING_UNLIMITED`] means no post-rounding.
    pub fn decimal_places_rounding(&self) -> i32 {
        self.decimal_places_rounding
    }

    pub fn is_strip_trailing_zeros(&self) -> bool {
        self.strip_trailing_zeros
    }

    pub fn is_allow_overwrite_constants(&self) -> bool {
        self.allow_overwrite_constants
    }

    pub fn is_arrays_allowed(&self) -> bool {
        self.arrays_allowed
    }

    pub fn is_variables_allowed(&self) -> bool {
        self.variables_allowed
    }

    pub fn is_implicit_multiplication_allowed(&self) -> bool {
        self.implicit_multiplication_allowed
    }

    pub fn power_of_precedence(&self) -> i32 {
        self.power_of_precedence
    }

    pub fn zone_offset(&self) -> FixedOffset {
        self.zone_offset
    }

    pub fn value_converter(&self) -> &Arc<dyn ValueConverter> {
        &self.value_converter
    }

    /// Produce a fresh data accessor for one expression
    pub fn new_data_accessor(&self) -> Box<dyn crate::values::accessor::DataAccessor> {
        (self.data_accessor_supplier)()
    }

    pub fn default_constants(&self) -> &HashMap<String, EvaluationValue> {
        &self.default_constants
    }

    /// Case-insensitive constant lookup
    pub fn get_constant(&self, name: &str) -> Option<&EvaluationValue> {
        self.default_constants.get(&name.to_lowercase())
    }
}

impl Default for ExpressionConfiguration {
    fn default() -> Self {
        Self::default_configuration()
    }
}

impl fmt::Debug for ExpressionConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpressionConfiguration")
            .field("operators", &self.operator_dictionary.len())
            .field("functions", &self.function_dictionary.len())
            .field("math_context", &self.math_context)
            .field("decimal_places_rounding", &self.decimal_places_rounding)
            .field("strip_trailing_zeros", &self.strip_trailing_zeros)
            .field("allow_overwrite_constants", &self.allow_overwrite_constants)
            .field("arrays_allowed", &self.arrays_allowed)
            .field("variables_allowed", &self.variables_allowed)
            .field(
                "implicit_multiplication_allowed",
                &self.implicit_multiplication_allowed,
            )
            .field("power_of_precedence", &self.power_of_precedence)
            .field("zone_offset", &self.zone_offset)
            .field("constants", &self.default_constants.len())
            .finish()
    }
}

/// Value builder for [`ExpressionConfiguration`]. Unset fields take the
/// standard defaults.
pub struct ExpressionConfigurationBuilder {
    operator_dictionary: OperatorDictionary,
    function_dictionary: FunctionDictionary,
    math_context: MathContext,
    decimal_places_rounding: i32,
    strip_trailing_zeros: bool,
    allow_overwrite_constants: bool,
    arrays_allowed: bool,
    variables_allowed: bool,
    implicit_multiplication_allowed: bool,
    power_of_precedence: i32,
    zone_offset: FixedOffset,
    value_converter: Arc<dyn ValueConverter>,
    data_accessor_supplier: DataAccessorSupplier,
    default_constants: HashMap<String, EvaluationValue>,
}

impl ExpressionConfigurationBuilder {
    pub fn new() -> Self {
        Self {
            operator_dictionary: standard_operator_dictionary(),
            function_dictionary: standard_function_dictionary(),
            math_context: MathContext::new(DEFAULT_MATH_CONTEXT_PRECISION, RoundingMode::HalfEven),
            decimal_places_rounding: DECIMAL_PLACES_ROUNDING_UNLIMITED,
            strip_trailing_zeros: true,
            allow_overwrite_constants: true,
            arrays_allowed: true,
            variables_allowed: true,
            implicit_multiplication_allowed: true,
            power_of_precedence: OPERATOR_PRECEDENCE_POWER,
            zone_offset: *Local::now().offset(),
            value_converter: Arc::new(DefaultValueConverter),
            data_accessor_supplier: default_data_accessor_supplier(),
            default_constants: standard_constants_map(),
        }
    }

    pub fn operator_dictionary(mut self, dictionary: OperatorDictionary) -> Self {
        self.operator_dictionary = dictionary;
        self
    }

    pub fn function_dictionary(mut self, dictionary: FunctionDictionary) -> Self {
        self.function_dictionary = dictionary;
        self
    }

    pub fn math_context(mut self, math_context: MathContext) -> Self {
        self.math_context = math_context;
        self
    }

    pub fn decimal_places_rounding(mut self, decimal_places: i32) -> Self {
        self.decimal_places_rounding = decimal_places;
        self
    }

    pub fn strip_trailing_zeros(mut self, strip: bool) -> Self {
        self.strip_trailing_zeros = strip;
        self
    }

    pub fn allow_overwrite_constants(mut self, allow: bool) -> Self {
        self.allow_overwrite_constants = allow;
        self
    }

    pub fn arrays_allowed(mut self, allowed: bool) -> Self {
        self.arrays_allowed = allowed;
        self
    }

    pub fn variables_allowed(mut self, allowed: bool) -> Self {
        self.variables_allowed = allowed;
        self
    }

    pub fn implicit_multiplication_allowed(mut self, allowed: bool) -> Self {
        self.implicit_multiplication_allowed = allowed;
        self
    }

    pub fn power_of_precedence(mut self, precedence: i32) -> Self {
        self.power_of_precedence = precedence;
        self
    }

    pub fn zone_offset(mut self, offset: FixedOffset) -> Self {
        self.zone_offset = offset;
        self
    }

    pub fn value_converter(mut self, converter: Arc<dyn ValueConverter>) -> Self {
        self.value_converter = converter;
        self
    }

    pub fn data_accessor_supplier(mut self, supplier: DataAccessorSupplier) -> Self {
        self.data_accessor_supplier = supplier;
        self
    }

    /// Replace the default-constants map; keys are normalized on insert.
    pub fn default_constants(mut self, constants: HashMap<String, EvaluationValue>) -> Self {
        self.default_constants = constants
            .into_iter()
            .map(|(name, value)| (name.to_lowercase(), value))
            .collect();
        self
    }

    /// Add a single constant; the key is normalized.
    pub fn constant(mut self, name: &str, value: EvaluationValue) -> Self {
        self.default_constants.insert(name.to_lowercase(), value);
        self
    }

    pub fn build(self) -> ExpressionConfiguration {
        let configuration = ExpressionConfiguration {
            operator_dictionary: self.operator_dictionary,
            function_dictionary: self.function_dictionary,
            math_context: self.math_context,
            decimal_places_rounding: self.decimal_places_rounding,
            strip_trailing_zeros: self.strip_trailing_zeros,
            allow_overwrite_constants: self.allow_overwrite_constants,
            arrays_allowed: self.arrays_allowed,
            variables_allowed: self.variables_allowed,
            implicit_multiplication_allowed: self.implicit_multiplication_allowed,
            power_of_precedence: self.power_of_precedence,
            zone_offset: self.zone_offset,
            value_converter: self.value_converter,
            data_accessor_supplier: self.data_accessor_supplier,
            default_constants: self.default_constants,
        };

        crate::log_success!(
            crate::logging::codes::success::CONFIGURATION_BUILT,
            "Expression configuration built",
            "operators" => configuration.operator_dictionary.len(),
            "functions" => configuration.function_dictionary.len(),
            "constants" => configuration.default_constants.len()
        );

        configuration
    }
}

impl Default for ExpressionConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::function::FunctionParameter;
    use crate::definitions::operator::OPERATOR_PRECEDENCE_POWER_HIGHER;

    #[test]
    fn test_default_configuration() {
        let configuration = ExpressionConfiguration::default_configuration();

        assert_eq!(configuration.math_context().precision, 68);
        assert_eq!(
            configuration.math_context().rounding_mode,
            RoundingMode::HalfEven
        );
        assert_eq!(
            configuration.decimal_places_rounding(),
            DECIMAL_PLACES_ROUNDING_UNLIMITED
        );
        assert!(configuration.is_strip_trailing_zeros());
        assert!(configuration.is_allow_overwrite_constants());
        assert!(configuration.is_arrays_allowed());
        assert!(configuration.is_variables_allowed());
        assert!(configuration.is_implicit_multiplication_allowed());
        assert_eq!(
            configuration.power_of_precedence(),
            OPERATOR_PRECEDENCE_POWER
        );
    }

    #[test]
    fn test_default_dictionaries_seeded() {
        let configuration = ExpressionConfiguration::default_configuration();

        assert!(configuration.operator_dictionary().has_infix_operator("+"));
        assert!(configuration.operator_dictionary().has_prefix_operator("-"));
        assert!(configuration.function_dictionary().has_function("SUM"));
        assert!(configuration.function_dictionary().has_function("ma"));
    }

    #[test]
    fn test_default_constants_seeded() {
        let configuration = ExpressionConfiguration::default_configuration();

        assert_eq!(
            configuration.get_constant("TRUE"),
            Some(&EvaluationValue::Bool(true))
        );
        assert_eq!(
            configuration.get_constant("null"),
            Some(&EvaluationValue::Null)
        );
        assert!(configuration.get_constant("Pi").unwrap().is_number());
    }

    #[test]
    fn test_builder_overrides() {
        let configuration = ExpressionConfiguration::builder()
            .arrays_allowed(false)
            .variables_allowed(false)
            .implicit_multiplication_allowed(false)
            .strip_trailing_zeros(false)
            .decimal_places_rounding(4)
            .power_of_precedence(OPERATOR_PRECEDENCE_POWER_HIGHER)
            .math_context(MathContext::new(10, RoundingMode::Down))
            .constant("answer", EvaluationValue::from(42i64))
            .build();

        assert!(!configuration.is_arrays_allowed());
        assert!(!configuration.is_variables_allowed());
        assert!(!configuration.is_implicit_multiplication_allowed());
        assert!(!configuration.is_strip_trailing_zeros());
        assert_eq!(configuration.decimal_places_rounding(), 4);
        assert_eq!(
            configuration.power_of_precedence(),
            OPERATOR_PRECEDENCE_POWER_HIGHER
        );
        assert_eq!(configuration.math_context().precision, 10);
        assert_eq!(
            configuration.get_constant("ANSWER"),
            Some(&EvaluationValue::from(42i64))
        );
    }

    #[test]
    fn test_with_additional_operators_chains() {
        let configuration = ExpressionConfiguration::default_configuration()
            .with_additional_operators(vec![(
                "**",
                OperatorDefinition::infix_right(OPERATOR_PRECEDENCE_POWER),
            )])
            .with_additional_operators(vec![(
                "??",
                OperatorDefinition::infix(OPERATOR_PRECEDENCE_POWER),
            )]);

        assert!(configuration.operator_dictionary().has_infix_operator("**"));
        assert!(configuration.operator_dictionary().has_infix_operator("??"));
    }

    #[test]
    fn test_with_additional_functions_is_idempotent() {
        let entry = || {
            FunctionDefinition::new(vec![FunctionParameter::required("value")]).unwrap()
        };

        let once = ExpressionConfiguration::default_configuration()
            .with_additional_functions(vec![("TWICE", entry())]);
        let twice = ExpressionConfiguration::default_configuration()
            .with_additional_functions(vec![("TWICE", entry())])
            .with_additional_functions(vec![("TWICE", entry())]);

        assert_eq!(
            once.function_dictionary().len(),
            twice.function_dictionary().len()
        );
        assert!(twice.function_dictionary().has_function("twice"));
    }

    #[test]
    fn test_fresh_data_accessor_per_expression() {
        let configuration = ExpressionConfiguration::default_configuration();

        let mut first = configuration.new_data_accessor();
        first.set_data("x", EvaluationValue::from(1i64));

        let second = configuration.new_data_accessor();
        assert_eq!(second.get_data("x"), None);
    }
}
