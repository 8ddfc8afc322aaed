//! Standard operator and function sets
//!
//! Seeds for `default_configuration()`: the arithmetic/comparison/logical
//! operators and the stock function signatures, including the numeric
//! time-series functions MOVE and MA. Definitions are metadata only.

use super::function::{FunctionDefinition, FunctionParameter};
use super::operator::*;
use crate::dictionaries::{FunctionDictionary, OperatorDictionary};

/// Build the standard operator dictionary.
pub fn standard_operator_dictionary() -> OperatorDictionary {
    let mut operators = OperatorDictionary::new();

    // Unary sign. No prefix plus: a doubled plus after an infix operator
    // must fail validation, not classify as a prefix operator.
    operators.add_operator("-", OperatorDefinition::prefix(OPERATOR_PRECEDENCE_UNARY));

    // Binary arithmetic
    operators.add_operator("+", OperatorDefinition::infix(OPERATOR_PRECEDENCE_ADDITIVE));
    operators.add_operator("-", OperatorDefinition::infix(OPERATOR_PRECEDENCE_ADDITIVE));
    operators.add_operator(
        "*",
        OperatorDefinition::infix(OPERATOR_PRECEDENCE_MULTIPLICATIVE),
    );
    operators.add_operator(
        "/",
        OperatorDefinition::infix(OPERATOR_PRECEDENCE_MULTIPLICATIVE),
    );
    operators.add_operator(
        "%",
        OperatorDefinition::infix(OPERATOR_PRECEDENCE_MULTIPLICATIVE),
    );
    operators.add_operator(
        "^",
        OperatorDefinition::infix_right(OPERATOR_PRECEDENCE_POWER),
    );

    // Equality
    operators.add_operator("=", OperatorDefinition::infix(OPERATOR_PRECEDENCE_EQUALITY));
    operators.add_operator("==", OperatorDefinition::infix(OPERATOR_PRECEDENCE_EQUALITY));
    operators.add_operator("!=", OperatorDefinition::infix(OPERATOR_PRECEDENCE_EQUALITY));
    operators.add_operator("<>", OperatorDefinition::infix(OPERATOR_PRECEDENCE_EQUALITY));

    // Comparison
    operators.add_operator("<", OperatorDefinition::infix(OPERATOR_PRECEDENCE_COMPARISON));
    operators.add_operator(
        "<=",
        OperatorDefinition::infix(OPERATOR_PRECEDENCE_COMPARISON),
    );
    operators.add_operator(">", OperatorDefinition::infix(OPERATOR_PRECEDENCE_COMPARISON));
    operators.add_operator(
        ">=",
        OperatorDefinition::infix(OPERATOR_PRECEDENCE_COMPARISON),
    );

    // Logical
    operators.add_operator("&&", OperatorDefinition::infix(OPERATOR_PRECEDENCE_AND));
    operators.add_operator("||", OperatorDefinition::infix(OPERATOR_PRECEDENCE_OR));
    operators.add_operator("!", OperatorDefinition::prefix(OPERATOR_PRECEDENCE_UNARY));

    operators
}

/// Build the standard function dictionary.
pub fn standard_function_dictionary() -> FunctionDictionary {
    let mut functions = FunctionDictionary::new();

    functions.add_function("ABS", single_value_function());
    functions.add_function("CEILING", single_value_function());
    functions.add_function("FACT", single_value_function());
    functions.add_function("FLOOR", single_value_function());
    functions.add_function(
        "IF",
        definition(vec![
            FunctionParameter::required("condition"),
            FunctionParameter::lazy("result_if_true"),
            FunctionParameter::lazy("result_if_false"),
        ]),
    );
    functions.add_function("LOG", single_value_function());
    functions.add_function("LOG10", single_value_function());
    functions.add_function("MAX", var_arg_function());
    functions.add_function("MIN", var_arg_function());
    functions.add_function("NOT", single_value_function());
    functions.add_function("SUM", var_arg_function());
    functions.add_function("SQRT", single_value_function());

    // Numeric time-series functions
    functions.add_function(
        "MOVE",
        definition(vec![
            FunctionParameter::required("series"),
            FunctionParameter::required("offset"),
        ]),
    );
    functions.add_function(
        "MA",
        definition(vec![
            FunctionParameter::required("series"),
            FunctionParameter::required("window"),
        ]),
    );

    functions
}

fn definition(parameters: Vec<FunctionParameter>) -> FunctionDefinition {
    FunctionDefinition::new(parameters).expect("standard function parameters are valid")
}

fn single_value_function() -> FunctionDefinition {
    definition(vec![FunctionParameter::required("value")])
}

fn var_arg_function() -> FunctionDefinition {
    definition(vec![FunctionParameter::var_arg("values")])
}
