//! Operator and function definition metadata
//!
//! Definitions are opaque to the tokenizer beyond fixity, precedence,
//! associativity, and call signatures; their behavior lives downstream in
//! the evaluator.

pub mod function;
pub mod operator;
pub mod standard;

pub use function::{FunctionDefinition, FunctionParameter, InvalidFunctionParameters};
pub use operator::{Associativity, Fixity, OperatorDefinition};
pub use standard::{standard_function_dictionary, standard_operator_dictionary};
