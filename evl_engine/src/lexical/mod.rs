//! Lexical analysis for expression strings
//!
//! Converts an expression into its ordered token sequence, consulting the
//! configuration's dictionaries for context-sensitive operator and
//! function classification.

pub mod error;
pub mod tokenizer;

use crate::config::runtime::TokenizerPreferences;
use crate::config::ExpressionConfiguration;
use crate::tokens::Token;

pub use error::{ParseError, ParseResult};
pub use tokenizer::{Tokenizer, TokenizerMetrics};

/// Tokenize an expression with the standard configuration.
pub fn tokenize(expression: &str) -> ParseResult<Vec<Token>> {
    let configuration = ExpressionConfiguration::default_configuration();
    Tokenizer::new(expression, &configuration).parse()
}

/// Tokenize an expression against an existing configuration.
pub fn tokenize_with_configuration(
    expression: &str,
    configuration: &ExpressionConfiguration,
) -> ParseResult<Vec<Token>> {
    Tokenizer::new(expression, configuration).parse()
}

/// Tokenize with explicit runtime preferences.
pub fn tokenize_with_preferences(
    expression: &str,
    configuration: &ExpressionConfiguration,
    preferences: TokenizerPreferences,
) -> ParseResult<Vec<Token>> {
    Tokenizer::with_preferences(expression, configuration, preferences).parse()
}
