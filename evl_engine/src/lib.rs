// Internal modules
pub mod config;
pub mod definitions;
pub mod dictionaries;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod tokens;
pub mod utils;
pub mod values;

// Re-export key types for library consumers
pub use config::{ExpressionConfiguration, ExpressionConfigurationBuilder};
pub use lexical::{tokenize, tokenize_with_configuration, ParseError, Tokenizer};
pub use tokens::{Token, TokenType};
pub use values::EvaluationValue;
