//! Token model for the expression front-end
//!
//! The tokenizer emits an ordered sequence of [`Token`]s; downstream
//! parsing consumes it. Tokens outlive the tokenizer that produced them.

pub mod token;

pub use token::{Token, TokenDefinition, TokenType};
