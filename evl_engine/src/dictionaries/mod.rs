//! Name→definition dictionaries consulted during tokenization
//!
//! The tokenizer resolves every operator lexeme and every `name(` call
//! through these tables. Dictionaries are safe to share read-only across
//! threads; mutation through `add_operator`/`add_function` must not race a
//! running parse.

pub mod functions;
pub mod operators;

pub use functions::FunctionDictionary;
pub use operators::OperatorDictionary;
