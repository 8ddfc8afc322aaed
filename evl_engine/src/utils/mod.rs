//! Shared primitive types for the expression front-end
//!
//! Dependency-light location types and helpers used by the tokenizer,
//! error reporting, and logging.

pub mod span;

pub use span::{format_error, Position, Span};
