//! Configuration module for the expression engine
//!
//! Two layers, like everything configurable here: compile-time constants
//! (`constants`) and env-var-driven runtime preferences (`runtime`), plus
//! the per-engine [`ExpressionConfiguration`] value consumed by every
//! tokenizer.

pub mod configuration;
pub mod constants;
pub mod runtime;

pub use configuration::{ExpressionConfiguration, ExpressionConfigurationBuilder};
pub use runtime::TokenizerPreferences;
