//! Numeric context for downstream arithmetic
//!
//! The tokenizer does no arithmetic; the context travels with the
//! configuration so downstream evaluation rounds consistently.

use crate::config::constants::compile_time::numeric::DEFAULT_MATH_CONTEXT_PRECISION;
use bigdecimal::RoundingMode;

/// Precision and rounding policy for decimal arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MathContext {
    /// Significant digits carried through arithmetic
    pub precision: u32,
    /// Rounding applied when results exceed the precision
    pub rounding_mode: RoundingMode,
}

impl MathContext {
    /// Create a context with explicit precision and rounding
    pub fn new(precision: u32, rounding_mode: RoundingMode) -> Self {
        Self {
            precision,
            rounding_mode,
        }
    }
}

impl Default for MathContext {
    /// 68 significant digits, round-half-to-even (banker's rounding)
    fn default() -> Self {
        Self {
            precision: DEFAULT_MATH_CONTEXT_PRECISION,
            rounding_mode: RoundingMode::HalfEven,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_math_context() {
        let context = MathContext::default();
        assert_eq!(context.precision, 68);
        assert_eq!(context.rounding_mode, RoundingMode::HalfEven);
    }

    #[test]
    fn test_custom_math_context() {
        let context = MathContext::new(10, RoundingMode::Down);
        assert_eq!(context.precision, 10);
        assert_eq!(context.rounding_mode, RoundingMode::Down);
    }
}
