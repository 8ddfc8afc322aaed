//! Standard constants available to every default configuration
//!
//! Constant names are matched case-insensitively; the snapshot returned by
//! [`standard_constants`] is initialized once and never mutated.

use super::value::EvaluationValue;
use bigdecimal::BigDecimal;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

/// Pi with 100 fractional digits
pub const PI_LITERAL: &str =
    "3.1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679";

/// Euler's number with 65 fractional digits
pub const E_LITERAL: &str =
    "2.71828182845904523536028747135266249775724709369995957496696762772";

static STANDARD_CONSTANTS: OnceLock<HashMap<String, EvaluationValue>> = OnceLock::new();

/// Unmodifiable snapshot of the standard constants map.
///
/// Keys are stored normalized (lowercase); use [`standard_constant`] for
/// case-insensitive lookup.
pub fn standard_constants() -> &'static HashMap<String, EvaluationValue> {
    STANDARD_CONSTANTS.get_or_init(|| {
        let mut constants = HashMap::new();
        constants.insert("true".to_string(), EvaluationValue::Bool(true));
        constants.insert("false".to_string(), EvaluationValue::Bool(false));
        constants.insert(
            "pi".to_string(),
            EvaluationValue::Number(
                BigDecimal::from_str(PI_LITERAL).expect("PI literal is a valid decimal"),
            ),
        );
        constants.insert(
            "e".to_string(),
            EvaluationValue::Number(
                BigDecimal::from_str(E_LITERAL).expect("E literal is a valid decimal"),
            ),
        );
        constants.insert("null".to_string(), EvaluationValue::Null);
        constants
    })
}

/// Case-insensitive lookup into the standard constants
pub fn standard_constant(name: &str) -> Option<&'static EvaluationValue> {
    standard_constants().get(&name.to_lowercase())
}

/// Fresh owned copy of the standard constants, for seeding a configuration
pub fn standard_constants_map() -> HashMap<String, EvaluationValue> {
    standard_constants().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_constants_present() {
        let constants = standard_constants();
        assert_eq!(constants.len(), 5);
        assert_eq!(constants.get("true"), Some(&EvaluationValue::Bool(true)));
        assert_eq!(constants.get("false"), Some(&EvaluationValue::Bool(false)));
        assert_eq!(constants.get("null"), Some(&EvaluationValue::Null));
        assert!(constants.get("pi").unwrap().is_number());
        assert!(constants.get("e").unwrap().is_number());
    }

    #[test]
    fn test_case_insensitive_lookup() {
        assert!(standard_constant("PI").is_some());
        assert!(standard_constant("Pi").is_some());
        assert!(standard_constant("TRUE").is_some());
        assert!(standard_constant("Null").is_some());
        assert!(standard_constant("tau").is_none());
    }

    #[test]
    fn test_pi_precision() {
        // 100 fractional digits survive the round-trip through BigDecimal
        let pi = standard_constant("pi").unwrap();
        let rendered = pi.to_string();
        assert!(rendered.starts_with("3.14159265358979323846"));
        assert_eq!(rendered.len(), PI_LITERAL.len());
    }

    #[test]
    fn test_e_precision() {
        let e = standard_constant("e").unwrap();
        let rendered = e.to_string();
        assert!(rendered.starts_with("2.718281828459045"));
        assert_eq!(rendered.len(), E_LITERAL.len());
    }
}
