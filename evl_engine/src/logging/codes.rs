//! Consolidated diagnostic codes and classification system
//!
//! Single source of truth for the engine's diagnostic codes, their metadata,
//! and classification functions. Code constants and their behavioral
//! metadata live together in this module.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a diagnostic code
#[derive(Debug, Clone)]
pub struct CodeMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
}

impl CodeMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Tokenizer error codes
pub mod tokenizer {
    use super::Code;

    pub const UNDEFINED_OPERATOR: Code = Code::new("E020");
    pub const UNDEFINED_FUNCTION: Code = Code::new("E021");
    pub const UNTERMINATED_STRING: Code = Code::new("E022");
    pub const UNKNOWN_ESCAPE: Code = Code::new("E023");
    pub const ILLEGAL_SCIENTIFIC_FORMAT: Code = Code::new("E024");
    pub const UNBALANCED_BRACE: Code = Code::new("E025");
    pub const UNBALANCED_ARRAY: Code = Code::new("E026");
    pub const UNBALANCED_VAR: Code = Code::new("E027");
    pub const MISPLACED_ARRAY_CLOSE: Code = Code::new("E028");
    pub const TOKEN_AFTER_INFIX: Code = Code::new("E029");
}

/// Configuration error codes
pub mod configuration {
    use super::Code;

    pub const OPERATOR_REGISTRATION_CONFLICT: Code = Code::new("C001");
    pub const INVALID_FUNCTION_PARAMETERS: Code = Code::new("C002");
    pub const INVALID_LOGGING_PREFERENCE: Code = Code::new("C003");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const CONFIGURATION_BUILT: Code = Code::new("I010");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
}

// ============================================================================
// CODE METADATA REGISTRY
// ============================================================================

/// Code metadata registry using OnceLock for thread safety
static CODE_REGISTRY: OnceLock<HashMap<&'static str, CodeMetadata>> = OnceLock::new();

/// Initialize and get the code registry
fn get_code_registry() -> &'static HashMap<&'static str, CodeMetadata> {
    CODE_REGISTRY.get_or_init(|| {
        let mut registry = HashMap::new();

        // System errors
        registry.insert(
            "ERR001",
            CodeMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                "Critical internal engine error",
            ),
        );
        registry.insert(
            "ERR002",
            CodeMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                "Engine initialization failure",
            ),
        );

        // Tokenizer errors
        registry.insert(
            "E020",
            CodeMetadata::new(
                "E020",
                "Tokenizer",
                Severity::Medium,
                true,
                "Operator lexeme not present in any fixity partition",
            ),
        );
        registry.insert(
            "E021",
            CodeMetadata::new(
                "E021",
                "Tokenizer",
                Severity::Medium,
                true,
                "Identifier followed by '(' is not a registered function",
            ),
        );
        registry.insert(
            "E022",
            CodeMetadata::new(
                "E022",
                "Tokenizer",
                Severity::Medium,
                true,
                "String literal not closed before end of expression",
            ),
        );
        registry.insert(
            "E023",
            CodeMetadata::new(
                "E023",
                "Tokenizer",
                Severity::Low,
                true,
                "Escape sequence does not denote a known character",
            ),
        );
        registry.insert(
            "E024",
            CodeMetadata::new(
                "E024",
                "Tokenizer",
                Severity::Low,
                true,
                "Scientific-notation literal has a truncated exponent",
            ),
        );
        registry.insert(
            "E025",
            CodeMetadata::new(
                "E025",
                "Tokenizer",
                Severity::Medium,
                true,
                "Unmatched parenthesis",
            ),
        );
        registry.insert(
            "E026",
            CodeMetadata::new(
                "E026",
                "Tokenizer",
                Severity::Medium,
                true,
                "Unmatched array bracket",
            ),
        );
        registry.insert(
            "E027",
            CodeMetadata::new(
                "E027",
                "Tokenizer",
                Severity::Medium,
                true,
                "Unmatched variable delimiter",
            ),
        );
        registry.insert(
            "E028",
            CodeMetadata::new(
                "E028",
                "Tokenizer",
                Severity::Medium,
                true,
                "Array close appears after a token that cannot end an array",
            ),
        );
        registry.insert(
            "E029",
            CodeMetadata::new(
                "E029",
                "Tokenizer",
                Severity::Medium,
                true,
                "Token not permitted directly after an infix operator",
            ),
        );

        // Configuration errors
        registry.insert(
            "C001",
            CodeMetadata::new(
                "C001",
                "Configuration",
                Severity::Low,
                true,
                "Operator registered twice under the same name and fixity",
            ),
        );
        registry.insert(
            "C002",
            CodeMetadata::new(
                "C002",
                "Configuration",
                Severity::Medium,
                true,
                "Function parameter list is invalid (var-arg not last)",
            ),
        );
        registry.insert(
            "C003",
            CodeMetadata::new(
                "C003",
                "Configuration",
                Severity::Low,
                true,
                "Logging preference has an unrecognized value",
            ),
        );

        // Success codes
        registry.insert(
            "I004",
            CodeMetadata::new(
                "I004",
                "System",
                Severity::Low,
                true,
                "Logging system initialized successfully",
            ),
        );
        registry.insert(
            "I010",
            CodeMetadata::new(
                "I010",
                "Configuration",
                Severity::Low,
                true,
                "Expression configuration built successfully",
            ),
        );
        registry.insert(
            "I020",
            CodeMetadata::new(
                "I020",
                "Tokenizer",
                Severity::Low,
                true,
                "Expression tokenized successfully",
            ),
        );

        registry
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific code
pub fn get_code_metadata(code: &str) -> Option<&'static CodeMetadata> {
    get_code_registry().get(code)
}

/// Get severity from a code
pub fn get_severity(code: &str) -> Severity {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if an error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Get human-readable description for a code
pub fn get_description(code: &str) -> &'static str {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get category from a code
pub fn get_category(code: &str) -> &'static str {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_display() {
        assert_eq!(tokenizer::UNDEFINED_OPERATOR.as_str(), "E020");
        assert_eq!(format!("{}", tokenizer::UNDEFINED_OPERATOR), "E020");
    }

    #[test]
    fn test_registry_covers_tokenizer_codes() {
        let codes = [
            tokenizer::UNDEFINED_OPERATOR,
            tokenizer::UNDEFINED_FUNCTION,
            tokenizer::UNTERMINATED_STRING,
            tokenizer::UNKNOWN_ESCAPE,
            tokenizer::ILLEGAL_SCIENTIFIC_FORMAT,
            tokenizer::UNBALANCED_BRACE,
            tokenizer::UNBALANCED_ARRAY,
            tokenizer::UNBALANCED_VAR,
            tokenizer::MISPLACED_ARRAY_CLOSE,
            tokenizer::TOKEN_AFTER_INFIX,
        ];

        for code in codes {
            assert!(get_code_metadata(code.as_str()).is_some());
            assert_ne!(get_description(code.as_str()), "Unknown error");
            assert_eq!(get_category(code.as_str()), "Tokenizer");
        }
    }

    #[test]
    fn test_classification_defaults() {
        assert_eq!(get_severity("does-not-exist"), Severity::Medium);
        assert!(is_recoverable("does-not-exist"));
        assert_eq!(get_description("does-not-exist"), "Unknown error");
        assert_eq!(get_category("does-not-exist"), "Unknown");
    }

    #[test]
    fn test_system_errors_not_recoverable() {
        assert!(!is_recoverable(system::INTERNAL_ERROR.as_str()));
        assert_eq!(get_severity(system::INTERNAL_ERROR.as_str()), Severity::Critical);
    }
}
