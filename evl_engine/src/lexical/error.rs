//! Tokenizer errors with source positions and stable message strings
//!
//! The message strings are part of the external interface; embedding
//! applications match on them. Every error carries 1-based start and end
//! columns (end may equal start for single-character errors) and the
//! offending lexeme, which may be empty.

use crate::logging::codes::{self, Code};
use crate::tokens::Token;
use crate::utils::Span;

pub type ParseResult<T> = Result<T, ParseError>;

/// The single error kind produced by tokenization, parameterized by
/// message and source range. The first error aborts the parse; there is
/// no recovery.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Closing brace not found")]
    ClosingBraceNotFound {
        start_column: u32,
        end_column: u32,
        lexeme: String,
    },

    #[error("Closing array not found")]
    ClosingArrayNotFound {
        start_column: u32,
        end_column: u32,
        lexeme: String,
    },

    #[error("Closing var not found")]
    ClosingVarNotFound {
        start_column: u32,
        end_column: u32,
        lexeme: String,
    },

    #[error("Unexpected closing brace")]
    UnexpectedClosingBrace { start_column: u32, end_column: u32 },

    #[error("Unexpected closing array")]
    UnexpectedClosingArray { start_column: u32, end_column: u32 },

    #[error("Array close not allowed here")]
    ArrayCloseNotAllowed { start_column: u32, end_column: u32 },

    #[error("Unexpected token after infix operator")]
    UnexpectedTokenAfterInfixOperator {
        start_column: u32,
        end_column: u32,
        lexeme: String,
    },

    #[error("Undefined operator '{lexeme}'")]
    UndefinedOperator {
        start_column: u32,
        end_column: u32,
        lexeme: String,
    },

    #[error("Undefined function '{lexeme}'")]
    UndefinedFunction {
        start_column: u32,
        end_column: u32,
        lexeme: String,
    },

    #[error("Illegal scientific format")]
    IllegalScientificFormat {
        start_column: u32,
        end_column: u32,
        lexeme: String,
    },

    #[error("Closing quote not found")]
    ClosingQuoteNotFound {
        start_column: u32,
        end_column: u32,
        lexeme: String,
    },

    #[error("Unknown escape character")]
    UnknownEscapeCharacter {
        start_column: u32,
        end_column: u32,
        lexeme: String,
    },
}

impl ParseError {
    /// Error pinned to an already-built token's position and lexeme
    pub fn unexpected_token_after_infix_operator(token: &Token) -> Self {
        Self::UnexpectedTokenAfterInfixOperator {
            start_column: token.start_column(),
            end_column: token.end_column(),
            lexeme: token.value().to_string(),
        }
    }

    /// 1-based column where the offending range starts
    pub fn start_column(&self) -> u32 {
        match self {
            Self::ClosingBraceNotFound { start_column, .. }
            | Self::ClosingArrayNotFound { start_column, .. }
            | Self::ClosingVarNotFound { start_column, .. }
            | Self::UnexpectedClosingBrace { start_column, .. }
            | Self::UnexpectedClosingArray { start_column, .. }
            | Self::ArrayCloseNotAllowed { start_column, .. }
            | Self::UnexpectedTokenAfterInfixOperator { start_column, .. }
            | Self::UndefinedOperator { start_column, .. }
            | Self::UndefinedFunction { start_column, .. }
            | Self::IllegalScientificFormat { start_column, .. }
            | Self::ClosingQuoteNotFound { start_column, .. }
            | Self::UnknownEscapeCharacter { start_column, .. } => *start_column,
        }
    }

    /// 1-based column where the offending range ends (inclusive)
    pub fn end_column(&self) -> u32 {
        match self {
            Self::ClosingBraceNotFound { end_column, .. }
            | Self::ClosingArrayNotFound { end_column, .. }
            | Self::ClosingVarNotFound { end_column, .. }
            | Self::UnexpectedClosingBrace { end_column, .. }
            | Self::UnexpectedClosingArray { end_column, .. }
            | Self::ArrayCloseNotAllowed { end_column, .. }
            | Self::UnexpectedTokenAfterInfixOperator { end_column, .. }
            | Self::UndefinedOperator { end_column, .. }
            | Self::UndefinedFunction { end_column, .. }
            | Self::IllegalScientificFormat { end_column, .. }
            | Self::ClosingQuoteNotFound { end_column, .. }
            | Self::UnknownEscapeCharacter { end_column, .. } => *end_column,
        }
    }

    /// The offending lexeme; possibly empty
    pub fn lexeme(&self) -> &str {
        match self {
            Self::ClosingBraceNotFound { lexeme, .. }
            | Self::ClosingArrayNotFound { lexeme, .. }
            | Self::ClosingVarNotFound { lexeme, .. }
            | Self::UnexpectedTokenAfterInfixOperator { lexeme, .. }
            | Self::UndefinedOperator { lexeme, .. }
            | Self::UndefinedFunction { lexeme, .. }
            | Self::IllegalScientificFormat { lexeme, .. }
            | Self::ClosingQuoteNotFound { lexeme, .. }
            | Self::UnknownEscapeCharacter { lexeme, .. } => lexeme,
            Self::UnexpectedClosingBrace { .. } => ")",
            Self::UnexpectedClosingArray { .. } | Self::ArrayCloseNotAllowed { .. } => "]",
        }
    }

    /// The human-readable message (identical to the Display output)
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Source span covered by this error
    pub fn span(&self) -> Span {
        Span::from_columns(self.start_column(), self.end_column())
    }

    /// Render this error against its expression with a caret underline
    pub fn format_with_expression(&self, expression: &str) -> String {
        crate::utils::format_error(expression, &self.span(), &self.message())
    }

    /// Diagnostic code for the logging registry
    pub fn error_code(&self) -> Code {
        match self {
            Self::ClosingBraceNotFound { .. } | Self::UnexpectedClosingBrace { .. } => {
                codes::tokenizer::UNBALANCED_BRACE
            }
            Self::ClosingArrayNotFound { .. } | Self::UnexpectedClosingArray { .. } => {
                codes::tokenizer::UNBALANCED_ARRAY
            }
            Self::ClosingVarNotFound { .. } => codes::tokenizer::UNBALANCED_VAR,
            Self::ArrayCloseNotAllowed { .. } => codes::tokenizer::MISPLACED_ARRAY_CLOSE,
            Self::UnexpectedTokenAfterInfixOperator { .. } => codes::tokenizer::TOKEN_AFTER_INFIX,
            Self::UndefinedOperator { .. } => codes::tokenizer::UNDEFINED_OPERATOR,
            Self::UndefinedFunction { .. } => codes::tokenizer::UNDEFINED_FUNCTION,
            Self::IllegalScientificFormat { .. } => codes::tokenizer::ILLEGAL_SCIENTIFIC_FORMAT,
            Self::ClosingQuoteNotFound { .. } => codes::tokenizer::UNTERMINATED_STRING,
            Self::UnknownEscapeCharacter { .. } => codes::tokenizer::UNKNOWN_ESCAPE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_strings_are_stable() {
        let error = ParseError::UndefinedOperator {
            start_column: 3,
            end_column: 4,
            lexeme: "++".to_string(),
        };
        assert_eq!(error.message(), "Undefined operator '++'");

        let error = ParseError::UndefinedFunction {
            start_column: 1,
            end_column: 3,
            lexeme: "FOO".to_string(),
        };
        assert_eq!(error.message(), "Undefined function 'FOO'");

        let error = ParseError::IllegalScientificFormat {
            start_column: 1,
            end_column: 4,
            lexeme: "1.5e".to_string(),
        };
        assert_eq!(error.message(), "Illegal scientific format");

        let error = ParseError::UnknownEscapeCharacter {
            start_column: 2,
            end_column: 3,
            lexeme: "\\q".to_string(),
        };
        assert_eq!(error.message(), "Unknown escape character");
        assert_eq!(error.lexeme(), "\\q");
    }

    #[test]
    fn test_positions_and_span() {
        let error = ParseError::ClosingQuoteNotFound {
            start_column: 4,
            end_column: 9,
            lexeme: "oops".to_string(),
        };

        assert_eq!(error.start_column(), 4);
        assert_eq!(error.end_column(), 9);
        assert_eq!(error.span().start.column, 4);
    }

    #[test]
    fn test_fixed_lexemes() {
        let error = ParseError::UnexpectedClosingBrace {
            start_column: 2,
            end_column: 2,
        };
        assert_eq!(error.lexeme(), ")");
        assert_eq!(error.message(), "Unexpected closing brace");

        let error = ParseError::ArrayCloseNotAllowed {
            start_column: 1,
            end_column: 1,
        };
        assert_eq!(error.lexeme(), "]");
        assert_eq!(error.message(), "Array close not allowed here");
    }

    #[test]
    fn test_format_with_expression() {
        let error = ParseError::UndefinedOperator {
            start_column: 5,
            end_column: 5,
            lexeme: "?".to_string(),
        };

        let rendered = error.format_with_expression("2 + ? 3");
        assert!(rendered.contains("Undefined operator '?'"));
        assert!(rendered.contains("2 + ? 3"));
        assert!(rendered.contains("    ^"));
    }

    #[test]
    fn test_error_code_mapping() {
        let error = ParseError::ClosingBraceNotFound {
            start_column: 1,
            end_column: 4,
            lexeme: "(1+2".to_string(),
        };
        assert_eq!(error.error_code().as_str(), "E025");

        let error = ParseError::UnexpectedTokenAfterInfixOperator {
            start_column: 5,
            end_column: 5,
            lexeme: "*".to_string(),
        };
        assert_eq!(error.error_code().as_str(), "E029");
    }
}
