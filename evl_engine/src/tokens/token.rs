//! Token record and type tags for the expression tokenizer
//!
//! A token's `value` holds the original lexeme text, except for string
//! literals where escape sequences are already resolved. Operator and
//! function tokens carry a shared reference to their definition; nothing
//! else does.

use crate::definitions::function::FunctionDefinition;
use crate::definitions::operator::OperatorDefinition;
use crate::utils::{Position, Span};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Closed set of token type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    BraceOpen,
    BraceClose,
    ArrayOpen,
    ArrayClose,
    Comma,
    NumberLiteral,
    StringLiteral,
    VariableOrConstant,
    Function,
    PrefixOperator,
    InfixOperator,
    PostfixOperator,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::BraceOpen => "BRACE_OPEN",
            TokenType::BraceClose => "BRACE_CLOSE",
            TokenType::ArrayOpen => "ARRAY_OPEN",
            TokenType::ArrayClose => "ARRAY_CLOSE",
            TokenType::Comma => "COMMA",
            TokenType::NumberLiteral => "NUMBER_LITERAL",
            TokenType::StringLiteral => "STRING_LITERAL",
            TokenType::VariableOrConstant => "VARIABLE_OR_CONSTANT",
            TokenType::Function => "FUNCTION",
            TokenType::PrefixOperator => "PREFIX_OPERATOR",
            TokenType::InfixOperator => "INFIX_OPERATOR",
            TokenType::PostfixOperator => "POSTFIX_OPERATOR",
        }
    }

    /// Whether this type is one of the three operator tags
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenType::PrefixOperator | TokenType::InfixOperator | TokenType::PostfixOperator
        )
    }

    /// Whether tokens of this type carry a definition reference
    pub fn takes_definition(&self) -> bool {
        self.is_operator() || matches!(self, TokenType::Function)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The definition reference carried by operator and function tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenDefinition {
    Operator(Arc<OperatorDefinition>),
    Function(Arc<FunctionDefinition>),
}

/// One lexed token: 1-based start column, lexeme value, type tag, and the
/// definition reference for operator/function tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    start_column: u32,
    value: String,
    token_type: TokenType,
    definition: Option<TokenDefinition>,
}

impl Token {
    /// Create a token without a definition reference.
    pub fn new(start_column: u32, value: impl Into<String>, token_type: TokenType) -> Self {
        debug_assert!(
            !token_type.takes_definition(),
            "{} tokens require a definition",
            token_type
        );
        Self {
            start_column,
            value: value.into(),
            token_type,
            definition: None,
        }
    }

    /// Create an operator token carrying its definition.
    pub fn operator(
        start_column: u32,
        value: impl Into<String>,
        token_type: TokenType,
        definition: Arc<OperatorDefinition>,
    ) -> Self {
        debug_assert!(token_type.is_operator());
        Self {
            start_column,
            value: value.into(),
            token_type,
            definition: Some(TokenDefinition::Operator(definition)),
        }
    }

    /// Create a function token carrying its definition.
    pub fn function(
        start_column: u32,
        value: impl Into<String>,
        definition: Arc<FunctionDefinition>,
    ) -> Self {
        Self {
            start_column,
            value: value.into(),
            token_type: TokenType::Function,
            definition: Some(TokenDefinition::Function(definition)),
        }
    }

    /// 1-based column of this token's first character
    pub fn start_column(&self) -> u32 {
        self.start_column
    }

    /// 1-based column of this token's last character. For string literals
    /// the decoded value can be shorter than the source text, so this is a
    /// lower bound there.
    pub fn end_column(&self) -> u32 {
        let length = self.value.chars().count().max(1) as u32;
        self.start_column + length - 1
    }

    /// The lexeme text (escape-resolved for string literals)
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    pub fn definition(&self) -> Option<&TokenDefinition> {
        self.definition.as_ref()
    }

    /// The operator definition, when this is an operator token
    pub fn operator_definition(&self) -> Option<&Arc<OperatorDefinition>> {
        match &self.definition {
            Some(TokenDefinition::Operator(definition)) => Some(definition),
            _ => None,
        }
    }

    /// The function definition, when this is a function token
    pub fn function_definition(&self) -> Option<&Arc<FunctionDefinition>> {
        match &self.definition {
            Some(TokenDefinition::Function(definition)) => Some(definition),
            _ => None,
        }
    }

    /// Definition is present exactly when the type tag calls for one
    pub fn has_valid_definition(&self) -> bool {
        self.definition.is_some() == self.token_type.takes_definition()
    }

    /// Source span covered by this token
    pub fn span(&self) -> Span {
        let start = Position::new(self.start_column.saturating_sub(1) as usize, self.start_column);
        let end = Position::new(self.end_column() as usize, self.end_column() + 1);
        Span::new(start, end)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::operator::{OperatorDefinition, OPERATOR_PRECEDENCE_ADDITIVE};

    #[test]
    fn test_plain_token() {
        let token = Token::new(3, "42", TokenType::NumberLiteral);

        assert_eq!(token.start_column(), 3);
        assert_eq!(token.end_column(), 4);
        assert_eq!(token.value(), "42");
        assert_eq!(token.token_type(), TokenType::NumberLiteral);
        assert!(token.definition().is_none());
        assert!(token.has_valid_definition());
    }

    #[test]
    fn test_operator_token_carries_definition() {
        let definition = Arc::new(OperatorDefinition::infix(OPERATOR_PRECEDENCE_ADDITIVE));
        let token = Token::operator(1, "+", TokenType::InfixOperator, definition);

        assert!(token.has_valid_definition());
        assert_eq!(
            token.operator_definition().unwrap().precedence(),
            OPERATOR_PRECEDENCE_ADDITIVE
        );
        assert!(token.function_definition().is_none());
    }

    #[test]
    fn test_token_type_classification() {
        assert!(TokenType::PrefixOperator.is_operator());
        assert!(TokenType::InfixOperator.is_operator());
        assert!(TokenType::PostfixOperator.is_operator());
        assert!(!TokenType::Function.is_operator());
        assert!(TokenType::Function.takes_definition());
        assert!(!TokenType::NumberLiteral.takes_definition());
    }

    #[test]
    fn test_single_char_token_span() {
        let token = Token::new(5, ",", TokenType::Comma);
        assert_eq!(token.start_column(), 5);
        assert_eq!(token.end_column(), 5);
        assert_eq!(token.span().start.column, 5);
    }

    #[test]
    fn test_token_type_serialization() {
        let json = serde_json::to_string(&TokenType::VariableOrConstant).unwrap();
        let parsed: TokenType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, TokenType::VariableOrConstant);
    }
}
