//! Operator definition metadata
//!
//! The front-end only needs an operator's fixity capabilities, precedence,
//! and associativity; operator behavior is implemented downstream.

use serde::{Deserialize, Serialize};

/// Precedence of the logical OR operator
pub const OPERATOR_PRECEDENCE_OR: i32 = 2;
/// Precedence of the logical AND operator
pub const OPERATOR_PRECEDENCE_AND: i32 = 4;
/// Precedence of equality operators
pub const OPERATOR_PRECEDENCE_EQUALITY: i32 = 7;
/// Precedence of comparison operators
pub const OPERATOR_PRECEDENCE_COMPARISON: i32 = 10;
/// Precedence of additive operators
pub const OPERATOR_PRECEDENCE_ADDITIVE: i32 = 12;
/// Precedence of multiplicative operators
pub const OPERATOR_PRECEDENCE_MULTIPLICATIVE: i32 = 14;
/// Standard precedence of the power operator
pub const OPERATOR_PRECEDENCE_POWER: i32 = 16;
/// Alternative, higher power-operator precedence (binds tighter than unary
/// minus when selected in the configuration)
pub const OPERATOR_PRECEDENCE_POWER_HIGHER: i32 = 18;
/// Precedence of unary prefix operators
pub const OPERATOR_PRECEDENCE_UNARY: i32 = 60;

/// Where an operator appears relative to its operand(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fixity {
    Prefix,
    Postfix,
    Infix,
}

impl Fixity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fixity::Prefix => "prefix",
            Fixity::Postfix => "postfix",
            Fixity::Infix => "infix",
        }
    }
}

/// Grouping direction for operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Associativity {
    Left,
    Right,
}

/// Metadata describing one operator: precedence, associativity, and the
/// fixity partitions it participates in. A single definition may carry
/// several fixities and is then indexed under each of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorDefinition {
    precedence: i32,
    associativity: Associativity,
    prefix: bool,
    postfix: bool,
    infix: bool,
}

impl OperatorDefinition {
    /// A prefix operator
    pub fn prefix(precedence: i32) -> Self {
        Self {
            precedence,
            associativity: Associativity::Left,
            prefix: true,
            postfix: false,
            infix: false,
        }
    }

    /// A postfix operator
    pub fn postfix(precedence: i32) -> Self {
        Self {
            precedence,
            associativity: Associativity::Left,
            prefix: false,
            postfix: true,
            infix: false,
        }
    }

    /// A left-associative infix operator
    pub fn infix(precedence: i32) -> Self {
        Self {
            precedence,
            associativity: Associativity::Left,
            prefix: false,
            postfix: false,
            infix: true,
        }
    }

    /// A right-associative infix operator
    pub fn infix_right(precedence: i32) -> Self {
        Self {
            precedence,
            associativity: Associativity::Right,
            prefix: false,
            postfix: false,
            infix: true,
        }
    }

    /// Add another fixity to this definition
    pub fn with_fixity(mut self, fixity: Fixity) -> Self {
        match fixity {
            Fixity::Prefix => self.prefix = true,
            Fixity::Postfix => self.postfix = true,
            Fixity::Infix => self.infix = true,
        }
        self
    }

    pub fn precedence(&self) -> i32 {
        self.precedence
    }

    pub fn associativity(&self) -> Associativity {
        self.associativity
    }

    pub fn is_prefix(&self) -> bool {
        self.prefix
    }

    pub fn is_postfix(&self) -> bool {
        self.postfix
    }

    pub fn is_infix(&self) -> bool {
        self.infix
    }

    /// All fixities this definition carries
    pub fn fixities(&self) -> Vec<Fixity> {
        let mut fixities = Vec::new();
        if self.prefix {
            fixities.push(Fixity::Prefix);
        }
        if self.postfix {
            fixities.push(Fixity::Postfix);
        }
        if self.infix {
            fixities.push(Fixity::Infix);
        }
        fixities
    }
}
