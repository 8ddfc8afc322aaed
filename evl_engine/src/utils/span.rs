//! Source location tracking for the expression front-end
//!
//! Expressions are single-line strings, so locations are byte offsets plus
//! 1-based columns. Accurate location tracking is what makes tokenizer
//! errors actionable for embedding applications.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in an expression string with byte offset and column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Byte offset from start of the expression (0-based)
    pub offset: usize,
    /// Column number (1-based)
    pub column: u32,
}

impl Position {
    /// Create a new position
    pub fn new(offset: usize, column: u32) -> Self {
        Self { offset, column }
    }

    /// Create the starting position (offset 0, column 1)
    pub fn start() -> Self {
        Self { offset: 0, column: 1 }
    }

    /// Advance position by one character
    pub fn advance(self, ch: char) -> Self {
        Self {
            offset: self.offset + ch.len_utf8(),
            column: self.column + 1,
        }
    }

    /// Advance position by a string
    pub fn advance_str(self, s: &str) -> Self {
        s.chars().fold(self, |pos, ch| pos.advance(ch))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column)
    }
}

/// A span of expression text from start to end position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Span {
    /// Create a new span
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(
            start.offset <= end.offset,
            "Span start must not be after end"
        );
        Self { start, end }
    }

    /// Create a span from 1-based columns. `end_column` is inclusive (it
    /// may equal `start_column` for a single character); the stored end
    /// position is exclusive.
    pub fn from_columns(start_column: u32, end_column: u32) -> Self {
        Self {
            start: Position::new(start_column.saturating_sub(1) as usize, start_column),
            end: Position::new(end_column as usize, end_column + 1),
        }
    }

    /// Get the start position of this span
    pub fn start(&self) -> Position {
        self.start
    }

    /// Get the end position of this span
    pub fn end(&self) -> Position {
        self.end
    }

    /// Create a single-character span
    pub fn single(pos: Position) -> Self {
        let end = Position {
            offset: pos.offset + 1,
            column: pos.column + 1,
        };
        Self { start: pos, end }
    }

    /// Merge two spans into one covering both
    pub fn merge(self, other: Self) -> Self {
        let start = if self.start.offset < other.start.offset {
            self.start
        } else {
            other.start
        };

        let end = if self.end.offset > other.end.offset {
            self.end
        } else {
            other.end
        };

        Self { start, end }
    }

    /// Get the byte length of this span
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    /// Check if this span is empty
    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Check if this span contains a position
    pub fn contains(&self, pos: Position) -> bool {
        pos.offset >= self.start.offset && pos.offset < self.end.offset
    }

    /// Get the source text for this span from the expression
    pub fn slice<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start.offset..self.end.offset.min(input.len())]
    }

    /// Create an unknown/dummy span (useful for synthesized tokens)
    pub fn dummy() -> Self {
        Self {
            start: Position::start(),
            end: Position::start(),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.column == self.end.column {
            write!(f, "{}", self.start.column)
        } else {
            write!(f, "{}-{}", self.start.column, self.end.column)
        }
    }
}

/// Format an error message with the expression and a caret underline.
///
/// ```text
/// Error: Undefined operator '?'
///   --> 5
///   | 2 + ? 3
///   |     ^
/// ```
pub fn format_error(expression: &str, span: &Span, message: &str) -> String {
    let mut result = String::new();

    result.push_str(&format!("Error: {}\n", message));
    result.push_str(&format!("  --> {}\n", span.start.column));
    result.push_str(&format!("  | {}\n", expression));

    let mut underline = String::from("  | ");
    for _ in 1..span.start.column {
        underline.push(' ');
    }
    let width = (span.end.column.saturating_sub(span.start.column)).max(1);
    for _ in 0..width {
        underline.push('^');
    }
    result.push_str(&underline);
    result.push('\n');

    result
}
