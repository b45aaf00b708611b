//! Expression core: tokenizer, balance validator, evaluator and history
//!
//! Everything a host needs to turn a line of text into a number (or a
//! displayable error) lives here. Hosts never see a panic or an unhandled
//! error: [`session::Session`] converts every failure into a value.

pub mod balance;
pub mod evaluator;
pub mod format;
pub mod history;
mod operations;
pub mod session;
pub mod shared;
pub mod tokenizer;

pub use operations::{DivisionPolicy, Operation};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structural problems with the expression text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A `)` without an earlier `(`, or a `(` that is never closed
    #[error("Unbalanced parentheses at position {position}")]
    UnbalancedParentheses {
        /// Byte offset of the offending parenthesis
        position: usize,
    },

    /// A character outside the expression alphabet
    #[error("Unrecognized character '{character}' at position {position}")]
    UnrecognizedCharacter {
        /// The rejected text
        character: String,
        /// Byte offset of the character
        position: usize,
    },

    /// An operator without enough values to apply to
    #[error("Missing operand for '{operator}' at position {position}")]
    MissingOperand {
        /// The operator symbol
        operator: char,
        /// Byte offset of the operator
        position: usize,
    },

    /// A numeric literal that does not parse as a float
    #[error("Invalid number '{literal}' at position {position}")]
    InvalidNumber {
        /// The literal text
        literal: String,
        /// Byte offset of the literal
        position: usize,
    },

    /// Evaluation finished with zero or several values instead of one
    #[error("Malformed expression: expected a single result, found {values} values")]
    MalformedExpression {
        /// Number of values left on the stack
        values: usize,
    },
}

impl SyntaxError {
    /// Byte offset the error points at, when there is one
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UnbalancedParentheses { position }
            | Self::UnrecognizedCharacter { position, .. }
            | Self::MissingOperand { position, .. }
            | Self::InvalidNumber { position, .. } => Some(*position),
            Self::MalformedExpression { .. } => None,
        }
    }
}

/// Failures while applying operators to well-formed input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// Something other than an arithmetic operator reached the apply step
    #[error("Invalid operator '{operator}'")]
    InvalidOperator {
        /// The symbol that could not be applied
        operator: char,
    },

    /// Zero divisor under [`DivisionPolicy::Reject`]
    #[error("Division by zero at position {position}")]
    DivisionByZero {
        /// Byte offset of the `/`
        position: usize,
    },
}

/// Calculator error: either the text is malformed or evaluation failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Syntax error
    #[error("Syntax Error: {0}")]
    Syntax(#[from] SyntaxError),

    /// Evaluation error
    #[error("Error: {0}")]
    Evaluation(#[from] EvaluationError),
}

impl CalcError {
    /// Returns true for syntax errors
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }

    /// Byte offset to highlight in the input, if known
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Syntax(e) => e.position(),
            Self::Evaluation(EvaluationError::DivisionByZero { position }) => Some(*position),
            Self::Evaluation(EvaluationError::InvalidOperator { .. }) => None,
        }
    }
}
