//! Arithmetic operators and the division-by-zero policy

use serde::{Deserialize, Serialize};

use crate::core::{CalcResult, EvaluationError};

/// How a zero divisor is handled
///
/// One evaluator uses exactly one policy for every input it sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivisionPolicy {
    /// IEEE-754 semantics: `x / 0` is `±Infinity`, `0 / 0` is `NaN`
    #[default]
    Ieee,
    /// Every zero divisor is an [`EvaluationError::DivisionByZero`]
    Reject,
}

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// Maps an operator character to an operation
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Returns the operator symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Precedence level (higher binds tighter)
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }

    /// Applies the operation to `left` and `right`
    ///
    /// `position` is the operator's byte offset, reported when the division
    /// policy rejects a zero divisor.
    pub fn apply(
        self,
        left: f64,
        right: f64,
        policy: DivisionPolicy,
        position: usize,
    ) -> CalcResult<f64> {
        let value = match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => {
                if right == 0.0 && policy == DivisionPolicy::Reject {
                    return Err(EvaluationError::DivisionByZero { position }.into());
                }
                left / right
            }
        };
        Ok(value)
    }
}
