//! Parenthesis balance validation
//!
//! Runs before evaluation so that structural mistakes are reported at the
//! parenthesis that caused them rather than somewhere inside the evaluator.

use crate::core::tokenizer::Token;
use crate::core::SyntaxError;

/// Checks that every `(` is closed by a later `)`
///
/// Only operator tokens `(` and `)` are inspected. Fails at the first `)`
/// that would take the depth below zero, or, after the scan, at the
/// innermost `(` that was never closed.
pub fn check_balance(tokens: &[Token]) -> Result<(), SyntaxError> {
    // Positions of the currently open parentheses; the depth is its length.
    let mut open: Vec<usize> = Vec::new();

    for token in tokens {
        if token.is_open_paren() {
            open.push(token.position());
        } else if token.is_close_paren() && open.pop().is_none() {
            return Err(SyntaxError::UnbalancedParentheses {
                position: token.position(),
            });
        }
    }

    match open.last() {
        Some(&position) => Err(SyntaxError::UnbalancedParentheses { position }),
        None => Ok(()),
    }
}

/// Maximum nesting depth reached, for diagnostics
#[must_use]
pub fn max_depth(tokens: &[Token]) -> usize {
    let mut depth: usize = 0;
    let mut deepest = 0;
    for token in tokens {
        if token.is_open_paren() {
            depth += 1;
            deepest = deepest.max(depth);
        } else if token.is_close_paren() {
            depth = depth.saturating_sub(1);
        }
    }
    deepest
}
