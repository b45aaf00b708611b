//! NumberNoodle - arithmetic expression evaluator
//!
//! Turns a line of text into a number, a token table for display, or an
//! error that points at the offending character.
//!
//! - Tokenizer that never fails and keeps byte positions
//! - Parenthesis balance check ahead of evaluation
//! - Two-stack operator-precedence evaluation with implicit negation
//! - Bounded session history, optionally shared across threads
//!
//! # Example
//!
//! ```rust
//! use numbernoodle::prelude::*;
//!
//! assert_eq!(evaluate("(10 + 2) * 3"), Ok(36.0));
//! assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
//!
//! let mut session = Session::new();
//! assert_eq!(session.submit("1 + 1").message(), "Result: 2");
//! assert!(session.preview("1 + )").message().starts_with("Syntax Error"));
//! assert_eq!(session.history().len(), 1);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{ConfigError, SessionConfig};
    pub use crate::core::balance::{check_balance, max_depth};
    pub use crate::core::evaluator::{evaluate, Evaluator, InputPolicy};
    pub use crate::core::format::format_value;
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::session::{Evaluation, Session, PROMPT_MESSAGE};
    pub use crate::core::shared::SharedSession;
    pub use crate::core::tokenizer::{tokenize, Token, TokenKind, Tokenizer};
    pub use crate::core::{
        CalcError, CalcResult, DivisionPolicy, EvaluationError, Operation, SyntaxError,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_end_to_end() {
        let tokens = tokenize("12+3");
        assert_eq!(tokens.len(), 3);
        assert!(check_balance(&tokens).is_ok());
        assert_eq!(evaluate("12+3"), Ok(15.0));
    }

    #[test]
    fn test_session_from_yaml() {
        let config = SessionConfig::from_yaml_str("division_policy: reject").unwrap();
        let mut session = Session::with_config(&config);
        let evaluation = session.submit("4 / 0");
        assert!(matches!(
            evaluation.error(),
            Some(CalcError::Evaluation(EvaluationError::DivisionByZero { .. }))
        ));
        assert!(session.history().is_empty());
    }
}
