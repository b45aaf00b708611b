//! Interactive session: evaluation plus history
//!
//! A host calls [`Session::preview`] whenever the input changes and
//! [`Session::submit`] when the user commits it. Both return an
//! [`Evaluation`]; neither panics or returns an error.

use crate::config::SessionConfig;
use crate::core::evaluator::Evaluator;
use crate::core::format::format_value;
use crate::core::history::History;
use crate::core::tokenizer::{tokenize, Token};
use crate::core::{CalcError, CalcResult};

/// Message shown for blank input
pub const PROMPT_MESSAGE: &str = "Enter an expression to see the result";

/// Everything a host displays for one input
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    input: String,
    tokens: Vec<Token>,
    outcome: Option<CalcResult<f64>>,
}

impl Evaluation {
    /// Tokenizes and evaluates `input`
    ///
    /// Blank input is tokenized but not evaluated.
    #[must_use]
    pub fn run(evaluator: &Evaluator, input: &str) -> Self {
        let tokens = tokenize(input);
        let outcome = if input.trim().is_empty() {
            None
        } else {
            Some(evaluator.evaluate_tokenized(&tokens))
        };
        Self {
            input: input.to_string(),
            tokens,
            outcome,
        }
    }

    /// The evaluated text
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Every token of the input, whitespace and identifiers included
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The evaluation result, or None for blank input
    #[must_use]
    pub const fn outcome(&self) -> Option<&CalcResult<f64>> {
        self.outcome.as_ref()
    }

    /// The value, if evaluation succeeded
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self.outcome {
            Some(Ok(value)) => Some(value),
            _ => None,
        }
    }

    /// The error, if evaluation failed
    #[must_use]
    pub fn error(&self) -> Option<&CalcError> {
        match &self.outcome {
            Some(Err(err)) => Some(err),
            _ => None,
        }
    }

    /// Returns true for blank input
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.outcome.is_none()
    }

    /// Returns true if evaluation succeeded
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, Some(Ok(_)))
    }

    /// The display message
    ///
    /// `Result: <value>` on success, the prefixed error text on failure and
    /// [`PROMPT_MESSAGE`] for blank input.
    #[must_use]
    pub fn message(&self) -> String {
        match &self.outcome {
            None => PROMPT_MESSAGE.to_string(),
            Some(Ok(value)) => format!("Result: {}", format_value(*value)),
            Some(Err(err)) => err.to_string(),
        }
    }
}

/// Evaluator and history for one user
#[derive(Debug, Clone, Default)]
pub struct Session {
    evaluator: Evaluator,
    history: History,
}

impl Session {
    /// Creates a session with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session from a configuration
    #[must_use]
    pub fn with_config(config: &SessionConfig) -> Self {
        Self {
            evaluator: config.evaluator(),
            history: History::with_capacity(config.history_capacity),
        }
    }

    /// Evaluates `input` without touching history
    #[must_use]
    pub fn preview(&self, input: &str) -> Evaluation {
        Evaluation::run(&self.evaluator, input)
    }

    /// Evaluates `input` and records it on success
    pub fn submit(&mut self, input: &str) -> Evaluation {
        let evaluation = self.preview(input);
        if let Some(value) = evaluation.value() {
            self.history.record(input, value);
        }
        evaluation
    }

    /// The session's evaluator
    #[must_use]
    pub const fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Past successful evaluations
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Forgets every history entry
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::core::evaluator::InputPolicy;
    use crate::core::DivisionPolicy;

    // ===== Evaluation tests =====

    #[test]
    fn test_message_success() {
        let session = Session::new();
        assert_eq!(session.preview("(10 + 2) * 3").message(), "Result: 36");
        assert_eq!(session.preview("1 / 4").message(), "Result: 0.25");
    }

    #[test]
    fn test_message_blank() {
        let session = Session::new();
        let evaluation = session.preview("   ");
        assert!(evaluation.is_blank());
        assert_eq!(evaluation.message(), PROMPT_MESSAGE);
        assert_eq!(evaluation.tokens().len(), 1);
    }

    #[test]
    fn test_message_syntax_error() {
        let session = Session::new();
        assert_eq!(
            session.preview("(1 + 2").message(),
            "Syntax Error: Unbalanced parentheses at position 0"
        );
    }

    #[test]
    fn test_message_evaluation_error() {
        let session = Session::with_config(
            &SessionConfig::default().with_division_policy(DivisionPolicy::Reject),
        );
        assert_eq!(
            session.preview("1 / 0").message(),
            "Error: Division by zero at position 2"
        );
    }

    #[test]
    fn test_message_infinity() {
        let session = Session::new();
        assert_eq!(session.preview("10 / 0").message(), "Result: Infinity");
    }

    #[test]
    fn test_evaluation_keeps_all_tokens() {
        let evaluation = Session::new().preview("1 + x");
        assert_eq!(evaluation.tokens().len(), 5);
        assert!(evaluation.error().is_some());
        assert_eq!(evaluation.error().unwrap().position(), Some(4));
    }

    // ===== Session tests =====

    #[test]
    fn test_preview_does_not_record() {
        let session = Session::new();
        let _ = session.preview("1 + 1");
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_submit_records_successes_in_order() {
        let mut session = Session::new();
        assert_eq!(session.submit("1+1").value(), Some(2.0));
        assert_eq!(session.submit("2*2").value(), Some(4.0));

        let entries: Vec<(&str, f64)> = session
            .history()
            .iter()
            .map(|e| (e.expression.as_str(), e.result))
            .collect();
        assert_eq!(entries, vec![("1+1", 2.0), ("2*2", 4.0)]);
    }

    #[test]
    fn test_submit_failure_does_not_record() {
        let mut session = Session::new();
        assert!(!session.submit("1 + )").is_success());
        assert!(!session.submit("").is_success());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_tiny_result_is_not_shown_as_zero() {
        let mut session = Session::new();
        let evaluation = session.submit("1 / 100000000000");
        assert_eq!(evaluation.message(), "Result: 1e-11");
        assert_eq!(session.history().last().unwrap().display(), "1 / 100000000000 = 1e-11");

        let negative = session.preview("0 - 1 / 30000000000");
        assert_ne!(negative.message(), "Result: 0");
        assert!(negative.message().ends_with("e-11"));
    }

    #[test]
    fn test_with_config_capacity() {
        let mut session =
            Session::with_config(&SessionConfig::default().with_history_capacity(2));
        session.submit("1");
        session.submit("2");
        session.submit("3");
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history().first().unwrap().expression, "2");
    }

    #[test]
    fn test_with_config_lenient() {
        let session = Session::with_config(
            &SessionConfig::default().with_input_policy(InputPolicy::Lenient),
        );
        assert_eq!(session.preview("3 apples * 2").value(), Some(6.0));
    }

    #[test]
    fn test_clear_history() {
        let mut session = Session::new();
        session.submit("1");
        session.clear_history();
        assert!(session.history().is_empty());
    }
}
