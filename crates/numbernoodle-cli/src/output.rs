//! Output formatting

use console::{style, Term};
use numbernoodle::prelude::{format_value, Evaluation, HistoryEntry, Token};
use serde::{Deserialize, Serialize};

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// JSON shape of an evaluation
#[derive(Debug, Serialize)]
pub struct EvaluationReport<'a> {
    /// The evaluated text
    pub input: &'a str,
    /// Numeric value; `null` on failure or for non-finite values
    pub value: Option<f64>,
    /// The value as displayed (`Infinity`, `NaN`, ...)
    pub display: Option<String>,
    /// Error text on failure
    pub error: Option<String>,
    /// Byte offset of the error, when known
    pub position: Option<usize>,
    /// The display message
    pub message: String,
    /// Tokens, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<&'a [Token]>,
}

impl<'a> EvaluationReport<'a> {
    /// Builds the report for `evaluation`
    #[must_use]
    pub fn new(evaluation: &'a Evaluation, with_tokens: bool) -> Self {
        let value = evaluation.value();
        let error = evaluation.error();
        Self {
            input: evaluation.input(),
            value: value.filter(|v| v.is_finite()),
            display: value.map(format_value),
            error: error.map(ToString::to_string),
            position: error.and_then(numbernoodle::prelude::CalcError::position),
            message: evaluation.message(),
            tokens: with_tokens.then(|| evaluation.tokens()),
        }
    }
}

/// Renders tokens as an aligned `Token  Type  Index` table
#[must_use]
pub fn render_token_table(tokens: &[Token]) -> String {
    let rows: Vec<(String, &str, String)> = tokens
        .iter()
        .map(|t| {
            (
                format!("{:?}", t.value()),
                t.kind().label(),
                t.position().to_string(),
            )
        })
        .collect();

    let token_width = rows
        .iter()
        .map(|(v, _, _)| v.chars().count())
        .chain(std::iter::once("Token".len()))
        .max()
        .unwrap_or(0);
    let kind_width = rows
        .iter()
        .map(|(_, k, _)| k.len())
        .chain(std::iter::once("Type".len()))
        .max()
        .unwrap_or(0);

    let mut out = format!("{:<token_width$}  {:<kind_width$}  Index", "Token", "Type");
    for (value, kind, index) in rows {
        out.push('\n');
        out.push_str(&format!("{value:<token_width$}  {kind:<kind_width$}  {index}"));
    }
    out
}

/// Points at `position` (a byte offset) under `input`
///
/// Returns the input line and a caret line, or None when the offset is not
/// inside the input.
#[must_use]
pub fn render_caret(input: &str, position: usize) -> Option<String> {
    if position >= input.len() || !input.is_char_boundary(position) {
        return None;
    }
    let column = input[..position].chars().count();
    Some(format!("  {input}\n  {}^", " ".repeat(column)))
}

/// Renders history as numbered `expression = result` lines
#[must_use]
pub fn render_history(entries: &[HistoryEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{:>3}  {}", i + 1, entry.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Styles results and writes diagnostics to stderr
#[derive(Debug)]
pub struct Printer {
    err: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl Printer {
    /// Create a new printer
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            err: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Styles an evaluation message: green on success, red on failure
    #[must_use]
    pub fn styled_message(&self, evaluation: &Evaluation) -> String {
        let message = evaluation.message();
        if !self.use_color || evaluation.is_blank() {
            return message;
        }
        if evaluation.is_success() {
            style(message).green().bold().to_string()
        } else {
            style(message).red().to_string()
        }
    }

    /// Styles a table or listing heading
    #[must_use]
    pub fn heading(&self, text: &str) -> String {
        if self.use_color {
            style(text).cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Prints a failure to stderr, even in quiet mode
    pub fn failure(&self, message: &str) {
        let line = if self.use_color {
            style(message).red().to_string()
        } else {
            message.to_string()
        };
        let _ = self.err.write_line(&line);
    }
}
