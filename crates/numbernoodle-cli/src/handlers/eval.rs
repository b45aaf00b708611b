//! Eval command handler

use std::io::Write;

use numbernoodle::prelude::{format_value, CalcError, Session};
use tracing::debug;

use crate::commands::EvalArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{render_caret, render_token_table, EvaluationReport, OutputFormat};

use super::printer_for;

/// Execute the eval command
///
/// Fails with the evaluation error after printing it, so the process can
/// exit non-zero. Blank input prints the prompt and succeeds.
pub fn execute_eval<W: Write>(config: &CliConfig, args: &EvalArgs, out: &mut W) -> CliResult<()> {
    let printer = printer_for(config);
    let evaluation = Session::with_config(&config.session).preview(&args.expression);
    debug!(input = %args.expression, message = %evaluation.message(), "eval");

    if args.raw {
        match (evaluation.value(), evaluation.error()) {
            (Some(value), _) => writeln!(out, "{}", format_value(value))?,
            (None, Some(err)) => printer.failure(&err.to_string()),
            (None, None) => {}
        }
    } else {
        match OutputFormat::from(args.format) {
            OutputFormat::Json => {
                let report = EvaluationReport::new(&evaluation, args.tokens);
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
            }
            OutputFormat::Text => {
                writeln!(out, "{}", printer.styled_message(&evaluation))?;
                if let Some(caret) = evaluation
                    .error()
                    .and_then(CalcError::position)
                    .and_then(|pos| render_caret(evaluation.input(), pos))
                {
                    writeln!(out, "{caret}")?;
                }
                if args.tokens {
                    writeln!(out)?;
                    writeln!(out, "{}", render_token_table(evaluation.tokens()))?;
                }
            }
        }
    }

    match evaluation.error() {
        Some(err) => Err(err.clone().into()),
        None => Ok(()),
    }
}
