//! Check command handler

use std::io::Write;

use numbernoodle::prelude::{check_balance, max_depth, tokenize};

use crate::commands::CheckArgs;
use crate::error::{CliError, CliResult};
use crate::output::render_caret;

/// Execute the check command: parenthesis balance only, no evaluation
pub fn execute_check<W: Write>(args: &CheckArgs, out: &mut W) -> CliResult<()> {
    let tokens = tokenize(&args.expression);

    match check_balance(&tokens) {
        Ok(()) => {
            writeln!(out, "Balanced (max depth {})", max_depth(&tokens))?;
            Ok(())
        }
        Err(err) => {
            let message = format!("Syntax Error: {err}");
            writeln!(out, "{message}")?;
            if let Some(caret) = err
                .position()
                .and_then(|pos| render_caret(&args.expression, pos))
            {
                writeln!(out, "{caret}")?;
            }
            Err(CliError::check(message))
        }
    }
}
