//! Tokens command handler

use std::io::Write;

use numbernoodle::prelude::tokenize;

use crate::commands::TokensArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{render_token_table, OutputFormat};

use super::printer_for;

/// Execute the tokens command
///
/// Tokenizing never fails, so neither does this command apart from I/O.
pub fn execute_tokens<W: Write>(
    config: &CliConfig,
    args: &TokensArgs,
    out: &mut W,
) -> CliResult<()> {
    let tokens = tokenize(&args.expression);

    match OutputFormat::from(args.format) {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &tokens)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            let printer = printer_for(config);
            let table = render_token_table(&tokens);
            let (header, rows) = table.split_once('\n').unwrap_or((table.as_str(), ""));
            writeln!(out, "{}", printer.heading(header))?;
            if !rows.is_empty() {
                writeln!(out, "{rows}")?;
            }
        }
    }
    Ok(())
}
