//! Line-oriented REPL
//!
//! Each non-command line is submitted to one session, so successful lines
//! accumulate in its history. Lines starting with `:` are commands.

use std::io::{BufRead, Write};

use numbernoodle::prelude::{tokenize, Session};
use tracing::debug;

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{render_history, render_token_table, Printer};

use super::printer_for;

/// Prompt shown before each line on an interactive terminal
pub const PROMPT: &str = "noodle> ";

/// REPL command reference
pub const REPL_HELP: &str = "\
Commands:
  :history        List past results, oldest first
  :tokens <expr>  Show the tokens of an expression
  :clear          Forget the history
  :help           Show this help
  :quit           Leave (also :q, :exit, or end of input)
Anything else is evaluated.";

/// What the loop does after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplStep {
    /// Read the next line
    Continue,
    /// Stop reading
    Quit,
}

/// REPL state: the session plus output settings
#[derive(Debug)]
pub struct Repl {
    session: Session,
    printer: Printer,
    interactive: bool,
}

impl Repl {
    /// Creates a REPL; `interactive` enables the banner and prompt
    #[must_use]
    pub fn new(config: &CliConfig, interactive: bool) -> Self {
        Self {
            session: Session::with_config(&config.session),
            printer: printer_for(config),
            interactive,
        }
    }

    /// The underlying session
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Reads lines until end of input or `:quit`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> CliResult<()> {
        if self.interactive && !self.printer.quiet {
            writeln!(out, "NumberNoodle {} - :help for commands", env!("CARGO_PKG_VERSION"))?;
        }

        let mut lines = input.lines();
        loop {
            if self.interactive {
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            if self.handle_line(&line?, out)? == ReplStep::Quit {
                break;
            }
        }

        debug!(history = self.session.history().len(), "repl finished");
        Ok(())
    }

    /// Handles one line of input
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> CliResult<ReplStep> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(ReplStep::Continue);
        }

        let Some(command) = trimmed.strip_prefix(':') else {
            let evaluation = self.session.submit(line);
            debug!(input = line, success = evaluation.is_success(), "repl line");
            writeln!(out, "{}", self.printer.styled_message(&evaluation))?;
            return Ok(ReplStep::Continue);
        };

        let (name, rest) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(name, rest)| (name, rest.trim()));

        match name {
            "quit" | "q" | "exit" => return Ok(ReplStep::Quit),
            "history" => {
                let entries = self.session.history().to_vec();
                if entries.is_empty() {
                    writeln!(out, "(no history)")?;
                } else {
                    writeln!(out, "{}", render_history(&entries))?;
                }
            }
            "tokens" => {
                writeln!(out, "{}", render_token_table(&tokenize(rest)))?;
            }
            "clear" => {
                self.session.clear_history();
                writeln!(out, "History cleared")?;
            }
            "help" => writeln!(out, "{REPL_HELP}")?,
            _ => writeln!(out, "Unknown command ':{name}' (try :help)")?,
        }
        Ok(ReplStep::Continue)
    }
}

/// Execute the repl command over the given streams
pub fn execute_repl<R: BufRead, W: Write>(
    config: &CliConfig,
    input: R,
    out: &mut W,
    interactive: bool,
) -> CliResult<()> {
    Repl::new(config, interactive).run(input, out)
}
