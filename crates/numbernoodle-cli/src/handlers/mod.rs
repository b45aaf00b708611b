//! Command handlers
//!
//! Each handler writes to a caller-supplied writer so it can be tested
//! without a terminal.

pub mod check;
pub mod eval;
pub mod repl;
pub mod tokens;
pub mod tui;

pub use check::execute_check;
pub use eval::execute_eval;
pub use repl::{execute_repl, Repl, ReplStep};
pub use tokens::execute_tokens;
pub use tui::execute_tui;

use crate::config::CliConfig;
use crate::output::Printer;

/// Printer honoring the configured color and verbosity
#[must_use]
pub fn printer_for(config: &CliConfig) -> Printer {
    Printer::new(config.color.should_color(), config.verbosity.is_quiet())
}
