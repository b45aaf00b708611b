//! NumberNoodle CLI Library
//!
//! Command-line front ends for the NumberNoodle evaluator: one-shot `eval`,
//! `tokens` and `check` commands, a line-oriented REPL, and the full-screen
//! terminal interface.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{CheckArgs, Cli, ColorArg, Commands, EvalArgs, FormatArg, TokensArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{
    render_caret, render_history, render_token_table, EvaluationReport, OutputFormat, Printer,
};
