//! noodle: arithmetic expressions from the command line
//!
//! ## Usage
//!
//! ```bash
//! noodle eval "(10 + 2) * 3"          # Result: 36
//! noodle eval --raw "1 / 4"           # 0.25
//! noodle tokens "12+3"                # Token table
//! noodle check "(1 + 2"               # Parenthesis balance only
//! noodle repl                         # One expression per line
//! noodle tui                          # Full-screen interface
//! ```

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use numbernoodle_cli::{
    handlers::{
        execute_check, execute_eval, execute_repl, execute_tokens, execute_tui, printer_for,
    },
    logging, Cli, CliConfig, CliResult, Commands,
};
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = match CliConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(config.verbosity);
    console::set_colors_enabled(config.color.should_color());
    console::set_colors_enabled_stderr(config.color.should_color());

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Evaluation and balance failures were already printed by the handler
            if !e.is_reported() {
                printer_for(&config).failure(&format!("Error: {e}"));
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: &CliConfig) -> CliResult<()> {
    debug!(?command, "dispatch");
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Eval(args) => execute_eval(config, &args, &mut out),
        Commands::Tokens(args) => execute_tokens(config, &args, &mut out),
        Commands::Check(args) => execute_check(&args, &mut out),
        Commands::Repl => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            execute_repl(config, stdin.lock(), &mut out, interactive)
        }
        Commands::Tui => {
            drop(out);
            execute_tui(config)
        }
    }
}
