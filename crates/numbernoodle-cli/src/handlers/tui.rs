//! TUI command handler

use crate::config::CliConfig;
use crate::error::CliResult;

/// Execute the tui command
#[cfg(feature = "tui")]
pub fn execute_tui(config: &CliConfig) -> CliResult<()> {
    numbernoodle::tui::run(&config.session)?;
    Ok(())
}

/// Execute the tui command
#[cfg(not(feature = "tui"))]
pub fn execute_tui(_config: &CliConfig) -> CliResult<()> {
    Err(crate::error::CliError::Unavailable("tui"))
}
