//! Terminal front end
//!
//! Re-evaluates on every keystroke and shows the result, the token table and
//! the session history side by side.

mod app;
mod input;
mod ui;

pub use app::NoodleApp;
pub use input::{Edit, KeyAction};
pub use ui::{render, NoodleUi};

use std::io;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::debug;

use crate::config::SessionConfig;

/// Runs the TUI on the current terminal until the user quits
///
/// The terminal is restored even when the event loop fails.
pub fn run(config: &SessionConfig) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = NoodleApp::with_config(config);
    let result = run_app(&mut terminal, &mut app, event::read);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    debug!(history = app.history().len(), "tui closed");
    result
}

/// Draws and handles events until the app quits or `next_event` fails
pub fn run_app<B, F>(
    terminal: &mut Terminal<B>,
    app: &mut NoodleApp,
    mut next_event: F,
) -> io::Result<()>
where
    B: Backend,
    F: FnMut() -> io::Result<Event>,
{
    while !app.should_quit() {
        terminal.draw(|frame| render(app, frame))?;

        if let Event::Key(key) = next_event()? {
            app.handle_key(key);
        }
    }

    Ok(())
}
