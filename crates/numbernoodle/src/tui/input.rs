//! Key bindings for the expression line
//!
//! A key either edits the line (and text edits re-run the preview) or acts
//! on the session: submit, recall, reset, quit.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A change to the expression line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// Type a character at the cursor
    Insert(char),
    /// Remove the character left of the cursor
    Backspace,
    /// Remove the character under the cursor
    Delete,
    /// Cursor one character left
    Left,
    /// Cursor one character right
    Right,
    /// Cursor to the start of the line
    Home,
    /// Cursor to the end of the line
    End,
    /// Empty the line
    Clear,
}

/// What a key press asks of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Edit the expression line
    Edit(Edit),
    /// Evaluate the line and record it on success
    Submit,
    /// Load the newest history entry into the line
    Recall,
    /// Empty the line and forget the history
    Reset,
    /// Leave the app
    Quit,
    /// Unbound key, or a key release
    Ignore,
}

impl From<KeyEvent> for KeyAction {
    fn from(event: KeyEvent) -> Self {
        // Some terminals report releases as well as presses
        if event.kind == KeyEventKind::Release {
            return Self::Ignore;
        }

        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        match (ctrl, event.code) {
            (true, KeyCode::Char('c' | 'q')) => Self::Quit,
            (true, KeyCode::Char('l')) => Self::Reset,
            (true, KeyCode::Char('a')) | (false, KeyCode::Home) => Self::Edit(Edit::Home),
            (true, KeyCode::Char('e')) | (false, KeyCode::End) => Self::Edit(Edit::End),
            (true, KeyCode::Char('u')) | (false, KeyCode::Esc) => Self::Edit(Edit::Clear),
            (true, _) => Self::Ignore,
            (false, KeyCode::Char(c)) => Self::Edit(Edit::Insert(c)),
            (false, KeyCode::Backspace) => Self::Edit(Edit::Backspace),
            (false, KeyCode::Delete) => Self::Edit(Edit::Delete),
            (false, KeyCode::Left) => Self::Edit(Edit::Left),
            (false, KeyCode::Right) => Self::Edit(Edit::Right),
            (false, KeyCode::Enter) => Self::Submit,
            (false, KeyCode::Up) => Self::Recall,
            (false, _) => Self::Ignore,
        }
    }
}
