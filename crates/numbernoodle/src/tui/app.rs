//! TUI application state

use crossterm::event::KeyEvent;

use crate::config::SessionConfig;
use crate::core::history::History;
use crate::core::session::{Evaluation, Session};

use super::input::{Edit, KeyAction};

/// Terminal front end state: the line being edited and its live evaluation
#[derive(Debug)]
pub struct NoodleApp {
    /// Current input expression
    input: String,
    /// Cursor as a byte offset into `input`, always on a char boundary
    cursor: usize,
    /// Evaluation of the current input
    evaluation: Evaluation,
    /// Evaluator and history
    session: Session,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for NoodleApp {
    fn default() -> Self {
        Self::new()
    }
}

impl NoodleApp {
    /// Creates an app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_session(Session::new())
    }

    /// Creates an app from a session configuration
    #[must_use]
    pub fn with_config(config: &SessionConfig) -> Self {
        Self::with_session(Session::with_config(config))
    }

    fn with_session(session: Session) -> Self {
        let evaluation = session.preview("");
        Self {
            input: String::new(),
            cursor: 0,
            evaluation,
            session,
            should_quit: false,
        }
    }

    /// Returns the current input string
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the cursor position
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Evaluation of the current input
    #[must_use]
    pub const fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    /// Returns the calculation history
    #[must_use]
    pub const fn history(&self) -> &History {
        self.session.history()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Replaces the input and re-evaluates it
    pub fn set_input(&mut self, input: &str) {
        self.input = input.to_string();
        self.cursor = self.input.len();
        self.refresh();
    }

    /// Sets the cursor position, snapped back to a char boundary
    pub fn set_cursor(&mut self, pos: usize) {
        let mut pos = pos.min(self.input.len());
        while !self.input.is_char_boundary(pos) {
            pos -= 1;
        }
        self.cursor = pos;
    }

    // Every edit re-evaluates, the same as a keystroke in the input box.
    fn refresh(&mut self) {
        self.evaluation = self.session.preview(&self.input);
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.input[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.input[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    /// Inserts a character at the cursor position
    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.refresh();
    }

    /// Deletes the character before the cursor (backspace)
    pub fn delete_char(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.input.remove(prev);
            self.cursor = prev;
            self.refresh();
        }
    }

    /// Deletes the character at the cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.input.len() {
            self.input.remove(self.cursor);
            self.refresh();
        }
    }

    /// Moves the cursor left
    pub fn move_cursor_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    /// Moves the cursor right
    pub fn move_cursor_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    /// Moves cursor to the beginning of input
    pub fn move_cursor_start(&mut self) {
        self.cursor = 0;
    }

    /// Moves cursor to the end of input
    pub fn move_cursor_end(&mut self) {
        self.cursor = self.input.len();
    }

    /// Clears the input
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
        self.refresh();
    }

    /// Clears everything including history
    pub fn clear_all(&mut self) {
        self.clear();
        self.session.clear_history();
    }

    /// Submits the current input, recording it on success
    pub fn submit(&mut self) {
        self.evaluation = self.session.submit(&self.input);
    }

    /// Loads the last history entry into input
    pub fn recall_last(&mut self) {
        if let Some(entry) = self.session.history().last() {
            let expression = entry.expression.clone();
            self.set_input(&expression);
        }
    }

    /// Applies an edit to the expression line
    pub fn edit(&mut self, edit: Edit) {
        match edit {
            Edit::Insert(c) if !c.is_control() => self.insert_char(c),
            Edit::Insert(_) => {}
            Edit::Backspace => self.delete_char(),
            Edit::Delete => self.delete_char_forward(),
            Edit::Left => self.move_cursor_left(),
            Edit::Right => self.move_cursor_right(),
            Edit::Home => self.move_cursor_start(),
            Edit::End => self.move_cursor_end(),
            Edit::Clear => self.clear(),
        }
    }

    /// Applies a key action
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Edit(edit) => self.edit(edit),
            KeyAction::Submit => self.submit(),
            KeyAction::Recall => self.recall_last(),
            KeyAction::Reset => self.clear_all(),
            KeyAction::Quit => self.quit(),
            KeyAction::Ignore => {}
        }
    }

    /// Handles a terminal key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.apply(KeyAction::from(key));
    }
}
