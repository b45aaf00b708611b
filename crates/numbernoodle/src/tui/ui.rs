//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Row, Table, Widget},
    Frame,
};

use crate::core::format::format_value;
use crate::core::tokenizer::TokenKind;

use super::app::NoodleApp;

/// Window title
pub const TITLE: &str = " NumberNoodle ";

/// Key bindings shown in the help panel
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("Enter", "Submit"),
    ("Esc", "Clear"),
    ("↑", "Recall"),
    ("←/→", "Move cursor"),
    ("Ctrl+L", "Clear all"),
    ("Ctrl+C", "Quit"),
];

/// Operators line in the help panel
pub const HELP_OPERATORS: &str = "Ops: + - * /  ( )";

/// Renders the whole UI into the frame
pub fn render(app: &NoodleApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(NoodleUi::new(app), area);
}

/// Widget drawing every panel of the app
#[derive(Debug)]
pub struct NoodleUi<'a> {
    app: &'a NoodleApp,
}

impl<'a> NoodleUi<'a> {
    /// Creates the widget
    #[must_use]
    pub const fn new(app: &'a NoodleApp) -> Self {
        Self { app }
    }

    fn columns(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Min(40), Constraint::Length(24)])
            .split(area)
            .to_vec()
    }

    fn rows(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Expression
                Constraint::Length(3), // Result
                Constraint::Min(5),    // Tokens + History
            ])
            .split(area)
            .to_vec()
    }

    fn lower(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area)
            .to_vec()
    }

    /// Input line with the cursor and any error position highlighted
    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let input = self.app.input();
        let cursor = self.app.cursor();
        let error_at = self
            .app
            .evaluation()
            .error()
            .and_then(crate::core::CalcError::position);

        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
        let error_style = Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::UNDERLINED);

        let mut spans: Vec<Span> = input
            .char_indices()
            .map(|(i, c)| {
                let style = if i == cursor {
                    cursor_style
                } else if Some(i) == error_at {
                    error_style
                } else {
                    Style::default()
                };
                Span::styled(c.to_string(), style)
            })
            .collect();
        if cursor >= input.len() {
            spans.push(Span::styled(" ", cursor_style));
        }

        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .title(" Expression ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    fn render_result(&self, area: Rect, buf: &mut Buffer) {
        let evaluation = self.app.evaluation();
        let style = if evaluation.is_blank() {
            Style::default().fg(Color::Gray)
        } else if evaluation.is_success() {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Red)
        };

        Paragraph::new(Span::styled(evaluation.message(), style))
            .block(
                Block::default()
                    .title(" Result ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_tokens(&self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<Row> = self
            .app
            .evaluation()
            .tokens()
            .iter()
            .map(|token| {
                let style = match token.kind() {
                    TokenKind::Identifier => Style::default().fg(Color::Yellow),
                    TokenKind::Whitespace => Style::default().fg(Color::DarkGray),
                    TokenKind::Number | TokenKind::Operator => Style::default(),
                };
                Row::new(vec![
                    format!("{:?}", token.value()),
                    token.kind().label().to_string(),
                    token.position().to_string(),
                ])
                .style(style)
            })
            .collect();

        let header = Row::new(vec!["Token", "Type", "Index"]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        Table::new(
            rows,
            [
                Constraint::Min(8),
                Constraint::Length(11),
                Constraint::Length(6),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(" Tokens ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .render(area, buf);
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let visible = usize::from(area.height.saturating_sub(2));
        let items: Vec<ListItem> = self
            .app
            .history()
            .last_n(visible)
            .into_iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.expression.as_str(), Style::default().fg(Color::Gray)),
                    Span::raw(" = "),
                    Span::styled(
                        format_value(entry.result),
                        Style::default().fg(Color::Cyan),
                    ),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" History (newest first) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        let mut items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();
        items.push(ListItem::new(""));
        items.push(ListItem::new(Span::styled(
            HELP_OPERATORS,
            Style::default().fg(Color::Cyan),
        )));

        List::new(items)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for NoodleUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let columns = Self::columns(area);
        let [main, help] = columns.as_slice() else {
            return;
        };
        let rows = Self::rows(*main);
        let [input, result, lower] = rows.as_slice() else {
            return;
        };
        let lower = Self::lower(*lower);
        let [tokens, history] = lower.as_slice() else {
            return;
        };

        self.render_input(*input, buf);
        self.render_result(*result, buf);
        self.render_tokens(*tokens, buf);
        self.render_history(*history, buf);
        Self::render_help(*help, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::KeyAction;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(app: &NoodleApp, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn app_with(input: &str) -> NoodleApp {
        let mut app = NoodleApp::new();
        app.set_input(input);
        app
    }

    // ===== Panel tests =====

    #[test]
    fn test_render_panel_titles() {
        let content = draw(&NoodleApp::new(), 100, 30);
        for title in ["NumberNoodle", "Expression", "Result", "Tokens", "History", "Help"] {
            assert!(content.contains(title), "missing panel {title}");
        }
    }

    #[test]
    fn test_render_prompt_when_blank() {
        let content = draw(&NoodleApp::new(), 100, 30);
        assert!(content.contains("Enter an expression"));
    }

    #[test]
    fn test_render_result() {
        let content = draw(&app_with("(10 + 2) * 3"), 100, 30);
        assert!(content.contains("Result: 36"));
    }

    #[test]
    fn test_render_syntax_error() {
        let content = draw(&app_with("(1 + 2"), 100, 30);
        assert!(content.contains("Syntax Error"));
    }

    #[test]
    fn test_render_token_table() {
        let content = draw(&app_with("12+x"), 100, 30);
        assert!(content.contains("Type"));
        assert!(content.contains("Index"));
        assert!(content.contains("\"12\""));
        assert!(content.contains("number"));
        assert!(content.contains("identifier"));
    }

    #[test]
    fn test_render_history_entries() {
        let mut app = app_with("6 * 7");
        app.apply(KeyAction::Submit);
        let content = draw(&app, 100, 30);
        assert!(content.contains("6 * 7 = 42"));
    }

    #[test]
    fn test_render_help_shortcuts() {
        let content = draw(&NoodleApp::new(), 100, 30);
        assert!(content.contains("Enter"));
        assert!(content.contains("Ctrl+L"));
        assert!(content.contains(HELP_OPERATORS));
    }

    #[test]
    fn test_render_small_terminal() {
        let _ = draw(&app_with("1 + 1"), 20, 10);
        let _ = draw(&app_with("1 + 1"), 1, 1);
    }

    #[test]
    fn test_help_shortcuts_have_descriptions() {
        for (key, desc) in HELP_SHORTCUTS {
            assert!(!key.is_empty());
            assert!(!desc.is_empty());
        }
    }
}
