//! Lexical analysis of expression text
//!
//! The tokenizer never fails. Characters it does not understand become
//! [`TokenKind::Identifier`] tokens so hosts can still display and highlight
//! them; rejecting them is the evaluator's job.

use serde::Serialize;
use std::fmt;

/// Characters that form single-character operator tokens
pub const OPERATOR_CHARS: [char; 6] = ['+', '-', '*', '/', '(', ')'];

/// Token classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Digits with at most one decimal point, starting with a digit
    Number,
    /// One of `+ - * / ( )`
    Operator,
    /// A run of whitespace
    Whitespace,
    /// Any other single character (not evaluable)
    Identifier,
}

impl TokenKind {
    /// Lowercase name used in token tables
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Operator => "operator",
            Self::Whitespace => "whitespace",
            Self::Identifier => "identifier",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified slice of the input
///
/// `position` is the byte offset of the token's first character in the
/// original input, whitespace included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    value: String,
    kind: TokenKind,
    position: usize,
}

impl Token {
    /// Creates a token
    #[must_use]
    pub fn new(value: impl Into<String>, kind: TokenKind, position: usize) -> Self {
        Self {
            value: value.into(),
            kind,
            position,
        }
    }

    /// The source text of the token
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The token kind
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Byte offset where the token starts
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Byte offset one past the token's last byte
    #[must_use]
    pub fn end(&self) -> usize {
        self.position + self.value.len()
    }

    /// Returns true if this token is a number
    #[must_use]
    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Number
    }

    /// Returns true if this token is an operator or parenthesis
    #[must_use]
    pub fn is_operator(&self) -> bool {
        self.kind == TokenKind::Operator
    }

    /// Returns true if this token is whitespace
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    /// Returns true if this token is unrecognized input
    #[must_use]
    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }

    /// The operator character, for operator tokens
    #[must_use]
    pub fn symbol(&self) -> Option<char> {
        if self.is_operator() {
            self.value.chars().next()
        } else {
            None
        }
    }

    /// Returns true if this token is `(`
    #[must_use]
    pub fn is_open_paren(&self) -> bool {
        self.symbol() == Some('(')
    }

    /// Returns true if this token is `)`
    #[must_use]
    pub fn is_close_paren(&self) -> bool {
        self.symbol() == Some(')')
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {} @{}", self.value, self.kind, self.position)
    }
}

/// Tokenizer for converting expression strings to tokens
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the remaining input
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Tokenizes the rest of the input
    pub fn tokenize(&mut self) -> Vec<Token> {
        self.by_ref().collect()
    }

    /// Returns the next token, or None at end of input
    pub fn next_token(&mut self) -> Option<Token> {
        let start = self.pos;
        let ch = self.current_char()?;

        let kind = match ch {
            '0'..='9' => {
                self.read_number();
                TokenKind::Number
            }
            c if OPERATOR_CHARS.contains(&c) => {
                self.advance();
                TokenKind::Operator
            }
            c if c.is_whitespace() => {
                self.skip_whitespace();
                TokenKind::Whitespace
            }
            _ => {
                self.advance();
                TokenKind::Identifier
            }
        };

        Some(Token::new(&self.input[start..self.pos], kind, start))
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    // The caller has already seen a leading digit.
    fn read_number(&mut self) {
        let mut has_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Tokenizes `input` into every token, whitespace and identifiers included
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::new(input).tokenize()
}
