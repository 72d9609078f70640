//! # Tokenizer
//!
//! A forward-only cursor over the text of a single line.
//!
//! Every `next_*` query skips leading whitespace, tries one entry of the
//! token rule table (see [`rules`]) against the remaining text and either
//! returns the token and advances past it, or returns `None` and leaves the
//! cursor exactly where it was. Which tokens are meaningful where is decided
//! by the rule processors, never by the tokenizer.

pub mod rules;

use crate::error::EngineError;
use crate::parsing::position::{Range, Token};

pub use rules::{Operator, TokenKind, TokenRule};

/// Cursor over one line of filter text.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    text: &'a str,
    row: usize,
    /// Byte offset of the first unconsumed character.
    offset: usize,
    /// Byte offset of the first non-whitespace character of the line.
    text_start: usize,
    /// Byte offset just past the last non-whitespace character of the line.
    text_end: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer for `text`, which must be a single line.
    pub fn new(text: &'a str, row: usize) -> Result<Self, EngineError> {
        if text.contains(['\n', '\r']) {
            return Err(EngineError::EmbeddedNewline { row });
        }

        let text_start = text.len() - text.trim_start().len();
        let text_end = text.trim_end().len().max(text_start);

        Ok(Self {
            text,
            row,
            offset: 0,
            text_start,
            text_end,
        })
    }

    /// The unconsumed part of the line, including leading whitespace.
    pub fn remaining(&self) -> &'a str {
        &self.text[self.offset..]
    }

    /// True if only whitespace is left.
    pub fn is_empty(&self) -> bool {
        self.remaining().trim().is_empty()
    }

    /// True if the remaining text is a `#` comment.
    pub fn is_commented(&self) -> bool {
        self.remaining().trim_start().starts_with('#')
    }

    pub fn is_ignored(&self) -> bool {
        self.is_empty() || self.is_commented()
    }

    /// Range of the whole line, from column 0 to its last character.
    pub fn line_range(&self) -> Range {
        Range::on_row(self.row, 0, self.column(self.text.len()))
    }

    /// Range of the line ignoring leading and trailing whitespace.
    pub fn trimmed_range(&self) -> Range {
        Range::on_row(
            self.row,
            self.column(self.text_start),
            self.column(self.text_end),
        )
    }

    /// From the next non-whitespace character to the end of the line.
    pub fn rest_of_line(&self) -> Range {
        Range::on_row(
            self.row,
            self.column(self.next_start()),
            self.column(self.text.len()),
        )
    }

    /// From the next non-whitespace character to the last one on the line.
    pub fn rest_of_text(&self) -> Range {
        let start = self.next_start();
        Range::on_row(
            self.row,
            self.column(start),
            self.column(self.text_end.max(start)),
        )
    }

    pub fn next_number(&mut self) -> Option<Token<i64>> {
        self.next(&rules::NUMBER)
    }

    pub fn next_boolean(&mut self) -> Option<Token<bool>> {
        self.next(&rules::BOOLEAN)
    }

    pub fn next_operator(&mut self) -> Option<Token<Operator>> {
        self.next(&rules::OPERATOR)
    }

    pub fn next_word(&mut self) -> Option<Token<String>> {
        self.next(&rules::WORD)
    }

    pub fn next_string(&mut self) -> Option<Token<String>> {
        self.next(&rules::STRING)
    }

    /// Consumes a trailing `#` comment, up to the last non-whitespace character.
    ///
    /// The returned text includes the `#` marker. Returns `None` when the
    /// remaining text is not a comment.
    pub fn parse_comment(&mut self) -> Option<Token<String>> {
        if !self.is_commented() {
            return None;
        }
        let start = self.next_start();
        let end = self.text_end.max(start);
        let value = self.text[start..end].to_string();
        self.offset = end;
        Some(Token::new(value, self.byte_range(start, end)))
    }

    /// Which kind of token comes next, probing the rule table in priority order.
    pub fn peek_kind(&self) -> Option<TokenKind> {
        let body = &self.text[self.next_start()..];
        rules::PRIORITY
            .iter()
            .find(|rule| rule.probe(body))
            .map(|rule| rule.kind())
    }

    /// Applies one rule at the cursor.
    pub fn next<T>(&mut self, rule: &TokenRule<T>) -> Option<Token<T>> {
        let start = self.next_start();
        let (value, span) = rule.matches(&self.text[start..])?;
        let token_start = start + span.start;
        let token_end = start + span.end;
        self.offset = token_end;
        Some(Token::new(value, self.byte_range(token_start, token_end)))
    }

    fn next_start(&self) -> usize {
        let rest = self.remaining();
        self.offset + (rest.len() - rest.trim_start().len())
    }

    fn byte_range(&self, start: usize, end: usize) -> Range {
        Range::on_row(self.row, self.column(start), self.column(end))
    }

    fn column(&self, byte: usize) -> usize {
        self.text[..byte].chars().count()
    }

    #[cfg(test)]
    fn point(&self) -> crate::parsing::position::Point {
        crate::parsing::position::Point::new(self.row, self.column(self.offset))
    }
}
