use serde::Serialize;

/// A zero-based `(row, column)` position in the buffer.
///
/// Columns count Unicode scalar values, not bytes, so that `ö` in base type
/// names occupies a single column the way editors display it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Point {
    pub row: usize,
    pub column: usize,
}

impl Point {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// A source range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Range {
    /// Inclusive start position.
    pub start: Point,
    /// Exclusive end position.
    pub end: Point,
}

impl Range {
    /// A range on a single row between two columns.
    pub fn on_row(row: usize, start_column: usize, end_column: usize) -> Self {
        Self {
            start: Point::new(row, start_column),
            end: Point::new(row, end_column),
        }
    }

    /// Returns true if the range covers no columns.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }
}

/// A value extracted from a line together with the source range it came from.
///
/// Tokenizer queries return `Option<Token<T>>`: `None` means "not found", so
/// a value or range can only be read once the token actually exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<T> {
    pub value: T,
    pub range: Range,
}

impl<T> Token<T> {
    pub fn new(value: T, range: Range) -> Self {
        Self { value, range }
    }

    /// Replaces the value while keeping the source range.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Token<U> {
        Token {
            value: f(self.value),
            range: self.range,
        }
    }
}
