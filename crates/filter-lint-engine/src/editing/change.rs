use std::ops::Range;

use serde::Serialize;
use xi_rope::Rope;

use crate::error::EngineError;

/// Which rows an edit touched, in the coordinates the reprocessor needs.
///
/// Rows `start_row ..= start_row + old_row_extent` of the previous buffer
/// were replaced by rows `start_row ..= start_row + new_row_extent` of the
/// current one. An edit inside a single row is `{ row, 0, 0 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Change {
    pub start_row: usize,
    pub old_row_extent: usize,
    pub new_row_extent: usize,
}

impl Change {
    pub fn new(start_row: usize, old_row_extent: usize, new_row_extent: usize) -> Self {
        Self {
            start_row,
            old_row_extent,
            new_row_extent,
        }
    }

    /// Describes replacing `range` (byte offsets into `old`) with `inserted`.
    ///
    /// Rows end at `\n`, `\r\n` or a lone `\r`, the same terminators
    /// [`split_rows`](crate::editing::split_rows) splits on.
    pub fn from_edit(old: &Rope, range: Range<usize>, inserted: &str) -> Result<Self, EngineError> {
        check_edit(old, &range)?;
        let text = old.to_string();
        let bytes = text.as_bytes();

        let mut first = row_start(&text, range.start);
        // a lone '\r' ending the previous row pairs up with a leading '\n'
        let leading_newline = first == range.start
            && (inserted.starts_with('\n')
                || (inserted.is_empty() && text[range.end..].starts_with('\n')));
        if first > 0 && bytes[first - 1] == b'\r' && leading_newline {
            first = row_start(&text, first - 1);
        }
        let (last, terminated) = row_end(&text, range.end);

        let replacement = [
            &text[first..range.start],
            inserted,
            &text[range.end..last],
        ]
        .concat();
        let closed = usize::from(terminated);
        Ok(Self {
            start_row: count_terminators(&text[..first]),
            old_row_extent: count_terminators(&text[first..last]) - closed,
            new_row_extent: count_terminators(&replacement) - closed,
        })
    }

    /// How far rows after the change move.
    pub fn row_delta(&self) -> isize {
        self.new_row_extent as isize - self.old_row_extent as isize
    }

    /// Rows of the current buffer that must be parsed again.
    pub fn reparsed_rows(&self) -> Range<usize> {
        self.start_row..self.start_row + self.new_row_extent + 1
    }
}

/// Counts row terminators; `\r\n` is one.
fn count_terminators(text: &str) -> usize {
    let bytes = text.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'\n' || (b == b'\r' && bytes.get(i + 1) != Some(&b'\n')))
        .count()
}

/// Start of the row holding `offset`. An offset between `\r` and `\n` is on
/// the row that pair ends.
fn row_start(text: &str, offset: usize) -> usize {
    let bytes = text.as_bytes();
    let mut offset = offset;
    if offset > 0 && bytes[offset - 1] == b'\r' && bytes.get(offset) == Some(&b'\n') {
        offset -= 1;
    }
    text[..offset].rfind(['\n', '\r']).map_or(0, |i| i + 1)
}

/// End of the terminator closing the row that holds `offset`, and whether
/// there is one at all (the last row has none).
fn row_end(text: &str, offset: usize) -> (usize, bool) {
    let bytes = text.as_bytes();
    if offset > 0 && bytes[offset - 1] == b'\r' && bytes.get(offset) == Some(&b'\n') {
        return (offset + 1, true);
    }
    match text[offset..].find(['\n', '\r']) {
        Some(i) if text[offset + i..].starts_with("\r\n") => (offset + i + 2, true),
        Some(i) => (offset + i + 1, true),
        None => (text.len(), false),
    }
}

/// Rejects byte ranges xi-rope would panic on.
pub(crate) fn check_edit(rope: &Rope, range: &Range<usize>) -> Result<(), EngineError> {
    let len = rope.len();
    let fits = range.start <= range.end
        && range.end <= len
        && rope.is_codepoint_boundary(range.start)
        && rope.is_codepoint_boundary(range.end);
    if fits {
        Ok(())
    } else {
        Err(EngineError::EditOutOfBounds {
            start: range.start,
            end: range.end,
            len,
        })
    }
}
