/// Failures caused by the calling convention rather than by filter content.
///
/// Malformed filter text never produces one of these: it is reported as
/// diagnostics on the affected [`Line`](crate::Line) instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("line {row} contains a line terminator; lines must be split before tokenizing")]
    EmbeddedNewline { row: usize },

    #[error(
        "change starting at row {start_row} (old extent {old_row_extent}, \
         new extent {new_row_extent}) does not fit a document of \
         {previous_rows} previous and {current_rows} current rows"
    )]
    ChangeOutOfBounds {
        start_row: usize,
        old_row_extent: usize,
        new_row_extent: usize,
        previous_rows: usize,
        current_rows: usize,
    },

    #[error("edit range {start}..{end} is not valid for a buffer of {len} bytes")]
    EditOutOfBounds { start: usize, end: usize, len: usize },

    #[error("reassembled document has {actual} lines but the buffer has {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("parse pass for version {pass} is stale (document is at version {current})")]
    StaleResult { pass: u64, current: u64 },
}
