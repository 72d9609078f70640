use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;

use crate::editing::{Change, ShiftRows};
use crate::error::EngineError;
use crate::parsing::{line::Line, parse_line};
use crate::validation::ValidationData;

/// Documents with at least this many rows are parsed on the rayon pool when
/// they need a full rebuild.
pub const PARALLEL_THRESHOLD: usize = 512;

/// Brings a parse result up to date with `current`, the rows of the buffer.
///
/// Without a previous result or a change every row is parsed. Otherwise only
/// the rows the change touched are parsed; the untouched prefix is reused as
/// is and the untouched suffix is reused with its rows shifted. Both paths
/// produce the same lines.
pub fn reprocess<S>(
    current: &[S],
    previous: Option<&[Line]>,
    change: Option<Change>,
    file: Option<&Path>,
    data: &ValidationData,
) -> Result<Vec<Line>, EngineError>
where
    S: AsRef<str> + Sync,
{
    let started = Instant::now();
    let lines = match (previous, change) {
        (Some(previous), Some(change)) => splice(current, previous, change, file, data)?,
        _ => parse_all(current, file, data)?,
    };

    if lines.len() != current.len() {
        return Err(EngineError::LengthMismatch {
            expected: current.len(),
            actual: lines.len(),
        });
    }

    log::debug!(
        "reprocessed {} rows in {:?} ({})",
        current.len(),
        started.elapsed(),
        if previous.is_some() && change.is_some() {
            "incremental"
        } else {
            "full"
        }
    );
    Ok(lines)
}

/// Parses every row; order is preserved on both paths.
pub fn parse_all<S>(
    current: &[S],
    file: Option<&Path>,
    data: &ValidationData,
) -> Result<Vec<Line>, EngineError>
where
    S: AsRef<str> + Sync,
{
    if current.len() >= PARALLEL_THRESHOLD {
        current
            .par_iter()
            .enumerate()
            .map(|(row, text)| parse_line(text.as_ref(), row, file, data))
            .collect()
    } else {
        current
            .iter()
            .enumerate()
            .map(|(row, text)| parse_line(text.as_ref(), row, file, data))
            .collect()
    }
}

fn splice<S>(
    current: &[S],
    previous: &[Line],
    change: Change,
    file: Option<&Path>,
    data: &ValidationData,
) -> Result<Vec<Line>, EngineError>
where
    S: AsRef<str>,
{
    let Change {
        start_row,
        old_row_extent,
        new_row_extent,
    } = change;

    if start_row + old_row_extent >= previous.len() || start_row + new_row_extent >= current.len() {
        return Err(EngineError::ChangeOutOfBounds {
            start_row,
            old_row_extent,
            new_row_extent,
            previous_rows: previous.len(),
            current_rows: current.len(),
        });
    }

    let reparsed = change.reparsed_rows();
    let suffix = &previous[start_row + old_row_extent + 1..];
    let delta = change.row_delta();
    log::trace!(
        "splice: keep {start_row} rows, parse rows {reparsed:?}, shift {} rows by {delta}",
        suffix.len()
    );

    let mut lines = Vec::with_capacity(current.len());
    lines.extend_from_slice(&previous[..start_row]);
    for row in reparsed {
        lines.push(parse_line(current[row].as_ref(), row, file, data)?);
    }
    lines.extend(suffix.iter().map(|line| {
        let mut line = line.clone();
        if delta != 0 {
            line.shift_rows(delta);
        }
        line
    }));
    Ok(lines)
}
