use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use xi_rope::Rope;

use crate::editing::{Change, reprocess};
use crate::error::EngineError;
use crate::parsing::{
    diagnostics::{Diagnostic, Severity},
    line::Line,
};
use crate::validation::ValidationData;

/// What the committed parse result lags behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// The result matches the buffer.
    Clean,
    /// Exactly one edit since the last commit; it can be spliced.
    One(Change),
    /// Several edits, or new validation data: everything is parsed again.
    Rebuild,
}

/// One open filter file: the text buffer and its parse result.
///
/// The buffer is the single source of truth. Parsing happens in passes:
/// [`FilterDocument::begin_pass`] captures everything a pass needs, the pass
/// runs anywhere (it is `Send` and touches nothing shared), and
/// [`FilterDocument::commit`] publishes its result if no edit happened in
/// the meantime. [`FilterDocument::apply`] does all three in one call.
#[derive(Debug, Clone)]
pub struct FilterDocument {
    buffer: Rope,
    lines: Arc<Vec<Line>>,
    version: u64,
    pending: Pending,
    file: Option<PathBuf>,
    data: Arc<ValidationData>,
}

/// Everything needed to bring one version of a document up to date.
#[derive(Debug, Clone)]
pub struct ReprocessPass {
    version: u64,
    rows: Vec<String>,
    previous: Option<Arc<Vec<Line>>>,
    change: Option<Change>,
    file: Option<PathBuf>,
    data: Arc<ValidationData>,
}

/// The output of [`ReprocessPass::run`], waiting to be committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPass {
    pub version: u64,
    pub lines: Vec<Line>,
    /// Rows that were parsed rather than reused.
    pub reparsed: Range<usize>,
}

/// Result of [`FilterDocument::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patch {
    pub version: u64,
    pub change: Change,
    pub reparsed: Range<usize>,
}

impl FilterDocument {
    /// Creates a document and parses all of `text`.
    pub fn new(
        text: &str,
        file: Option<PathBuf>,
        data: Arc<ValidationData>,
    ) -> Result<Self, EngineError> {
        let buffer = Rope::from(text);
        let lines = reprocess::parse_all(&split_rows(&buffer), file.as_deref(), &data)?;
        Ok(Self {
            buffer,
            lines: Arc::new(lines),
            version: 0,
            pending: Pending::Clean,
            file,
            data,
        })
    }

    /// Replaces the bytes in `range` with `text` without parsing.
    pub fn edit(&mut self, range: Range<usize>, text: &str) -> Result<Change, EngineError> {
        let change = Change::from_edit(&self.buffer, range.clone(), text)?;
        self.buffer.edit(range, text);
        self.version += 1;
        self.pending = match self.pending {
            Pending::Clean => Pending::One(change),
            Pending::One(_) | Pending::Rebuild => Pending::Rebuild,
        };
        Ok(change)
    }

    /// Snapshots the current version for a parse pass.
    pub fn begin_pass(&self) -> ReprocessPass {
        let (previous, change) = match self.pending {
            Pending::One(change) => (Some(Arc::clone(&self.lines)), Some(change)),
            Pending::Clean | Pending::Rebuild => (None, None),
        };
        ReprocessPass {
            version: self.version,
            rows: split_rows(&self.buffer),
            previous,
            change,
            file: self.file.clone(),
            data: Arc::clone(&self.data),
        }
    }

    /// Publishes a pass result if it belongs to the current version.
    pub fn commit(&mut self, pass: ParsedPass) -> Result<(), EngineError> {
        if pass.version != self.version {
            log::warn!(
                "discarding parse pass for version {} (document is at {})",
                pass.version,
                self.version
            );
            return Err(EngineError::StaleResult {
                pass: pass.version,
                current: self.version,
            });
        }
        self.lines = Arc::new(pass.lines);
        self.pending = Pending::Clean;
        Ok(())
    }

    /// Edits the buffer and brings the parse result up to date. If the pass
    /// fails the edit is rolled back.
    pub fn apply(&mut self, range: Range<usize>, text: &str) -> Result<Patch, EngineError> {
        let (buffer, version, pending) = (self.buffer.clone(), self.version, self.pending);
        let change = self.edit(range, text)?;
        let parsed = match self.begin_pass().run() {
            Ok(parsed) => parsed,
            Err(e) => {
                log::warn!("rolling back edit to version {version}: {e}");
                self.buffer = buffer;
                self.version = version;
                self.pending = pending;
                return Err(e);
            }
        };
        let reparsed = parsed.reparsed.clone();
        self.commit(parsed)?;
        Ok(Patch {
            version: self.version,
            change,
            reparsed,
        })
    }

    /// Swaps the validation data. The next pass parses every row, and
    /// passes begun before the swap can no longer be committed.
    pub fn set_validation_data(&mut self, data: Arc<ValidationData>) {
        self.data = data;
        self.version += 1;
        self.pending = Pending::Rebuild;
    }

    /// Parses the whole buffer again and commits the result.
    pub fn refresh(&mut self) -> Result<(), EngineError> {
        let parsed = self.begin_pass().run()?;
        self.commit(parsed)
    }

    /// The committed parse result. It may lag behind the buffer until the
    /// next commit.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn validation_data(&self) -> &ValidationData {
        &self.data
    }

    /// True when the committed result reflects the buffer.
    pub fn is_current(&self) -> bool {
        self.pending == Pending::Clean
    }

    /// All diagnostics in row order; within a row, errors come first.
    pub fn messages(&self) -> Vec<(Severity, &Diagnostic)> {
        self.lines
            .iter()
            .flat_map(|line| line.messages.iter())
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        self.lines.iter().any(|line| line.invalid)
    }
}

impl ReprocessPass {
    pub fn version(&self) -> u64 {
        self.version
    }

    /// True when the pass splices instead of parsing everything.
    pub fn is_incremental(&self) -> bool {
        self.previous.is_some() && self.change.is_some()
    }

    pub fn run(self) -> Result<ParsedPass, EngineError> {
        let reparsed = match self.change {
            Some(change) if self.previous.is_some() => change.reparsed_rows(),
            _ => 0..self.rows.len(),
        };
        let lines = reprocess::reprocess(
            &self.rows,
            self.previous.as_deref().map(Vec::as_slice),
            self.change,
            self.file.as_deref(),
            &self.data,
        )?;
        Ok(ParsedPass {
            version: self.version,
            lines,
            reparsed,
        })
    }
}

/// Buffer rows without their terminators (`\n`, `\r\n` or a lone `\r`). A
/// trailing terminator opens one more (empty) row, the way editors count rows.
pub fn split_rows(rope: &Rope) -> Vec<String> {
    let text = rope.to_string();
    let mut rows = Vec::new();
    let mut rest = text.as_str();
    while let Some(i) = rest.find(['\n', '\r']) {
        rows.push(rest[..i].to_string());
        let terminator = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[i + terminator..];
    }
    rows.push(rest.to_string());
    rows
}
