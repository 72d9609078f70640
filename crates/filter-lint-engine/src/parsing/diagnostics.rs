//! Diagnostics attached to parsed lines.
//!
//! These are plain data: the engine never renders them. Linter adapters map
//! [`Severity`] onto their own message levels.

use std::path::PathBuf;

use serde::Serialize;

use crate::parsing::position::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// A suggested fix: replace `current_text` (or the diagnostic range) with `replace_with`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub current_text: Option<String>,
    pub replace_with: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// One-line summary.
    pub excerpt: String,
    /// Longer explanation, if any.
    pub description: Option<String>,
    pub file: Option<PathBuf>,
    pub url: Option<String>,
    pub range: Range,
    pub solution: Option<Solution>,
}

impl Diagnostic {
    pub fn new(excerpt: impl Into<String>, range: Range) -> Self {
        Self {
            excerpt: excerpt.into(),
            description: None,
            file: None,
            url: None,
            range,
            solution: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_file(mut self, file: Option<PathBuf>) -> Self {
        self.file = file;
        self
    }

    pub fn with_solution(
        mut self,
        current_text: Option<String>,
        replace_with: impl Into<String>,
    ) -> Self {
        self.solution = Some(Solution {
            current_text,
            replace_with: replace_with.into(),
        });
        self
    }
}

/// Diagnostics of one line, bucketed by severity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Messages {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub info: Vec<Diagnostic>,
}

impl Messages {
    pub fn push(&mut self, severity: Severity, diagnostic: Diagnostic) {
        match severity {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
            Severity::Info => self.info.push(diagnostic),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty() && self.info.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.info.len()
    }

    /// All diagnostics, errors first.
    pub fn iter(&self) -> impl Iterator<Item = (Severity, &Diagnostic)> {
        let errors = self.errors.iter().map(|d| (Severity::Error, d));
        let warnings = self.warnings.iter().map(|d| (Severity::Warning, d));
        let info = self.info.iter().map(|d| (Severity::Info, d));
        errors.chain(warnings).chain(info)
    }
}
