/*!
 * # Editing Core
 *
 * Keeps a filter's parse result in step with its text while it is edited.
 *
 * ## Architecture Overview
 *
 * ### 1. Single Source of Truth: xi-rope Buffer
 * - The document text lives in one **`xi_rope::Rope`**
 * - Edits are byte-range replacements; the rope is never regenerated from
 *   the parse result
 *
 * ### 2. Row-Level Change Descriptors
 * - Every edit is summarized as a [`Change`]: the first touched row, how many
 *   rows followed it before the edit and how many follow it now
 *
 * ### 3. Splice Reprocessing
 * - Rows are parsed independently, so after an edit only the touched rows are
 *   parsed again
 * - Rows above the edit are reused untouched; rows below are reused with every
 *   range moved by the row delta ([`ShiftRows`])
 * - Documents without a usable previous result are parsed in full, across the
 *   rayon pool when large
 *
 * ### 4. Versioned Passes
 * - A [`ReprocessPass`] is a self-contained snapshot that can run on any thread
 * - Committing a pass whose version is no longer current fails with
 *   `EngineError::StaleResult`; the caller starts a new pass instead
 *
 * ## Module Structure
 *
 * - **`change`**: [`Change`] and its derivation from a text edit
 * - **`translate`**: the [`ShiftRows`] trait over every positioned type
 * - **`reprocess`**: [`reprocess`] itself
 * - **`document`**: [`FilterDocument`], [`ReprocessPass`] and [`Patch`]
 *
 * ## Usage Pattern
 *
 * ```rust
 * use std::sync::Arc;
 * use filter_lint_engine::{FilterDocument, ValidationData};
 *
 * let data = Arc::new(ValidationData::builtin());
 * let mut doc = FilterDocument::new("Show\n    Quality > 5\n", None, data).unwrap();
 *
 * // "5" becomes "500": only row 1 is parsed again
 * let patch = doc.apply(19..20, "500").unwrap();
 * assert_eq!(patch.reparsed, 1..2);
 * assert!(doc.has_errors());
 * ```
 */

pub mod change;
pub mod document;
pub mod reprocess;
pub mod translate;

pub use change::Change;
pub use document::{FilterDocument, ParsedPass, Patch, ReprocessPass, split_rows};
pub use reprocess::reprocess;
pub use translate::ShiftRows;
