//! # Line Parsing
//!
//! Every row of a filter is parsed on its own: rows never influence each
//! other, which is what makes splicing in [`crate::editing`] sound.
//!
//! ## Modules
//!
//! - **`position`**: row/column points, ranges and positioned tokens
//! - **`tokenizer`**: forward-only cursor over one line
//! - **`keywords`**: the closed set of block, filter and action keywords
//! - **`rules`**: one processor per keyword family
//! - **`dispatch`**: [`parse_line`], which classifies a row and runs its processor
//! - **`line`**: the parse result model
//! - **`diagnostics`**: errors, warnings and infos attached to a line
//! - **`snapshot`**: normalization and invariant checks used by tests

pub mod diagnostics;
pub mod dispatch;
pub mod keywords;
pub mod line;
pub mod position;
pub mod rules;
pub mod snapshot;
pub mod tokenizer;

#[cfg(test)]
mod tests;

pub use dispatch::parse_line;
