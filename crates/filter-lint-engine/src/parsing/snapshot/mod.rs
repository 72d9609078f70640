//! # Snapshot Testing Support
//!
//! Utilities for testing the line parser and the reprocessor via snapshot
//! assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: renders parse results as stable one-line summaries for
//!   `insta` snapshots
//! - **`invariants`**: checks every result must satisfy (row alignment, range
//!   ordering, `invalid` agreeing with the error list)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{normalize, summarize};
