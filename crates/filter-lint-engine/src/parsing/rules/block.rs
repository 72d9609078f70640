//! `Show` / `Hide` block headers.

use super::{Outcome, RuleParser};
use crate::parsing::diagnostics::Severity;

/// Nothing may follow the keyword except a comment. Unlike rule lines,
/// leftover text is only a warning: the game ignores it instead of
/// rejecting the filter.
pub fn header(p: RuleParser<'_, '_>) -> Outcome<()> {
    p.finish_with((), Severity::Warning)
}
