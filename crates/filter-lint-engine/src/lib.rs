pub mod editing;
pub mod error;
pub mod parsing;
pub mod validation;

// Re-export key types for easier usage
pub use editing::{Change, FilterDocument, ParsedPass, Patch, ReprocessPass, ShiftRows, reprocess};
pub use error::EngineError;
pub use parsing::{
    diagnostics::{Diagnostic, Messages, Severity, Solution},
    keywords::{ActionName, BlockKeyword, FilterName, Rarity},
    line::*,
    parse_line,
    position::{Point, Range, Token},
    tokenizer::{Operator, Tokenizer},
};
pub use validation::{UnknownKeywordPolicy, ValidationData};
