//! # Rule Processors
//!
//! One routine per keyword family. A processor receives a [`RuleParser`]
//! whose tokenizer sits just after the keyword, consumes the arguments it
//! expects and returns an [`Outcome`] with the typed value and whatever
//! diagnostics it collected.
//!
//! ## Shared protocols
//!
//! - **Operators**: [`RuleParser::any_operator`], [`RuleParser::equality_operator`]
//!   (ordering operators are an error but parsing continues) and
//!   [`RuleParser::no_operator`].
//! - **Missing values**: [`RuleParser::expected`] reports one error over the
//!   rest of the line; the processor then returns through [`RuleParser::abort`]
//!   without looking at further fields.
//! - **Bounds**: [`Bounds`] checks are scoped to the offending token.
//! - **Trailing text**: [`RuleParser::finish`] captures a trailing comment and
//!   flags anything else left on the line.
//!
//! ## Modules
//!
//! - **`block`**: `Show` / `Hide`
//! - **`numeric`**: bounded integer conditions and `SetFontSize`
//! - **`enumerated`**: `Rarity`, `SocketGroup`, boolean conditions
//! - **`multi`**: `Class` / `BaseType` value lists
//! - **`color`**: `Set*Color`
//! - **`sound`**: `PlayAlertSound*`, `CustomAlertSound`, `DisableDropSound`

pub mod block;
pub mod color;
pub mod enumerated;
pub mod multi;
pub mod numeric;
pub mod sound;

use std::path::Path;

use crate::parsing::{
    diagnostics::{Diagnostic, Messages, Severity},
    position::{Range, Token},
    tokenizer::{Operator, TokenKind, Tokenizer},
};
use crate::validation::ValidationData;

/// Per-line context shared by every processor.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub row: usize,
    pub file: Option<&'a Path>,
    pub keyword: &'a str,
    pub data: &'a ValidationData,
}

/// What a processor produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<V> {
    pub value: V,
    pub operator: Option<Token<Operator>>,
    pub trailing_comment: Option<Token<String>>,
    pub messages: Messages,
}

impl<V> Outcome<V> {
    pub fn invalid(&self) -> bool {
        self.messages.has_errors()
    }

    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            operator: self.operator,
            trailing_comment: self.trailing_comment,
            messages: self.messages,
        }
    }
}

/// Accepted values of a numeric argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    /// Inclusive range.
    Range(i64, i64),
    /// A discrete set, e.g. link counts (a single linked socket does not exist).
    OneOf(&'static [i64]),
}

impl Bounds {
    pub fn contains(self, n: i64) -> bool {
        match self {
            Bounds::Range(min, max) => (min..=max).contains(&n),
            Bounds::OneOf(set) => set.contains(&n),
        }
    }

    pub fn describe(self) -> String {
        match self {
            Bounds::Range(min, max) => format!("{min} to {max}"),
            Bounds::OneOf(set) => match set.split_last() {
                Some((last, [])) => last.to_string(),
                Some((last, rest)) => {
                    let head: Vec<String> = rest.iter().map(i64::to_string).collect();
                    format!("{} or {last}", head.join(", "))
                }
                None => "nothing".to_string(),
            },
        }
    }
}

/// Tokenizer plus diagnostics sink for one rule line.
pub struct RuleParser<'p, 'a> {
    pub tok: &'p mut Tokenizer<'a>,
    pub cx: RuleContext<'p>,
    messages: Messages,
    operator: Option<Token<Operator>>,
}

impl<'p, 'a> RuleParser<'p, 'a> {
    pub fn new(tok: &'p mut Tokenizer<'a>, cx: RuleContext<'p>) -> Self {
        Self {
            tok,
            cx,
            messages: Messages::default(),
            operator: None,
        }
    }

    pub fn keyword(&self) -> &'p str {
        self.cx.keyword
    }

    pub fn data(&self) -> &'p ValidationData {
        self.cx.data
    }

    pub fn has_messages(&self) -> bool {
        !self.messages.is_empty()
    }

    pub fn diagnostic(&self, excerpt: impl Into<String>, range: Range) -> Diagnostic {
        Diagnostic::new(excerpt, range).with_file(self.cx.file.map(Path::to_path_buf))
    }

    pub fn report(&mut self, severity: Severity, diagnostic: Diagnostic) {
        self.messages.push(severity, diagnostic);
    }

    pub fn error(&mut self, excerpt: impl Into<String>, range: Range) {
        let diagnostic = self.diagnostic(excerpt, range);
        self.report(Severity::Error, diagnostic);
    }

    /// Any comparison operator, or none (implying `=`).
    pub fn any_operator(&mut self) {
        self.operator = self.tok.next_operator();
    }

    /// Only `=` (or no operator) is meaningful for this rule.
    pub fn equality_operator(&mut self) {
        self.any_operator();
        if let Some(op) = self.operator
            && op.value != Operator::Equal
        {
            let diagnostic = self
                .diagnostic(
                    format!("Invalid operator for rule {}.", self.keyword()),
                    op.range,
                )
                .with_description("Only `=` can be used with this rule; it may also be omitted.")
                .with_solution(Some(op.value.as_str().to_string()), "=");
            self.report(Severity::Error, diagnostic);
        }
    }

    /// The rule takes no operator at all.
    pub fn no_operator(&mut self) {
        self.any_operator();
        if let Some(op) = self.operator {
            let diagnostic = self
                .diagnostic(
                    format!("Operators are not permitted for rule {}.", self.keyword()),
                    op.range,
                )
                .with_solution(Some(op.value.as_str().to_string()), "");
            self.report(Severity::Error, diagnostic);
        }
    }

    /// Reports a required token that is not there, covering the rest of the line.
    pub fn expected(&mut self, kind: TokenKind) {
        let range = self.tok.rest_of_line();
        self.error(format!("Invalid format. Expected {}.", kind.describe()), range);
    }

    pub fn require_number(&mut self) -> Option<Token<i64>> {
        let number = self.tok.next_number();
        if number.is_none() {
            self.expected(TokenKind::Number);
        }
        number
    }

    pub fn require_string(&mut self) -> Option<Token<String>> {
        let string = self.tok.next_string();
        if string.is_none() {
            self.expected(TokenKind::String);
        }
        string
    }

    pub fn require_boolean(&mut self) -> Option<Token<bool>> {
        let boolean = self.tok.next_boolean();
        if boolean.is_none() {
            self.expected(TokenKind::Boolean);
        }
        boolean
    }

    /// Checks a number against its bounds; the error covers only the token.
    pub fn check_bounds(&mut self, number: &Token<i64>, bounds: Bounds) -> bool {
        if bounds.contains(number.value) {
            return true;
        }
        self.error(
            format!(
                "Invalid value for rule {}. Expected {}.",
                self.keyword(),
                bounds.describe()
            ),
            number.range,
        );
        false
    }

    /// A bounded number that also fits the target integer type.
    pub fn bounded<T: TryFrom<i64>>(
        &mut self,
        number: Token<i64>,
        bounds: Bounds,
    ) -> Option<Token<T>> {
        if !self.check_bounds(&number, bounds) {
            return None;
        }
        let range = number.range;
        T::try_from(number.value).ok().map(|value| Token::new(value, range))
    }

    /// Ends the rule after its expected tokens; leftover text is an error.
    pub fn finish<V>(self, value: V) -> Outcome<V> {
        self.finish_with(value, Severity::Error)
    }

    /// Like [`finish`](Self::finish) with a chosen severity for leftover text.
    pub fn finish_with<V>(mut self, value: V, trailing: Severity) -> Outcome<V> {
        let trailing_comment = self.tok.parse_comment();
        if trailing_comment.is_none() && !self.tok.is_empty() {
            let range = self.tok.rest_of_text();
            let excerpt = match trailing {
                Severity::Error => "Unexpected trailing text. The rule is already complete.",
                _ => "Trailing text is ignored by the game.",
            };
            let diagnostic = self.diagnostic(excerpt, range);
            self.report(trailing, diagnostic);
        }
        Outcome {
            value,
            operator: self.operator,
            trailing_comment,
            messages: self.messages,
        }
    }

    /// Ends the rule early after a missing value; the rest of the line was already reported.
    pub fn abort<V>(self, value: V) -> Outcome<V> {
        Outcome {
            value,
            operator: self.operator,
            trailing_comment: None,
            messages: self.messages,
        }
    }
}
