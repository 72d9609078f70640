use serde::Serialize;

use crate::parsing::{
    diagnostics::Messages,
    keywords::{ActionName, BlockKeyword, FilterName, Rarity},
    position::{Range, Token},
    tokenizer::Operator,
};

/// The parse result for one buffer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    /// Full source span of the row.
    pub range: Range,
    /// True iff `messages.errors` is non-empty.
    pub invalid: bool,
    pub messages: Messages,
    pub kind: LineKind,
}

/// What a row turned out to be.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LineKind {
    Empty,
    Comment { text: Token<String> },
    Block(Block),
    Rule(Rule),
    Unknown(Unknown),
}

/// A `Show`/`Hide` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub keyword: Token<BlockKeyword>,
    pub trailing_comment: Option<Token<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    Filter,
    Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "ruleType", rename_all = "lowercase")]
pub enum Rule {
    Filter(FilterRule),
    Action(ActionRule),
}

impl Rule {
    pub fn rule_type(&self) -> RuleType {
        match self {
            Rule::Filter(_) => RuleType::Filter,
            Rule::Action(_) => RuleType::Action,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rule::Filter(rule) => rule.name.value.as_str(),
            Rule::Action(rule) => rule.name.value.as_str(),
        }
    }

    pub fn operator(&self) -> Option<&Token<Operator>> {
        match self {
            Rule::Filter(rule) => rule.operator.as_ref(),
            Rule::Action(rule) => rule.operator.as_ref(),
        }
    }

    pub fn trailing_comment(&self) -> Option<&Token<String>> {
        match self {
            Rule::Filter(rule) => rule.trailing_comment.as_ref(),
            Rule::Action(rule) => rule.trailing_comment.as_ref(),
        }
    }
}

/// A condition line such as `ItemLevel >= 60`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterRule {
    pub name: Token<FilterName>,
    pub operator: Option<Token<Operator>>,
    pub value: FilterValue,
    pub trailing_comment: Option<Token<String>>,
}

/// The typed argument of a condition. `None` means the value was missing or unusable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum FilterValue {
    Number(Option<Token<i64>>),
    Rarity(Option<Token<Rarity>>),
    /// Upper-cased socket colours, e.g. `RGB`.
    SocketGroup(Option<Token<String>>),
    Boolean(Option<Token<bool>>),
    /// Accepted values only; rejected ones are reported as errors.
    Strings(Vec<Token<String>>),
}

/// An action line such as `SetTextColor 255 0 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionRule {
    pub name: Token<ActionName>,
    pub operator: Option<Token<Operator>>,
    pub value: ActionValue,
    pub trailing_comment: Option<Token<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ActionValue {
    Color(Option<Color>),
    Sound(Option<AlertSound>),
    FontSize(Option<Token<i64>>),
    /// A sound file path for `CustomAlertSound`.
    Path(Option<Token<String>>),
    /// Actions without arguments, e.g. `DisableDropSound`.
    Flag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Color {
    pub red: Token<u8>,
    pub green: Token<u8>,
    pub blue: Token<u8>,
    pub alpha: Option<Token<u8>>,
}

impl Color {
    /// RGBA with the game's default alpha of 255 when none is given.
    pub fn rgba(&self) -> [u8; 4] {
        [
            self.red.value,
            self.green.value,
            self.blue.value,
            self.alpha.as_ref().map_or(255, |a| a.value),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertSound {
    pub id: Token<SoundId>,
    pub volume: Option<Token<u16>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SoundId {
    Named(String),
    Numbered(u8),
}

/// A row whose keyword is not part of the format, or could not be read at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unknown {
    /// `None` when no keyword could be tokenized.
    pub keyword: Option<Token<String>>,
}

impl Line {
    /// Assembles a line; `invalid` follows from the presence of errors.
    pub fn new(range: Range, kind: LineKind, messages: Messages) -> Self {
        Self {
            range,
            invalid: messages.has_errors(),
            messages,
            kind,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.kind, LineKind::Empty)
    }

    pub fn rule(&self) -> Option<&Rule> {
        match &self.kind {
            LineKind::Rule(rule) => Some(rule),
            _ => None,
        }
    }

    pub fn block(&self) -> Option<&Block> {
        match &self.kind {
            LineKind::Block(block) => Some(block),
            _ => None,
        }
    }

    /// The keyword text of blocks, rules and readable unknown lines.
    pub fn keyword_text(&self) -> Option<&str> {
        match &self.kind {
            LineKind::Block(block) => Some(block.keyword.value.as_str()),
            LineKind::Rule(rule) => Some(rule.name()),
            LineKind::Unknown(Unknown { keyword }) => keyword.as_ref().map(|k| k.value.as_str()),
            LineKind::Empty | LineKind::Comment { .. } => None,
        }
    }
}
