//! The token rule table.
//!
//! Each rule is a regex anchored at the start of the remaining text plus a
//! conversion of the matched token text into a typed value. Capture group 1
//! is always the token itself; whatever follows it in the pattern is a
//! boundary check that is not consumed.

use std::num::IntErrorKind;
use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

/// The lexical category a rule recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Operator,
    Number,
    Boolean,
    Word,
    String,
}

impl TokenKind {
    /// Article-prefixed name used in diagnostics ("expected a number").
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Operator => "an operator",
            TokenKind::Number => "a number",
            TokenKind::Boolean => "a boolean",
            TokenKind::Word => "a word",
            TokenKind::String => "a string",
        }
    }
}

/// A single entry of the token table.
pub struct TokenRule<T> {
    pub kind: TokenKind,
    pattern: fn() -> &'static Regex,
    convert: fn(&str) -> Option<T>,
}

impl<T> TokenRule<T> {
    /// Matches the rule at the very start of `input`.
    ///
    /// Returns the converted value and the byte span of the token inside
    /// `input`. A pattern match whose text fails conversion is not a match.
    pub fn matches(&self, input: &str) -> Option<(T, Range<usize>)> {
        let caps = (self.pattern)().captures(input)?;
        let token = caps.get(1)?;
        let value = (self.convert)(token.as_str())?;
        Some((value, token.range()))
    }
}

/// Type-erased view of a rule, used to probe the table in priority order.
pub trait Probe: Sync {
    fn kind(&self) -> TokenKind;
    fn probe(&self, input: &str) -> bool;
}

impl<T> Probe for TokenRule<T> {
    fn kind(&self) -> TokenKind {
        self.kind
    }

    fn probe(&self, input: &str) -> bool {
        self.matches(input).is_some()
    }
}

pub static OPERATOR: TokenRule<Operator> = TokenRule {
    kind: TokenKind::Operator,
    pattern: operator_regex,
    convert: Operator::from_symbol,
};

pub static NUMBER: TokenRule<i64> = TokenRule {
    kind: TokenKind::Number,
    pattern: number_regex,
    convert: parse_number,
};

pub static BOOLEAN: TokenRule<bool> = TokenRule {
    kind: TokenKind::Boolean,
    pattern: boolean_regex,
    convert: parse_boolean,
};

pub static WORD: TokenRule<String> = TokenRule {
    kind: TokenKind::Word,
    pattern: word_regex,
    convert: parse_word,
};

pub static STRING: TokenRule<String> = TokenRule {
    kind: TokenKind::String,
    pattern: string_regex,
    convert: parse_string,
};

/// Probe order when the caller does not know what to expect.
///
/// Operators come first because they never overlap with anything else;
/// booleans precede words since `true` is also a word; strings are the
/// catch-all.
pub static PRIORITY: [&dyn Probe; 5] = [&OPERATOR, &NUMBER, &BOOLEAN, &WORD, &STRING];

/// Comparison operator used by condition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Operator {
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "<=")]
    LessEqual,
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = ">=")]
    GreaterEqual,
    #[serde(rename = ">")]
    Greater,
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "<" => Some(Operator::Less),
            "<=" => Some(Operator::LessEqual),
            "=" => Some(Operator::Equal),
            ">=" => Some(Operator::GreaterEqual),
            ">" => Some(Operator::Greater),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Less => "<",
            Operator::LessEqual => "<=",
            Operator::Equal => "=",
            Operator::GreaterEqual => ">=",
            Operator::Greater => ">",
        }
    }
}

/// Digit runs past the `i64` range saturate, so bounds checks still see them.
fn parse_number(text: &str) -> Option<i64> {
    match text.parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

fn parse_boolean(text: &str) -> Option<bool> {
    let bare = text.trim_matches('"');
    if bare.eq_ignore_ascii_case("true") {
        Some(true)
    } else if bare.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_word(text: &str) -> Option<String> {
    Some(text.to_string())
}

fn parse_string(text: &str) -> Option<String> {
    let unquoted = text
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(text);
    Some(unquoted.to_string())
}

fn operator_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(<=|>=|=|<|>)(?:[^<>=]|$)").expect("Invalid operator regex"))
}

fn number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([+-]?[0-9]+)(?:\s|$)").expect("Invalid number regex"))
}

fn boolean_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^(?i)("true"|"false"|true|false)(?:\s|$)"#).expect("Invalid boolean regex")
    })
}

fn word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([A-Za-zö]+)(?:\s|$)").expect("Invalid word regex"))
}

fn string_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^("[^"]*"|[^\s"<>=#][^\s"<>=]*)(?:\s|$)"#).expect("Invalid string regex")
    })
}
