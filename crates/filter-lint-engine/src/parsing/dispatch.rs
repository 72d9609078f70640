use std::path::Path;

use crate::error::EngineError;
use crate::parsing::{
    diagnostics::{Diagnostic, Messages, Severity},
    keywords::{ActionName, FilterName, Keyword},
    line::{ActionRule, ActionValue, Block, FilterRule, FilterValue, Line, LineKind, Rule, Unknown},
    position::Token,
    rules::{
        Outcome, RuleContext, RuleParser, block, color, enumerated,
        multi::{self, Vocabulary},
        numeric, sound,
    },
    tokenizer::{TokenKind, Tokenizer},
};
use crate::validation::{UnknownKeywordPolicy, ValidationData};

/// Parses one row of filter text.
///
/// Content problems never fail the call; they end up in [`Line::messages`].
/// The only error is a `text` that still contains a line terminator.
pub fn parse_line(
    text: &str,
    row: usize,
    file: Option<&Path>,
    data: &ValidationData,
) -> Result<Line, EngineError> {
    let mut tok = Tokenizer::new(text, row)?;
    let range = tok.line_range();

    if tok.is_empty() {
        return Ok(Line::new(range, LineKind::Empty, Messages::default()));
    }
    if let Some(comment) = tok.parse_comment() {
        return Ok(Line::new(
            range,
            LineKind::Comment { text: comment },
            Messages::default(),
        ));
    }

    let Some(word) = tok.next_word() else {
        return Ok(unreadable(&tok, file));
    };
    let Some(keyword) = Keyword::from_keyword(&word.value) else {
        return Ok(unknown(&tok, word, file, data));
    };

    let cx = RuleContext {
        row,
        file,
        keyword: &word.value,
        data,
    };
    let p = RuleParser::new(&mut tok, cx);

    let (kind, messages) = match keyword {
        Keyword::Block(keyword) => {
            let out = block::header(p);
            let kind = LineKind::Block(Block {
                keyword: Token::new(keyword, word.range),
                trailing_comment: out.trailing_comment,
            });
            (kind, out.messages)
        }
        Keyword::Filter(name) => {
            let out = filter_value(name, p);
            let rule = FilterRule {
                name: Token::new(name, word.range),
                operator: out.operator,
                value: out.value,
                trailing_comment: out.trailing_comment,
            };
            (LineKind::Rule(Rule::Filter(rule)), out.messages)
        }
        Keyword::Action(name) => {
            let out = action_value(name, p);
            let rule = ActionRule {
                name: Token::new(name, word.range),
                operator: out.operator,
                value: out.value,
                trailing_comment: out.trailing_comment,
            };
            (LineKind::Rule(Rule::Action(rule)), out.messages)
        }
    };

    log::trace!("row {row}: {} message(s)", messages.len());
    Ok(Line::new(range, kind, messages))
}

fn filter_value(name: FilterName, p: RuleParser<'_, '_>) -> Outcome<FilterValue> {
    match name {
        FilterName::ItemLevel | FilterName::DropLevel => {
            numeric::condition(p, numeric::LEVEL).map(FilterValue::Number)
        }
        FilterName::Quality => numeric::condition(p, numeric::QUALITY).map(FilterValue::Number),
        FilterName::Sockets => numeric::condition(p, numeric::SOCKETS).map(FilterValue::Number),
        FilterName::LinkedSockets => {
            numeric::condition(p, numeric::LINKED_SOCKETS).map(FilterValue::Number)
        }
        FilterName::Height => numeric::condition(p, numeric::HEIGHT).map(FilterValue::Number),
        FilterName::Width => numeric::condition(p, numeric::WIDTH).map(FilterValue::Number),
        FilterName::SocketGroup => enumerated::socket_group(p).map(FilterValue::SocketGroup),
        FilterName::Rarity => enumerated::rarity(p).map(FilterValue::Rarity),
        FilterName::Class => multi::values(p, Vocabulary::Classes).map(FilterValue::Strings),
        FilterName::BaseType => multi::values(p, Vocabulary::Bases).map(FilterValue::Strings),
        FilterName::Identified
        | FilterName::Corrupted
        | FilterName::ElderItem
        | FilterName::ShaperItem
        | FilterName::ShapedMap
        | FilterName::ElderMap => enumerated::boolean(p).map(FilterValue::Boolean),
    }
}

fn action_value(name: ActionName, p: RuleParser<'_, '_>) -> Outcome<ActionValue> {
    match name {
        ActionName::SetBorderColor | ActionName::SetTextColor | ActionName::SetBackgroundColor => {
            color::color(p).map(ActionValue::Color)
        }
        ActionName::PlayAlertSound | ActionName::PlayAlertSoundPositional => {
            sound::alert_sound(p).map(ActionValue::Sound)
        }
        ActionName::SetFontSize => numeric::font_size(p).map(ActionValue::FontSize),
        ActionName::DisableDropSound => sound::disable_drop_sound(p).map(|()| ActionValue::Flag),
        ActionName::CustomAlertSound => sound::custom_alert_sound(p).map(ActionValue::Path),
    }
}

/// The row has text but does not start with a word.
fn unreadable(tok: &Tokenizer<'_>, file: Option<&Path>) -> Line {
    let found = match tok.peek_kind() {
        Some(TokenKind::Word) | None => "unreadable text".to_string(),
        Some(kind) => kind.describe().to_string(),
    };
    let diagnostic = Diagnostic::new("Unreadable keyword.", tok.trimmed_range())
        .with_description(format!("Expected a keyword at the start of the line, found {found}."))
        .with_file(file.map(Path::to_path_buf));

    let mut messages = Messages::default();
    messages.push(Severity::Error, diagnostic);
    Line::new(
        tok.line_range(),
        LineKind::Unknown(Unknown { keyword: None }),
        messages,
    )
}

/// A well-formed word that is not a keyword. The game skips such rows, so
/// the line is never invalid.
fn unknown(
    tok: &Tokenizer<'_>,
    word: Token<String>,
    file: Option<&Path>,
    data: &ValidationData,
) -> Line {
    let mut messages = Messages::default();
    if data.unknown_keywords == UnknownKeywordPolicy::Warn {
        let diagnostic = Diagnostic::new(format!("Unknown keyword {}.", word.value), word.range)
            .with_file(file.map(Path::to_path_buf));
        messages.push(Severity::Warning, diagnostic);
    }
    Line::new(
        tok.line_range(),
        LineKind::Unknown(Unknown { keyword: Some(word) }),
        messages,
    )
}
