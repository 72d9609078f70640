use std::fmt::Write;

use crate::parsing::{
    line::{
        ActionValue, AlertSound, Color, FilterValue, Line, LineKind, Rule, RuleType, SoundId,
        Unknown,
    },
    position::Token,
};

/// One summary line per row, followed by one indented line per diagnostic.
///
/// ```text
/// 0: show
/// 1: filter Quality >= 500 (invalid)
///    error 11..14 Invalid value for rule Quality. Expected 0 to 100.
/// ```
pub fn normalize(lines: &[Line]) -> String {
    let mut out = String::new();
    for (row, line) in lines.iter().enumerate() {
        if row > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{row}: {}", summarize(line));
        for (severity, diagnostic) in line.messages.iter() {
            let _ = write!(
                out,
                "\n   {} {}..{} {}",
                severity.as_str(),
                diagnostic.range.start.column,
                diagnostic.range.end.column,
                diagnostic.excerpt
            );
        }
    }
    out
}

/// The row's content without its diagnostics.
pub fn summarize(line: &Line) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut comment = None;

    match &line.kind {
        LineKind::Empty => parts.push("empty".into()),
        LineKind::Comment { text } => {
            parts.push("comment".into());
            parts.push(text.value.clone());
        }
        LineKind::Block(block) => {
            parts.push(block.keyword.value.as_str().to_lowercase());
            comment = block.trailing_comment.as_ref();
        }
        LineKind::Rule(rule) => {
            parts.push(
                match rule.rule_type() {
                    RuleType::Filter => "filter",
                    RuleType::Action => "action",
                }
                .into(),
            );
            parts.push(rule.name().into());
            if let Some(op) = rule.operator() {
                parts.push(op.value.as_str().into());
            }
            match rule {
                Rule::Filter(filter) => parts.extend(filter_value(&filter.value)),
                Rule::Action(action) => parts.extend(action_value(&action.value)),
            }
            comment = rule.trailing_comment();
        }
        LineKind::Unknown(Unknown { keyword }) => {
            parts.push("unknown".into());
            if let Some(keyword) = keyword {
                parts.push(keyword.value.clone());
            }
        }
    }

    if let Some(comment) = comment {
        parts.push(comment.value.clone());
    }
    if line.invalid {
        parts.push("(invalid)".into());
    }
    parts.join(" ")
}

fn filter_value(value: &FilterValue) -> Vec<String> {
    match value {
        FilterValue::Number(n) => vec![or_missing(n.as_ref().map(|t| t.value.to_string()))],
        FilterValue::Rarity(r) => vec![or_missing(r.as_ref().map(|t| t.value.to_string()))],
        FilterValue::SocketGroup(g) => vec![or_missing(g.as_ref().map(|t| t.value.clone()))],
        FilterValue::Boolean(b) => vec![or_missing(b.as_ref().map(|t| t.value.to_string()))],
        FilterValue::Strings(values) if values.is_empty() => vec![or_missing(None)],
        FilterValue::Strings(values) => values.iter().map(quoted).collect(),
    }
}

fn action_value(value: &ActionValue) -> Vec<String> {
    match value {
        ActionValue::Color(Some(Color {
            red,
            green,
            blue,
            alpha,
        })) => [Some(red), Some(green), Some(blue), alpha.as_ref()]
            .into_iter()
            .flatten()
            .map(|c| c.value.to_string())
            .collect(),
        ActionValue::Sound(Some(AlertSound { id, volume })) => {
            let mut parts = vec![match &id.value {
                SoundId::Named(name) => name.clone(),
                SoundId::Numbered(n) => n.to_string(),
            }];
            parts.extend(volume.as_ref().map(|v| v.value.to_string()));
            parts
        }
        ActionValue::FontSize(Some(size)) => vec![size.value.to_string()],
        ActionValue::Path(Some(path)) => vec![quoted(path)],
        ActionValue::Color(None)
        | ActionValue::Sound(None)
        | ActionValue::FontSize(None)
        | ActionValue::Path(None) => vec![or_missing(None)],
        ActionValue::Flag => Vec::new(),
    }
}

fn quoted(token: &Token<String>) -> String {
    format!("\"{}\"", token.value)
}

fn or_missing(value: Option<String>) -> String {
    value.unwrap_or_else(|| "?".into())
}
