//! End-to-end tests of `parse_line` over realistic filter rows.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    keywords::{ActionName, FilterName, Rarity},
    line::{ActionValue, Color, FilterValue, Line, LineKind, Rule},
    parse_line,
    position::{Range, Token},
    snapshot,
    tokenizer::Operator,
};
use crate::validation::ValidationData;

fn parse(text: &str, data: &ValidationData) -> Line {
    let line = parse_line(text, 0, None, data).unwrap();
    snapshot::invariants(std::slice::from_ref(&line));
    line
}

fn token<T>(value: T, start: usize, end: usize) -> Token<T> {
    Token::new(value, Range::on_row(0, start, end))
}

#[test]
fn quality_condition() {
    let line = parse("Quality >= 50", &ValidationData::default());
    assert!(!line.invalid);
    let Some(Rule::Filter(rule)) = line.rule() else {
        panic!("expected a filter rule, got {:?}", line.kind);
    };
    assert_eq!(rule.name.value, FilterName::Quality);
    assert_eq!(rule.operator, Some(token(Operator::GreaterEqual, 8, 10)));
    assert_eq!(rule.value, FilterValue::Number(Some(token(50, 11, 13))));
}

#[test]
fn quality_out_of_bounds() {
    let line = parse("Quality >= 500", &ValidationData::default());
    assert!(line.invalid);
    assert_eq!(line.messages.errors.len(), 1);
    let error = &line.messages.errors[0];
    assert!(error.excerpt.contains("0 to 100"), "{}", error.excerpt);
    assert_eq!(error.range, Range::on_row(0, 11, 14));
}

#[test]
fn huge_quality_is_out_of_bounds() {
    let line = parse("Quality 99999999999999999999", &ValidationData::default());
    assert!(line.invalid);
    assert_eq!(line.messages.errors.len(), 1);
    let error = &line.messages.errors[0];
    assert_eq!(
        error.excerpt,
        "Invalid value for rule Quality. Expected 0 to 100."
    );
    assert_eq!(error.range, Range::on_row(0, 8, 28));
}

#[test]
fn text_color_with_alpha_and_comment() {
    let line = parse("SetTextColor 255 0 0 128 # red", &ValidationData::default());
    assert!(!line.invalid);
    let Some(Rule::Action(rule)) = line.rule() else {
        panic!("expected an action rule, got {:?}", line.kind);
    };
    assert_eq!(rule.name.value, ActionName::SetTextColor);
    let ActionValue::Color(Some(color)) = &rule.value else {
        panic!("expected a colour, got {:?}", rule.value);
    };
    assert_eq!(color.rgba(), [255, 0, 0, 128]);
    assert_eq!(
        rule.trailing_comment.as_ref().map(|c| c.value.as_str()),
        Some("# red")
    );
}

#[test]
fn empty_line() {
    let line = parse("", &ValidationData::default());
    assert_eq!(line.kind, LineKind::Empty);
    assert!(!line.invalid);
    assert!(line.messages.is_empty());
}

#[test]
fn class_values_from_list_and_whitelist() {
    let data = ValidationData {
        valid_classes: vec!["Boots".into()],
        class_whitelist: vec!["Gloves".into()],
        ..ValidationData::default()
    };
    let line = parse("Class \"Boots\" \"Gloves\" extra", &data);
    assert!(line.invalid);
    let Some(Rule::Filter(rule)) = line.rule() else {
        panic!("expected a filter rule, got {:?}", line.kind);
    };
    assert_eq!(
        rule.value,
        FilterValue::Strings(vec![
            token("Boots".to_string(), 6, 13),
            token("Gloves".to_string(), 14, 22),
        ])
    );
    assert_eq!(line.messages.errors.len(), 1);
    assert_eq!(line.messages.errors[0].range, Range::on_row(0, 23, 28));
}

#[rstest]
#[case("Rarity < Unique", Some(Rarity::Unique))]
#[case("Rarity = rare", None)]
#[case("Rarity Legendary", None)]
fn rarity_values(#[case] text: &str, #[case] expected: Option<Rarity>) {
    let line = parse(text, &ValidationData::default());
    let Some(Rule::Filter(rule)) = line.rule() else {
        panic!("expected a filter rule, got {:?}", line.kind);
    };
    let FilterValue::Rarity(value) = rule.value else {
        panic!("expected a rarity, got {:?}", rule.value);
    };
    assert_eq!(value.map(|t| t.value), expected);
    assert_eq!(line.invalid, expected.is_none());
}

#[test]
fn unicode_columns_count_characters() {
    let data = ValidationData {
        valid_bases: vec!["Maelström Staff".into()],
        ..ValidationData::default()
    };
    let line = parse("BaseType \"Maelström Staff\" # ö", &data);
    assert!(!line.invalid);
    let Some(Rule::Filter(rule)) = line.rule() else {
        panic!("expected a filter rule, got {:?}", line.kind);
    };
    assert_eq!(
        rule.value,
        FilterValue::Strings(vec![token("Maelström Staff".to_string(), 9, 26)])
    );
    assert_eq!(line.range, Range::on_row(0, 0, 30));
}

#[test]
fn socket_group_is_upper_cased() {
    let line = parse("SocketGroup rgbW", &ValidationData::default());
    assert_eq!(
        line.rule().map(|r| r.name()),
        Some(FilterName::SocketGroup.as_str())
    );
    let Some(Rule::Filter(rule)) = line.rule() else {
        panic!("expected a filter rule");
    };
    assert_eq!(
        rule.value,
        FilterValue::SocketGroup(Some(token("RGBW".to_string(), 12, 16)))
    );
}

#[test]
fn complete_block_snapshot() {
    let data = ValidationData::builtin();
    let text = [
        "Show # $type->currency",
        "    Class \"Currency\" \"Maps\"",
        "    Rarity = Normal",
        "    Identified True",
        "    SetBorderColor 0 0 0",
        "    SetFontSize 45",
        "    PlayAlertSound ShExalted 200",
        "    DisableDropSound",
        "",
        "Hide",
        "    ItemLevel < 300",
    ];
    let lines: Vec<Line> = text
        .iter()
        .enumerate()
        .map(|(row, t)| parse_line(t, row, None, &data).unwrap())
        .collect();
    snapshot::invariants(&lines);
    insta::assert_snapshot!(snapshot::normalize(&lines), @r#"
    0: show # $type->currency
    1: filter Class "Currency" "Maps"
    2: filter Rarity = Normal
    3: filter Identified true
    4: action SetBorderColor 0 0 0
    5: action SetFontSize 45
    6: action PlayAlertSound ShExalted 200
    7: action DisableDropSound
    8: empty
    9: hide
    10: filter ItemLevel < 300 (invalid)
       error 16..19 Invalid value for rule ItemLevel. Expected 0 to 200.
    "#);
}

#[test]
fn colours_compare_by_value_and_range() {
    let line = parse("SetBackgroundColor 1 2 3", &ValidationData::default());
    let Some(Rule::Action(rule)) = line.rule() else {
        panic!("expected an action rule");
    };
    assert_eq!(
        rule.value,
        ActionValue::Color(Some(Color {
            red: token(1, 19, 20),
            green: token(2, 21, 22),
            blue: token(3, 23, 24),
            alpha: None,
        }))
    );
}
