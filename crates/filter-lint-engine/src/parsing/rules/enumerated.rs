//! Conditions with a closed set of values: `Rarity`, `SocketGroup` and the
//! boolean flags (`Identified`, `Corrupted`, ...).

use std::sync::OnceLock;

use regex::Regex;

use super::{Outcome, RuleParser};
use crate::parsing::{diagnostics::Severity, keywords::Rarity, position::Token};

/// `Rarity [operator] <Normal|Magic|Rare|Unique>`
///
/// Matching is case-sensitive; a value that only differs in case gets a
/// solution with the correct spelling.
pub fn rarity(mut p: RuleParser<'_, '_>) -> Outcome<Option<Token<Rarity>>> {
    p.any_operator();
    let Some(value) = p.require_string() else {
        return p.abort(None);
    };

    if let Some(rarity) = Rarity::from_keyword(&value.value) {
        return p.finish(Some(Token::new(rarity, value.range)));
    }

    let names: Vec<&str> = Rarity::ALL.iter().map(|r| r.as_str()).collect();
    let mut diagnostic = p.diagnostic(
        format!(
            "Invalid value for rule Rarity. Expected one of {}.",
            names.join(", ")
        ),
        value.range,
    );
    if let Some(close) = Rarity::ALL
        .iter()
        .find(|r| r.as_str().eq_ignore_ascii_case(&value.value))
    {
        diagnostic = diagnostic.with_solution(Some(value.value.clone()), close.as_str());
    }
    p.report(Severity::Error, diagnostic);
    p.finish(None)
}

fn socket_group_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^[rgbw]{1,6}$").expect("Invalid socket group regex"))
}

/// `SocketGroup [=] <RGBW...>`, stored upper-cased.
pub fn socket_group(mut p: RuleParser<'_, '_>) -> Outcome<Option<Token<String>>> {
    p.equality_operator();
    let Some(value) = p.require_string() else {
        return p.abort(None);
    };

    if socket_group_regex().is_match(&value.value) {
        return p.finish(Some(value.map(|s| s.to_ascii_uppercase())));
    }

    p.error(
        "Invalid value for rule SocketGroup. Expected 1 to 6 of the letters R, G, B and W.",
        value.range,
    );
    p.finish(None)
}

/// `Keyword [=] <true|false>`
pub fn boolean(mut p: RuleParser<'_, '_>) -> Outcome<Option<Token<bool>>> {
    p.equality_operator();
    let Some(value) = p.require_boolean() else {
        return p.abort(None);
    };
    p.finish(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::position::Range;
    use crate::parsing::rules::test_support::{excerpts, run};
    use crate::validation::ValidationData;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Rarity Unique", Some(Rarity::Unique))]
    #[case("Rarity < \"Rare\"", Some(Rarity::Rare))]
    #[case("Rarity >= Magic # blue+", Some(Rarity::Magic))]
    #[case("Rarity Legendary", None)]
    fn rarity_values(#[case] line: &str, #[case] expected: Option<Rarity>) {
        let out = run(line, &ValidationData::default(), rarity);
        assert_eq!(out.value.map(|v| v.value), expected);
        assert_eq!(out.invalid(), expected.is_none());
    }

    #[test]
    fn rarity_wrong_case_offers_solution() {
        let out = run("Rarity unique", &ValidationData::default(), rarity);
        let error = &out.messages.errors[0];
        assert_eq!(error.range, Range::on_row(0, 7, 13));
        let solution = error.solution.as_ref().unwrap();
        assert_eq!(solution.current_text.as_deref(), Some("unique"));
        assert_eq!(solution.replace_with, "Unique");
    }

    #[rstest]
    #[case("SocketGroup RGB", Some("RGB"))]
    #[case("SocketGroup = rrgw", Some("RRGW"))]
    #[case("SocketGroup \"WWWWWW\"", Some("WWWWWW"))]
    #[case("SocketGroup RGBRGBR", None)]
    #[case("SocketGroup RGX", None)]
    fn socket_group_values(#[case] line: &str, #[case] expected: Option<&str>) {
        let out = run(line, &ValidationData::default(), socket_group);
        assert_eq!(out.value.as_ref().map(|v| v.value.as_str()), expected);
        assert_eq!(out.invalid(), expected.is_none());
    }

    #[test]
    fn socket_group_rejects_ordering_operator_but_keeps_parsing() {
        let out = run("SocketGroup >= RG", &ValidationData::default(), socket_group);
        assert_eq!(
            excerpts(&out.messages.errors),
            vec!["Invalid operator for rule SocketGroup."]
        );
        assert_eq!(out.value.map(|v| v.value), Some("RG".to_string()));
    }

    #[rstest]
    #[case("Identified True", Some(true), &[])]
    #[case("Corrupted = \"false\"", Some(false), &[])]
    #[case("ElderItem < true", Some(true), &["Invalid operator for rule ElderItem."])]
    #[case("ShapedMap yes", None, &["Invalid format. Expected a boolean."])]
    #[case("ElderMap", None, &["Invalid format. Expected a boolean."])]
    fn boolean_values(
        #[case] line: &str,
        #[case] expected: Option<bool>,
        #[case] errors: &[&str],
    ) {
        let out = run(line, &ValidationData::default(), boolean);
        assert_eq!(out.value.map(|v| v.value), expected);
        assert_eq!(excerpts(&out.messages.errors), errors.to_vec());
    }
}
