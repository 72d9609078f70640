//! `Class` and `BaseType`: one or more values checked against a vocabulary.

use super::{Outcome, RuleParser};
use crate::parsing::{diagnostics::Severity, position::Token, tokenizer::TokenKind};
use crate::validation::ValidationData;

/// Which vocabulary a multi-value rule validates against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    Classes,
    Bases,
}

impl Vocabulary {
    fn accepts(self, data: &ValidationData, value: &str) -> bool {
        match self {
            Vocabulary::Classes => data.is_class(value),
            Vocabulary::Bases => data.is_base(value),
        }
    }

    fn noun(self) -> &'static str {
        match self {
            Vocabulary::Classes => "item class",
            Vocabulary::Bases => "base type",
        }
    }
}

/// `Keyword [=] <value> [<value>...]`
///
/// Every value is checked on its own; rejected values are reported on their
/// own range and left out of the result. "Nothing found" is only reported
/// when the line has no value at all and nothing else was reported yet.
pub fn values(mut p: RuleParser<'_, '_>, vocabulary: Vocabulary) -> Outcome<Vec<Token<String>>> {
    p.equality_operator();

    let mut accepted = Vec::new();
    let mut seen = 0usize;
    while let Some(value) = p.tok.next_string() {
        seen += 1;
        if vocabulary.accepts(p.data(), &value.value) {
            accepted.push(value);
        } else {
            let diagnostic = p
                .diagnostic(
                    format!(
                        "Invalid value for rule {}. \"{}\" is not a known {}.",
                        p.keyword(),
                        value.value,
                        vocabulary.noun()
                    ),
                    value.range,
                )
                .with_description(
                    "Add it to the whitelist in the settings if the game accepts it.",
                );
            p.report(Severity::Error, diagnostic);
        }
    }

    if seen == 0 && !p.has_messages() {
        p.expected(TokenKind::String);
        return p.abort(accepted);
    }
    p.finish(accepted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::position::Range;
    use crate::parsing::rules::test_support::{excerpts, run};
    use pretty_assertions::assert_eq;

    fn data() -> ValidationData {
        ValidationData {
            valid_classes: vec!["Boots".into(), "Body Armours".into()],
            class_whitelist: vec!["Gloves".into()],
            valid_bases: vec!["Maelström Staff".into()],
            ..ValidationData::default()
        }
    }

    fn accepted(out: &Outcome<Vec<Token<String>>>) -> Vec<&str> {
        out.value.iter().map(|v| v.value.as_str()).collect()
    }

    #[test]
    fn valid_list_and_whitelist_both_accept() {
        let out = run("Class \"Boots\" Gloves \"Body Armours\"", &data(), |p| {
            values(p, Vocabulary::Classes)
        });
        assert!(!out.invalid());
        assert_eq!(accepted(&out), vec!["Boots", "Gloves", "Body Armours"]);
    }

    #[test]
    fn bad_value_is_reported_alone_and_good_values_stay() {
        let out = run("Class \"Boots\" \"Gloves\" extra", &data(), |p| {
            values(p, Vocabulary::Classes)
        });
        assert!(out.invalid());
        assert_eq!(accepted(&out), vec!["Boots", "Gloves"]);
        assert_eq!(
            excerpts(&out.messages.errors),
            vec!["Invalid value for rule Class. \"extra\" is not a known item class."]
        );
        assert_eq!(out.messages.errors[0].range, Range::on_row(0, 23, 28));
    }

    #[test]
    fn all_values_bad_reports_each_without_nothing_found() {
        let out = run("BaseType Foo Bar", &data(), |p| values(p, Vocabulary::Bases));
        assert_eq!(out.messages.errors.len(), 2);
        assert!(out.value.is_empty());
    }

    #[test]
    fn no_value_is_expected_string() {
        let out = run("BaseType   # nothing", &data(), |p| values(p, Vocabulary::Bases));
        assert_eq!(
            excerpts(&out.messages.errors),
            vec!["Invalid format. Expected a string."]
        );
        assert_eq!(out.messages.errors[0].range, Range::on_row(0, 11, 20));
    }

    #[test]
    fn no_value_after_bad_operator_reports_only_the_operator() {
        let out = run("Class >", &data(), |p| values(p, Vocabulary::Classes));
        assert_eq!(
            excerpts(&out.messages.errors),
            vec!["Invalid operator for rule Class."]
        );
    }

    #[test]
    fn trailing_comment_after_values() {
        let out = run("BaseType \"Maelström Staff\" # chase", &data(), |p| {
            values(p, Vocabulary::Bases)
        });
        assert!(!out.invalid());
        assert_eq!(out.trailing_comment.unwrap().value, "# chase");
    }

    #[test]
    fn unterminated_quote_is_trailing_text() {
        let out = run("Class Boots \"Glov", &data(), |p| values(p, Vocabulary::Classes));
        assert_eq!(accepted(&out), vec!["Boots"]);
        assert_eq!(
            excerpts(&out.messages.errors),
            vec!["Unexpected trailing text. The rule is already complete."]
        );
    }
}
