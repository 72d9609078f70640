//! Integer conditions (`Quality >= 20`) and `SetFontSize`.

use super::{Bounds, Outcome, RuleParser};
use crate::parsing::position::Token;

pub const LEVEL: Bounds = Bounds::Range(0, 200);
pub const QUALITY: Bounds = Bounds::Range(0, 100);
pub const SOCKETS: Bounds = Bounds::Range(0, 6);
pub const LINKED_SOCKETS: Bounds = Bounds::OneOf(&[0, 2, 3, 4, 5, 6]);
pub const HEIGHT: Bounds = Bounds::Range(1, 4);
pub const WIDTH: Bounds = Bounds::Range(1, 2);
pub const FONT_SIZE: Bounds = Bounds::Range(18, 45);

/// `Keyword [operator] <number>`
pub fn condition(mut p: RuleParser<'_, '_>, bounds: Bounds) -> Outcome<Option<Token<i64>>> {
    p.any_operator();
    let Some(number) = p.require_number() else {
        return p.abort(None);
    };
    p.check_bounds(&number, bounds);
    p.finish(Some(number))
}

/// `SetFontSize <number>`; operators are not part of this action.
pub fn font_size(mut p: RuleParser<'_, '_>) -> Outcome<Option<Token<i64>>> {
    p.no_operator();
    let Some(number) = p.require_number() else {
        return p.abort(None);
    };
    p.check_bounds(&number, FONT_SIZE);
    p.finish(Some(number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::position::Range;
    use crate::parsing::rules::test_support::{excerpts, run};
    use crate::parsing::tokenizer::Operator;
    use crate::validation::ValidationData;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn quality(line: &str) -> Outcome<Option<Token<i64>>> {
        run(line, &ValidationData::default(), |p| condition(p, QUALITY))
    }

    #[test]
    fn operator_and_value() {
        let out = quality("Quality >= 50");
        assert!(!out.invalid());
        assert_eq!(out.operator.map(|o| o.value), Some(Operator::GreaterEqual));
        assert_eq!(out.value.map(|v| v.value), Some(50));
        assert!(out.messages.is_empty());
    }

    #[test]
    fn operator_is_optional() {
        let out = quality("Quality 20");
        assert!(!out.invalid());
        assert!(out.operator.is_none());
        assert_eq!(out.value.map(|v| v.value), Some(20));
    }

    #[test]
    fn out_of_range_is_scoped_to_the_number() {
        let out = quality("Quality >= 500");
        assert!(out.invalid());
        assert_eq!(
            excerpts(&out.messages.errors),
            vec!["Invalid value for rule Quality. Expected 0 to 100."]
        );
        assert_eq!(out.messages.errors[0].range, Range::on_row(0, 11, 14));
        assert_eq!(out.value.map(|v| v.value), Some(500));
    }

    #[test]
    fn missing_number_covers_rest_of_line() {
        let out = quality("Quality >= high  ");
        assert!(out.invalid());
        assert_eq!(out.messages.errors.len(), 1);
        assert_eq!(out.messages.errors[0].excerpt, "Invalid format. Expected a number.");
        assert_eq!(out.messages.errors[0].range, Range::on_row(0, 11, 17));
        assert!(out.value.is_none());
    }

    #[test]
    fn trailing_text_is_an_error() {
        let out = quality("Quality 5 6");
        assert_eq!(
            excerpts(&out.messages.errors),
            vec!["Unexpected trailing text. The rule is already complete."]
        );
        assert_eq!(out.messages.errors[0].range, Range::on_row(0, 10, 11));
    }

    #[test]
    fn trailing_comment_is_kept() {
        let out = quality("Quality > 10 # decent");
        assert!(!out.invalid());
        assert_eq!(out.trailing_comment.unwrap().value, "# decent");
    }

    #[rstest]
    #[case(0, true)]
    #[case(1, false)]
    #[case(2, true)]
    #[case(6, true)]
    #[case(7, false)]
    fn linked_sockets_are_discrete(#[case] links: i64, #[case] valid: bool) {
        let line = format!("LinkedSockets {links}");
        let out = run(&line, &ValidationData::default(), |p| condition(p, LINKED_SOCKETS));
        assert_eq!(!out.invalid(), valid);
    }

    #[rstest]
    #[case("SetFontSize 45", &[])]
    #[case("SetFontSize 17", &["Invalid value for rule SetFontSize. Expected 18 to 45."])]
    #[case("SetFontSize = 30", &["Operators are not permitted for rule SetFontSize."])]
    #[case("SetFontSize", &["Invalid format. Expected a number."])]
    fn font_size_cases(#[case] line: &str, #[case] errors: &[&str]) {
        let out = run(line, &ValidationData::default(), font_size);
        assert_eq!(excerpts(&out.messages.errors), errors.to_vec());
    }
}
