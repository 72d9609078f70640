//! `SetBorderColor`, `SetTextColor` and `SetBackgroundColor`.

use super::{Bounds, Outcome, RuleParser};
use crate::parsing::line::Color;

pub const CHANNEL: Bounds = Bounds::Range(0, 255);

/// `Keyword [=] <red> <green> <blue> [<alpha>]`, each 0 to 255.
///
/// Out-of-range channels are reported individually and parsing continues;
/// a missing required channel stops the line. The colour is only produced
/// when all present channels are valid.
pub fn color(mut p: RuleParser<'_, '_>) -> Outcome<Option<Color>> {
    p.equality_operator();

    let mut channels = [None; 3];
    for slot in &mut channels {
        let Some(number) = p.require_number() else {
            return p.abort(None);
        };
        *slot = p.bounded::<u8>(number, CHANNEL);
    }
    let alpha = p.tok.next_number().map(|n| p.bounded::<u8>(n, CHANNEL));

    let color = match (channels, alpha) {
        ([Some(red), Some(green), Some(blue)], None | Some(Some(_))) => Some(Color {
            red,
            green,
            blue,
            alpha: alpha.flatten(),
        }),
        _ => None,
    };
    p.finish(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::position::{Range, Token};
    use crate::parsing::rules::test_support::{excerpts, run};
    use crate::validation::ValidationData;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn channel(value: u8, row: usize, start: usize, end: usize) -> Token<u8> {
        Token::new(value, Range::on_row(row, start, end))
    }

    #[test]
    fn rgba_with_trailing_comment() {
        let out = run("SetTextColor 255 0 0 128 # red", &ValidationData::default(), color);
        assert!(!out.invalid());
        assert_eq!(
            out.value,
            Some(Color {
                red: channel(255, 0, 13, 16),
                green: channel(0, 0, 17, 18),
                blue: channel(0, 0, 19, 20),
                alpha: Some(channel(128, 0, 21, 24)),
            })
        );
        assert_eq!(out.trailing_comment.map(|c| c.value), Some("# red".to_string()));
    }

    #[test]
    fn alpha_is_optional() {
        let out = run("SetBorderColor 10 20 30", &ValidationData::default(), color);
        assert!(!out.invalid());
        assert_eq!(out.value.unwrap().rgba(), [10, 20, 30, 255]);
    }

    #[test]
    fn every_bad_channel_is_reported() {
        let out = run("SetBackgroundColor 300 0 256 999", &ValidationData::default(), color);
        assert_eq!(out.messages.errors.len(), 3);
        let ranges: Vec<Range> = out.messages.errors.iter().map(|d| d.range).collect();
        assert_eq!(
            ranges,
            vec![
                Range::on_row(0, 19, 22),
                Range::on_row(0, 25, 28),
                Range::on_row(0, 29, 32)
            ]
        );
        assert!(out.value.is_none());
    }

    #[rstest]
    #[case("SetTextColor 255 0", &["Invalid format. Expected a number."])]
    #[case("SetTextColor", &["Invalid format. Expected a number."])]
    #[case("SetTextColor > 1 2 3", &["Invalid operator for rule SetTextColor."])]
    #[case("SetTextColor 1 2 3 4 5", &["Unexpected trailing text. The rule is already complete."])]
    fn malformed_colors(#[case] line: &str, #[case] errors: &[&str]) {
        let out = run(line, &ValidationData::default(), color);
        assert_eq!(excerpts(&out.messages.errors), errors.to_vec());
    }

    #[test]
    fn missing_channel_stops_after_one_error() {
        let out = run("SetTextColor 255 red 0", &ValidationData::default(), color);
        assert_eq!(out.messages.errors.len(), 1);
        assert_eq!(out.messages.errors[0].range, Range::on_row(0, 17, 22));
    }
}
