use crate::parsing::{
    line::{ActionValue, FilterValue, Line, LineKind, Rule},
    position::Range,
};

/// Panics if `lines` is not a well-formed parse result for a buffer with one
/// entry per row.
pub fn check(lines: &[Line]) {
    for (row, line) in lines.iter().enumerate() {
        assert_eq!(
            line.range.start.row, row,
            "line {row} starts on row {}",
            line.range.start.row
        );
        assert_eq!(
            line.range.end.row, row,
            "line {row} ends on row {}",
            line.range.end.row
        );
        assert_eq!(
            line.range.start.column, 0,
            "line {row} does not start at column 0"
        );
        assert_eq!(
            line.invalid,
            line.messages.has_errors(),
            "line {row}: invalid={} but {} error(s)",
            line.invalid,
            line.messages.errors.len()
        );

        for (_, diagnostic) in line.messages.iter() {
            assert_within(row, line.range, diagnostic.range, &diagnostic.excerpt);
        }
        let mut tokens = token_ranges(line);
        for range in &tokens {
            assert_within(row, line.range, *range, "token");
        }
        tokens.sort_by_key(|range| range.start);
        for pair in tokens.windows(2) {
            assert!(
                pair[0].end <= pair[1].start,
                "line {row}: token {:?} overlaps token {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}

fn assert_within(row: usize, line: Range, range: Range, what: &str) {
    assert!(
        range.start.row == row && range.end.row == row,
        "{what}: range {range:?} is not on row {row}"
    );
    assert!(
        range.start <= range.end,
        "{what}: range {range:?} is reversed"
    );
    assert!(
        range.end.column <= line.end.column,
        "{what}: range {range:?} runs past the end of line {line:?}"
    );
}

fn token_ranges(line: &Line) -> Vec<Range> {
    let mut ranges = Vec::new();
    match &line.kind {
        LineKind::Empty => {}
        LineKind::Comment { text } => ranges.push(text.range),
        LineKind::Block(block) => {
            ranges.push(block.keyword.range);
            ranges.extend(block.trailing_comment.as_ref().map(|c| c.range));
        }
        LineKind::Rule(rule) => {
            ranges.extend(rule.operator().map(|o| o.range));
            ranges.extend(rule.trailing_comment().map(|c| c.range));
            match rule {
                Rule::Filter(filter) => {
                    ranges.push(filter.name.range);
                    match &filter.value {
                        FilterValue::Number(t) => ranges.extend(t.map(|t| t.range)),
                        FilterValue::Rarity(t) => ranges.extend(t.map(|t| t.range)),
                        FilterValue::SocketGroup(t) => {
                            ranges.extend(t.as_ref().map(|t| t.range))
                        }
                        FilterValue::Boolean(t) => ranges.extend(t.map(|t| t.range)),
                        FilterValue::Strings(values) => {
                            ranges.extend(values.iter().map(|t| t.range))
                        }
                    }
                }
                Rule::Action(action) => {
                    ranges.push(action.name.range);
                    match &action.value {
                        ActionValue::Color(Some(color)) => {
                            ranges.extend([color.red.range, color.green.range, color.blue.range]);
                            ranges.extend(color.alpha.map(|a| a.range));
                        }
                        ActionValue::Sound(Some(sound)) => {
                            ranges.push(sound.id.range);
                            ranges.extend(sound.volume.map(|v| v.range));
                        }
                        ActionValue::FontSize(t) => ranges.extend(t.map(|t| t.range)),
                        ActionValue::Path(t) => ranges.extend(t.as_ref().map(|t| t.range)),
                        ActionValue::Color(None)
                        | ActionValue::Sound(None)
                        | ActionValue::Flag => {}
                    }
                }
            }
        }
        LineKind::Unknown(unknown) => ranges.extend(unknown.keyword.as_ref().map(|k| k.range)),
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_line;
    use crate::validation::ValidationData;

    #[test]
    fn parsed_rows_pass() {
        let data = ValidationData::builtin();
        let rows = [
            "Show",
            "  Quality > 500 # huh",
            "  SetTextColor 1 2 3 4 5",
            "",
            "# x",
        ];
        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .map(|(row, text)| parse_line(text, row, None, &data).unwrap())
            .collect();
        check(&lines);
    }

    #[test]
    #[should_panic(expected = "line 1 starts on row 0")]
    fn misaligned_rows_panic() {
        let data = ValidationData::default();
        let line = parse_line("Show", 0, None, &data).unwrap();
        check(&[line.clone(), line]);
    }

    #[test]
    #[should_panic(expected = "overlaps token")]
    fn overlapping_tokens_panic() {
        let data = ValidationData::builtin();
        let mut line = parse_line("Class \"Boots\" \"Gloves\"", 0, None, &data).unwrap();
        if let LineKind::Rule(Rule::Filter(filter)) = &mut line.kind
            && let FilterValue::Strings(values) = &mut filter.value
        {
            values[1].range.start.column = 10;
        }
        check(&[line]);
    }
}
