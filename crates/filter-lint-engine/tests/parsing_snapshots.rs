use filter_lint_engine::{
    ValidationData,
    editing::{reprocess, split_rows},
    parsing::snapshot,
};
use xi_rope::Rope;

fn fixture_data() -> ValidationData {
    ValidationData {
        valid_bases: vec!["Exalted Orb".into()],
        base_whitelist: vec!["Mirror of Kalandra".into()],
        ..ValidationData::builtin()
    }
}

#[test]
fn fixture_currency() {
    assert_fixture("currency");
}

fn assert_fixture(name: &str) {
    let text = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.filter",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    let rows = split_rows(&Rope::from(text.as_str()));

    let lines = reprocess(&rows, None, None, None, &fixture_data()).unwrap();
    snapshot::invariants(&lines);

    insta::assert_snapshot!(name, snapshot::normalize(&lines));
}

/// Parsing twice from scratch gives identical results.
#[test]
fn full_reparse_is_idempotent() {
    let text = std::fs::read_to_string(format!(
        "{}/tests/fixtures/currency.filter",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    let rows = split_rows(&Rope::from(text.as_str()));
    let data = fixture_data();

    let first = reprocess(&rows, None, None, None, &data).unwrap();
    let second = reprocess(&rows, Some(&first), None, None, &data).unwrap();
    assert_eq!(first, second);
}
