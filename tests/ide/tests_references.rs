//! Reference extraction tests.

use arkide::TextRange;
use arkide::ide::{reference_at, references_at, token_references};
use arkide::parser::tokenize;
use rstest::rstest;

#[rstest]
#[case("\"User[]\"", &["User"])]
#[case("\"Id | User\"", &["Id", "User"])]
#[case("\"Record<Id, User[]>\"", &["Record", "Id", "User"])]
#[case("\"string.date\"", &["string", "date"])]
#[case("\"(A & B)[]\"", &["A", "B"])]
#[case("\"123\"", &[])]
fn test_string_token_candidates(#[case] input: &str, #[case] expected: &[&str]) {
    let token = tokenize(input)[0];
    let names: Vec<_> = token_references(&token).into_iter().map(|r| r.name).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_array_suffix_local_offset() {
    let refs = token_references(&tokenize("\"User[]\"")[0]);
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].range, TextRange::new(1.into(), 5.into()));
}

#[test]
fn test_identifier_and_subtype_tokens() {
    let tokens = tokenize("User.min");
    assert_eq!(references_at(&tokens, 0.into())[0].name, "User");
    assert_eq!(references_at(&tokens, 6.into())[0].name, "min");
}

#[test]
fn test_operator_between_names_prefers_preceding_name() {
    let tokens = tokenize("A|B");
    assert_eq!(reference_at(&tokens, 1.into()).unwrap().name, "A");
    assert_eq!(reference_at(&tokens, 2.into()).unwrap().name, "B");
}
