//! Tokenizer tests: classification, recovery, and offsets.

use arkide::catalog::Catalog;
use arkide::parser::{Lexer, TokenKind, tokenize, tokenize_range};
use arkide::{TextRange, TextSize};
use rstest::rstest;

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).into_iter().map(|t| t.kind).collect()
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

#[test]
fn test_every_root_keyword_is_one_keyword_token() {
    let catalog = Catalog::builtin();
    for (word, _) in catalog.root_keywords() {
        let tokens = tokenize(word);
        assert_eq!(tokens.len(), 1, "{word}");
        assert_eq!(tokens[0].kind, TokenKind::Keyword, "{word}");
        assert_eq!(tokens[0].range, TextRange::up_to(TextSize::of(word)));
    }
}

#[test]
fn test_every_subtype_is_one_subtype_token() {
    let catalog = Catalog::builtin();
    for word in catalog.subtype_keywords() {
        let tokens = tokenize(word);
        assert_eq!(tokens.len(), 1, "{word}");
        assert_eq!(tokens[0].kind, TokenKind::Subtype, "{word}");
    }
}

#[rstest]
#[case("User", TokenKind::Identifier)]
#[case("_private", TokenKind::Identifier)]
#[case("$ref", TokenKind::Identifier)]
#[case("Strings", TokenKind::Identifier)]
#[case("Date", TokenKind::Keyword)]
#[case("date", TokenKind::Subtype)]
#[case("42", TokenKind::Number)]
#[case("3.14", TokenKind::Number)]
#[case("\"a b\"", TokenKind::String)]
#[case("'a'", TokenKind::String)]
#[case("`a`", TokenKind::String)]
#[case(".", TokenKind::Dot)]
#[case("|", TokenKind::Operator)]
#[case("#", TokenKind::Invalid)]
#[case("  \t\n", TokenKind::Whitespace)]
fn test_single_token(#[case] input: &str, #[case] expected: TokenKind) {
    assert_eq!(kinds(input), vec![expected]);
}

#[rstest]
#[case("string.date.iso", vec![TokenKind::Keyword, TokenKind::Dot, TokenKind::Subtype, TokenKind::Dot, TokenKind::Subtype])]
#[case("Id[]", vec![TokenKind::Identifier, TokenKind::Operator, TokenKind::Operator])]
#[case("a=>b", vec![TokenKind::Identifier, TokenKind::Operator, TokenKind::Operator, TokenKind::Identifier])]
#[case("1.", vec![TokenKind::Number, TokenKind::Dot])]
#[case("1.2.3", vec![TokenKind::Number, TokenKind::Dot, TokenKind::Number])]
#[case("5.max", vec![TokenKind::Number, TokenKind::Dot, TokenKind::Subtype])]
fn test_token_sequences(#[case] input: &str, #[case] expected: Vec<TokenKind>) {
    assert_eq!(kinds(input), expected);
}

// =============================================================================
// RECOVERY
// =============================================================================

#[test]
fn test_escaped_quote_does_not_terminate_string() {
    let tokens = tokenize(r#""a\"b" | c"#);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].text, r#""a\"b""#);
}

#[test]
fn test_unterminated_string_runs_to_end() {
    let tokens = tokenize("'abc | def");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::String);
}

#[test]
fn test_invalid_characters_are_single_tokens() {
    let tokens = tokenize("#@");
    assert_eq!(tokens.len(), 2);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Invalid));
}

#[test]
fn test_empty_input_has_no_tokens() {
    assert!(Lexer::new("").next().is_none());
}

// =============================================================================
// RANGES
// =============================================================================

#[test]
fn test_tokenize_range_reports_buffer_offsets() {
    let buffer = "xx string.date yy";
    let range = TextRange::new(3.into(), 14.into());
    let tokens = tokenize_range(buffer, range, Catalog::builtin()).unwrap();
    assert_eq!(tokens[0].range, TextRange::new(3.into(), 9.into()));
    assert_eq!(tokens.last().unwrap().range.end(), 14.into());
    for token in &tokens {
        assert_eq!(&buffer[token.range], token.text);
    }
}

#[rstest]
#[case::past_end("string", 2, 40)]
#[case::start_past_end("string", 7, 7)]
#[case::mid_char("ké", 2, 3)]
#[case::end_mid_char("é.date", 0, 1)]
fn test_tokenize_range_rejects_invalid_bounds(#[case] buffer: &str, #[case] start: u32, #[case] end: u32) {
    let range = TextRange::new(start.into(), end.into());
    assert!(tokenize_range(buffer, range, Catalog::builtin()).is_err());
}

#[test]
fn test_tokenize_range_empty_at_end() {
    let tokens = tokenize_range("string", TextRange::empty(6.into()), Catalog::builtin()).unwrap();
    assert!(tokens.is_empty());
}

#[test]
fn test_substituted_catalog_changes_classification() {
    let catalog = Catalog::new().with_builtin_type("Email").with_subtype("lower");
    let kinds: Vec<_> = Lexer::with_catalog("Email.lower string", &catalog)
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword,
            TokenKind::Dot,
            TokenKind::Subtype,
            TokenKind::Whitespace,
            TokenKind::Identifier,
        ]
    );
}
