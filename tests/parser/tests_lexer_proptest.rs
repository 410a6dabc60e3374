//! Property-based tests for the type-expression tokenizer.

use arkide::parser::{Lexer, tokenize};
use arkide::{TextSize, catalog::Catalog};
use proptest::prelude::*;

/// Inputs biased toward the language's own alphabet.
fn expression_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("string".to_string()),
            Just("date".to_string()),
            Just(".".to_string()),
            Just("[]".to_string()),
            Just(" | ".to_string()),
            Just("\"".to_string()),
            Just("\\".to_string()),
            "[0-9]{1,3}",
            "[a-zA-Z_$][a-zA-Z0-9_]{0,6}",
            "[<>=+*/?!&^{}(),:;#@%~'`-]",
            any::<char>().prop_map(String::from),
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn test_tokens_cover_input_without_gaps(input in expression_strategy()) {
        let tokens = tokenize(&input);
        let mut cursor = TextSize::new(0);
        for token in &tokens {
            prop_assert_eq!(token.range.start(), cursor);
            prop_assert!(!token.range.is_empty());
            prop_assert_eq!(&input[token.range], token.text);
            cursor = token.range.end();
        }
        prop_assert_eq!(cursor, TextSize::of(input.as_str()));
    }

    #[test]
    fn test_tokenize_is_idempotent(input in expression_strategy()) {
        let first = tokenize(&input);
        let second: Vec<_> = Lexer::with_catalog(&input, Catalog::builtin()).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_arbitrary_strings_never_panic(input in any::<String>()) {
        let tokens = tokenize(&input);
        let covered: u32 = tokens.iter().map(|t| u32::from(t.range.len())).sum();
        prop_assert_eq!(covered as usize, input.len());
    }
}
