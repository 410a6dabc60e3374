//! Semantic token tests for the IDE layer.

use arkide::catalog::Catalog;
use arkide::ide::{TokenType, semantic_tokens};
use arkide::parser::TokenKind;

use crate::helpers::injection_helpers::*;
use crate::helpers::source_fixtures::*;

#[test]
fn test_tokens_are_host_ranged() {
    let injection = injection(SCOPES, "User | undefined", 0);
    let tokens = semantic_tokens(Catalog::builtin(), &injection);
    assert_eq!(tokens.len(), 3);
    assert_eq!(&SCOPES[tokens[0].range], "User");
    assert_eq!(tokens[0].token_type, TokenType::Variable);
    assert_eq!(tokens[2].kind, TokenKind::Keyword);
    assert_eq!(tokens[2].token_type.to_lsp_index(), 0);
    assert_eq!(tokens[0].line, 8);
}

#[test]
fn test_tokens_sorted_and_non_overlapping() {
    let injection = injection(SCOPES, "string.email", 0);
    let tokens = semantic_tokens(Catalog::builtin(), &injection);
    for pair in tokens.windows(2) {
        assert!(pair[0].range.end() <= pair[1].range.start());
    }
    let content = injection.content_range();
    assert!(tokens.iter().all(|t| content.contains_range(t.range)));
}
