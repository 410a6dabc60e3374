//! Semantic tokens: classification spans of a DSL region in host coordinates.

use text_size::TextRange;

use crate::base::{Injection, LineIndex, OffsetMap};
use crate::catalog::Catalog;
use crate::parser::{Lexer, TokenKind};

/// Token type for semantic highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Type,
    Property,
    Variable,
    String,
    Number,
    Operator,
}

impl TokenType {
    /// Convert to LSP token type index.
    pub fn to_lsp_index(self) -> u32 {
        match self {
            TokenType::Type => 0,
            TokenType::Property => 1,
            TokenType::Variable => 2,
            TokenType::String => 3,
            TokenType::Number => 4,
            TokenType::Operator => 5,
        }
    }

    /// Whitespace and invalid characters are not highlighted.
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Keyword => Some(TokenType::Type),
            TokenKind::Subtype => Some(TokenType::Property),
            TokenKind::Identifier => Some(TokenType::Variable),
            TokenKind::String => Some(TokenType::String),
            TokenKind::Number => Some(TokenType::Number),
            TokenKind::Operator | TokenKind::Dot => Some(TokenType::Operator),
            TokenKind::Whitespace | TokenKind::Invalid => None,
        }
    }
}

/// A semantic token for syntax highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticToken {
    /// Host range of the token
    pub range: TextRange,
    /// Line number (0-indexed)
    pub line: u32,
    /// Column number (0-indexed)
    pub col: u32,
    /// Length of the token in bytes
    pub length: u32,
    pub kind: TokenKind,
    /// The token type
    pub token_type: TokenType,
}

/// Get semantic tokens for an injected DSL region, sorted by position.
pub fn semantic_tokens(catalog: &Catalog, injection: &Injection<'_>) -> Vec<SemanticToken> {
    let lines = LineIndex::new(injection.host());
    Lexer::with_catalog(injection.dsl(), catalog)
        .filter_map(|token| {
            let token_type = TokenType::from_kind(token.kind)?;
            let range = injection.range_to_host(token.range)?;
            let start = lines.line_col(range.start());
            Some(SemanticToken {
                range,
                line: start.line,
                col: start.col,
                length: range.len().into(),
                kind: token.kind,
                token_type,
            })
        })
        .collect()
}
