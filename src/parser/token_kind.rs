//! Token kinds for the embedded type-expression language.

/// Classification of a DSL token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    /// Root keyword from the catalog (`string`, `Record`, ...).
    Keyword,
    /// Subtype keyword from the catalog (`date`, `integer`, ...).
    Subtype,
    /// Any other identifier: aliases, property names.
    Identifier,
    /// Quoted literal, possibly unterminated.
    String,
    Number,
    /// Single-character operator or delimiter.
    Operator,
    Dot,
    Whitespace,
    /// Unrecognized single character.
    Invalid,
}

impl TokenKind {
    /// Identifier-like tokens: the text a user is typing when completing.
    pub fn is_word(self) -> bool {
        matches!(
            self,
            TokenKind::Keyword | TokenKind::Subtype | TokenKind::Identifier | TokenKind::Number
        )
    }
}
