//! Tokenizer for the embedded type-expression language.
//!
//! The language has no grammar beyond its tokens: editor features work from
//! the flat token stream plus the catalog.

mod lexer;
mod token_kind;

pub use lexer::{Lexer, Token, token_at, token_before, tokenize, tokenize_range};
pub use token_kind::TokenKind;
