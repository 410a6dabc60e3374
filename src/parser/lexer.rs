//! Logos-based lexer for type expressions
//!
//! Tokenization never fails: every byte of the input belongs to exactly one
//! token, and characters the language does not know become `Invalid` tokens.

use logos::Logos;
use text_size::{TextRange, TextSize};

use super::TokenKind;
use crate::base::to_text_size;
use crate::catalog::{Catalog, KeywordClass};
use crate::core::{AnalysisError, Result};
use crate::core::text_utils::scan_quoted;

/// A token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Range in the coordinates of the buffer handed to the lexer.
    pub range: TextRange,
}

/// Lexer wrapping the logos-generated tokenizer
///
/// Restartable: a fresh `Lexer` over the same input always yields the same
/// sequence. `None` marks end of input.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    catalog: &'a Catalog,
    base: TextSize,
}

impl<'a> Lexer<'a> {
    /// Lex `input` with the built-in catalog.
    pub fn new(input: &'a str) -> Self {
        Self::with_catalog(input, Catalog::builtin())
    }

    pub fn with_catalog(input: &'a str, catalog: &'a Catalog) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            catalog,
            base: TextSize::new(0),
        }
    }

    /// Lex only `buffer[range]`, reporting offsets in `buffer` coordinates.
    ///
    /// Both ends of `range` must lie inside `buffer` on character boundaries.
    pub fn in_range(buffer: &'a str, range: TextRange, catalog: &'a Catalog) -> Result<Self> {
        AnalysisError::check_offset(buffer, range.start())?;
        AnalysisError::check_offset(buffer, range.end())?;
        Ok(Self {
            inner: LogosToken::lexer(&buffer[range]),
            catalog,
            base: range.start(),
        })
    }

    fn classify_word(&self, text: &str) -> TokenKind {
        match self.catalog.classify(text) {
            Some(KeywordClass::Root(_)) => TokenKind::Keyword,
            Some(KeywordClass::Subtype) => TokenKind::Subtype,
            None => TokenKind::Identifier,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let span = self.inner.span();
        let range = TextRange::new(to_text_size(span.start), to_text_size(span.end)) + self.base;

        let kind = match logos_token {
            Ok(LogosToken::Ident) => self.classify_word(text),
            Ok(t) => t.kind(),
            Err(()) => TokenKind::Invalid,
        };

        Some(Token { kind, text, range })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Tokenize `buffer[range]` with the given catalog
pub fn tokenize_range<'a>(
    buffer: &'a str,
    range: TextRange,
    catalog: &'a Catalog,
) -> Result<Vec<Token<'a>>> {
    Ok(Lexer::in_range(buffer, range, catalog)?.collect())
}

/// The token covering `offset` (start inclusive, end exclusive).
pub fn token_at<'t, 'a>(tokens: &'t [Token<'a>], offset: TextSize) -> Option<&'t Token<'a>> {
    tokens.iter().find(|t| t.range.contains(offset))
}

/// The token that ends at or spans over `offset`: what the user is typing
/// when the cursor sits at `offset`.
pub fn token_before<'t, 'a>(tokens: &'t [Token<'a>], offset: TextSize) -> Option<&'t Token<'a>> {
    tokens
        .iter()
        .find(|t| t.range.start() < offset && offset <= t.range.end())
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum LogosToken {
    #[regex(r"\s+")]
    Whitespace,

    #[token(".")]
    Dot,

    // No multi-character operator fusion: `<=` is two tokens
    #[token("<")]
    #[token(">")]
    #[token("=")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("?")]
    #[token("!")]
    #[token("&")]
    #[token("|")]
    #[token("^")]
    #[token("[")]
    #[token("]")]
    #[token("{")]
    #[token("}")]
    #[token("(")]
    #[token(")")]
    #[token(",")]
    #[token(":")]
    #[token(";")]
    Operator,

    #[token("\"", |lex| quoted(lex, '"'))]
    #[token("'", |lex| quoted(lex, '\''))]
    #[token("`", |lex| quoted(lex, '`'))]
    String,

    #[regex(r"[0-9]+", fraction)]
    Number,

    #[regex(r"[\p{XID_Start}_$][\p{XID_Continue}$]*")]
    Ident,
}

fn quoted(lex: &mut logos::Lexer<'_, LogosToken>, quote: char) {
    let consumed = scan_quoted(lex.remainder(), quote);
    lex.bump(consumed);
}

/// Extend a digit run over one `.` when a digit follows it, so `1.5` is one
/// number but the dot in `1.max` stays a separate token.
fn fraction(lex: &mut logos::Lexer<'_, LogosToken>) {
    let rest = lex.remainder().as_bytes();
    if rest.first() == Some(&b'.') && rest.get(1).is_some_and(u8::is_ascii_digit) {
        let digits = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        lex.bump(1 + digits);
    }
}

impl LogosToken {
    fn kind(self) -> TokenKind {
        match self {
            LogosToken::Whitespace => TokenKind::Whitespace,
            LogosToken::Dot => TokenKind::Dot,
            LogosToken::Operator => TokenKind::Operator,
            LogosToken::String => TokenKind::String,
            LogosToken::Number => TokenKind::Number,
            LogosToken::Ident => TokenKind::Identifier,
        }
    }
}
