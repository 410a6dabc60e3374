//! Logos-based lexer for JavaScript/TypeScript host text
//!
//! Only what property detection needs: trivia, strings, identifiers, and
//! the delimiters around object literals. Everything else is `Unknown`.

use logos::Logos;
use text_size::{TextRange, TextSize};

use crate::base::to_text_size;
use crate::core::text_utils::scan_quoted;

/// Kind of a host token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostTokenKind {
    Whitespace,
    LineComment,
    BlockComment,
    /// Single, double, or backtick quoted string, possibly unterminated.
    String,
    Ident,
    Number,
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Colon,
    Comma,
    Semicolon,
    Dot,
    Eq,
    Unknown,
}

impl HostTokenKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            HostTokenKind::Whitespace | HostTokenKind::LineComment | HostTokenKind::BlockComment
        )
    }
}

/// A host token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostToken<'a> {
    pub kind: HostTokenKind,
    pub text: &'a str,
    pub range: TextRange,
}

impl HostToken<'_> {
    /// For string tokens, the range between the quotes.
    pub fn string_content_range(&self) -> Option<TextRange> {
        if self.kind != HostTokenKind::String {
            return None;
        }
        let quote = self.text.chars().next()?;
        let start = self.range.start() + TextSize::of(quote);
        let closed = self.text.len() > 1 && self.text.ends_with(quote) && !ends_with_escape(self.text);
        let end = if closed {
            self.range.end() - TextSize::of(quote)
        } else {
            self.range.end()
        };
        Some(TextRange::new(start, end))
    }
}

/// `true` if the final quote of `text` is escaped by an odd run of backslashes.
fn ends_with_escape(text: &str) -> bool {
    let body = &text[..text.len() - 1];
    body.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

/// Lexer over host text
pub struct HostLexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> HostLexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for HostLexer<'a> {
    type Item = HostToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let span = self.inner.span();
        let kind = logos_token.map_or(HostTokenKind::Unknown, LogosToken::kind);
        Some(HostToken {
            kind,
            text: self.inner.slice(),
            range: TextRange::new(to_text_size(span.start), to_text_size(span.end)),
        })
    }
}

/// Range of the host string literal (quotes included) that contains `offset`.
///
/// An offset on either quote counts as inside.
pub fn string_literal_at(text: &str, offset: TextSize) -> Option<TextRange> {
    HostLexer::new(text)
        .find(|t| t.kind == HostTokenKind::String && t.range.contains_inclusive(offset))
        .map(|t| t.range)
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum LogosToken {
    #[regex(r"\s+")]
    Whitespace,

    #[token("//", line_comment)]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[token("\"", |lex| quoted(lex, '"'))]
    #[token("'", |lex| quoted(lex, '\''))]
    #[token("`", |lex| quoted(lex, '`'))]
    String,

    #[regex(r"[\p{XID_Start}_$][\p{XID_Continue}$]*")]
    Ident,

    #[regex(r"[0-9][0-9A-Za-z_]*")]
    Number,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
}

impl LogosToken {
    fn kind(self) -> HostTokenKind {
        match self {
            LogosToken::Whitespace => HostTokenKind::Whitespace,
            LogosToken::LineComment => HostTokenKind::LineComment,
            LogosToken::BlockComment => HostTokenKind::BlockComment,
            LogosToken::String => HostTokenKind::String,
            LogosToken::Ident => HostTokenKind::Ident,
            LogosToken::Number => HostTokenKind::Number,
            LogosToken::LBrace => HostTokenKind::LBrace,
            LogosToken::RBrace => HostTokenKind::RBrace,
            LogosToken::LParen => HostTokenKind::LParen,
            LogosToken::RParen => HostTokenKind::RParen,
            LogosToken::LBracket => HostTokenKind::LBracket,
            LogosToken::RBracket => HostTokenKind::RBracket,
            LogosToken::Colon => HostTokenKind::Colon,
            LogosToken::Comma => HostTokenKind::Comma,
            LogosToken::Semicolon => HostTokenKind::Semicolon,
            LogosToken::Dot => HostTokenKind::Dot,
            LogosToken::Eq => HostTokenKind::Eq,
        }
    }
}

fn quoted(lex: &mut logos::Lexer<'_, LogosToken>, quote: char) {
    let consumed = scan_quoted(lex.remainder(), quote);
    lex.bump(consumed);
}

fn line_comment(lex: &mut logos::Lexer<'_, LogosToken>) {
    let rest = lex.remainder();
    lex.bump(rest.find('\n').unwrap_or(rest.len()));
}

fn block_comment(lex: &mut logos::Lexer<'_, LogosToken>) {
    let rest = lex.remainder();
    lex.bump(rest.find("*/").map_or(rest.len(), |idx| idx + 2));
}
