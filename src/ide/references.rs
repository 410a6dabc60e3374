//! Alias references inside type expressions.
//!
//! A quoted string token can hold a whole nested expression such as
//! `"User[] | Id"`, so one token may yield several references.

use once_cell::sync::Lazy;
use regex::Regex;
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use crate::base::to_text_size;
use crate::core::text_utils::is_identifier_start;
use crate::parser::{Token, TokenKind, token_at, token_before};

static ARRAY_BASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-zA-Z_][a-zA-Z0-9_]*)\[\]").unwrap());

const SEPARATORS: &[char] = &['|', '&', ',', ' ', '<', '>', '(', ')', '[', ']', '.'];

/// A name used inside a type expression that may refer to an alias.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    /// Range of the name in the coordinates of the tokenized buffer.
    pub range: TextRange,
    pub name: SmolStr,
}

impl Reference {
    fn new(name: &str, start: TextSize) -> Self {
        Self {
            range: TextRange::at(start, TextSize::of(name)),
            name: SmolStr::new(name),
        }
    }
}

/// Candidate references carried by a single token.
///
/// Keywords, punctuation, and numbers carry none.
pub fn token_references(token: &Token<'_>) -> Vec<Reference> {
    match token.kind {
        TokenKind::Identifier | TokenKind::Subtype => {
            vec![Reference::new(token.text, token.range.start())]
        }
        TokenKind::String => string_references(token),
        _ => Vec::new(),
    }
}

fn string_references(token: &Token<'_>) -> Vec<Reference> {
    let Some(quote) = token.text.chars().next() else {
        return Vec::new();
    };
    let body = &token.text[quote.len_utf8()..];
    let content = body.strip_suffix(quote).unwrap_or(body);
    let content_start = token.range.start() + TextSize::of(quote);

    let mut references: Vec<Reference> = Vec::new();
    let mut offset = 0;
    for part in content.split(SEPARATORS) {
        let trimmed = part.trim();
        let start = offset + (part.len() - part.trim_start().len());
        offset += part.len() + 1;

        if trimmed.chars().next().is_some_and(is_identifier_start) {
            references.push(Reference::new(trimmed, content_start + to_text_size(start)));
        }
    }

    for caps in ARRAY_BASE.captures_iter(content) {
        let Some(name) = caps.get(1) else { continue };
        let start = content_start + to_text_size(name.start());
        if references.iter().all(|r| r.range.start() != start) {
            references.push(Reference::new(name.as_str(), start));
        }
    }

    references.sort_by_key(|r| r.range.start());
    references
}

/// References of the token under `offset`.
///
/// When the cursor sits right after a name (on a bracket or at the end of
/// the buffer), the token before it is used.
pub fn references_at(tokens: &[Token<'_>], offset: TextSize) -> Vec<Reference> {
    [token_at(tokens, offset), token_before(tokens, offset)]
        .into_iter()
        .flatten()
        .map(token_references)
        .find(|refs| !refs.is_empty())
        .unwrap_or_default()
}

/// The single reference whose range touches `offset`.
pub fn reference_at(tokens: &[Token<'_>], offset: TextSize) -> Option<Reference> {
    references_at(tokens, offset)
        .into_iter()
        .find(|r| r.range.contains_inclusive(offset))
}
