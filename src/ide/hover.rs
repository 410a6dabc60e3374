//! Hover information implementation.

use text_size::{TextRange, TextSize};

use crate::base::{Injection, LineIndex, OffsetMap};
use crate::catalog::Catalog;
use crate::core::Result;
use crate::host::{AliasSymbol, ScopeExtractor};
use crate::ide::completion::current_type_expression;
use crate::parser::{Lexer, Token, TokenKind, token_at, token_before};

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// The hover content (markdown).
    pub contents: String,
    /// Host range of the hovered word.
    pub range: TextRange,
    /// Start line of the hovered range (0-indexed).
    pub start_line: u32,
    /// Start column (0-indexed).
    pub start_col: u32,
    /// End line (0-indexed).
    pub end_line: u32,
    /// End column (0-indexed).
    pub end_col: u32,
}

impl HoverResult {
    fn new(contents: String, range: TextRange, lines: &LineIndex) -> Self {
        let start = lines.line_col(range.start());
        let end = lines.line_col(range.end());
        Self {
            contents,
            range,
            start_line: start.line,
            start_col: start.col,
            end_line: end.line,
            end_col: end.col,
        }
    }
}

/// Get hover information at a DSL-local offset.
///
/// Keywords and subtypes show their catalog documentation; aliases in scope
/// show the line that declares them. Anything else shows nothing.
pub fn hover(catalog: &Catalog, injection: &Injection<'_>, offset: TextSize) -> Result<Option<HoverResult>> {
    let host_offset = injection.checked_to_host(offset)?;
    let buffer = injection.dsl();
    let tokens: Vec<_> = Lexer::with_catalog(buffer, catalog).collect();

    let Some(token) = word_at(&tokens, offset) else {
        return Ok(None);
    };

    let contents = match token.kind {
        TokenKind::Keyword => keyword_hover(catalog, token.text),
        TokenKind::Subtype => {
            let expression = current_type_expression(buffer, token.range.end());
            let parent = expression
                .strip_suffix(token.text)
                .and_then(|rest| rest.strip_suffix('.'));
            subtype_hover(catalog, token.text, parent)
        }
        TokenKind::Identifier => ScopeExtractor::new(catalog)
            .aliases_visible_at(injection.host(), host_offset)
            .into_iter()
            .find(|alias| alias.name == token.text)
            .map(|alias| alias_hover(injection.host(), &alias)),
        _ => None,
    };

    let Some(contents) = contents else {
        return Ok(None);
    };
    let Some(range) = injection.range_to_host(token.range) else {
        return Ok(None);
    };
    Ok(Some(HoverResult::new(contents, range, &LineIndex::new(injection.host()))))
}

fn word_at<'t, 'a>(tokens: &'t [Token<'a>], offset: TextSize) -> Option<&'t Token<'a>> {
    let is_named = |t: &&Token<'_>| {
        matches!(t.kind, TokenKind::Keyword | TokenKind::Subtype | TokenKind::Identifier)
    };
    token_at(tokens, offset)
        .filter(is_named)
        .or_else(|| token_before(tokens, offset).filter(is_named))
}

fn keyword_hover(catalog: &Catalog, word: &str) -> Option<String> {
    let doc = catalog.documentation(word)?;
    Some(format!("**{word}**\n\n{doc}"))
}

fn subtype_hover(catalog: &Catalog, word: &str, parent: Option<&str>) -> Option<String> {
    let doc = catalog.documentation(word)?;
    Some(match parent {
        Some(parent) if !parent.is_empty() => {
            format!("**{word}**: subtype of `{parent}`\n\n{doc}")
        }
        _ => format!("**{word}**\n\n{doc}"),
    })
}

fn alias_hover(host: &str, alias: &AliasSymbol) -> String {
    let start = usize::from(alias.offset);
    let line_start = host[..start].rfind('\n').map_or(0, |idx| idx + 1);
    let line_end = host[start..].find('\n').map_or(host.len(), |idx| start + idx);
    let declaration = host[line_start..line_end].trim();
    format!("**{}**: type alias\n\n```ts\n{declaration}\n```", alias.name)
}
