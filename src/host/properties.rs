//! Object-literal property keys of a host document.
//!
//! This is the exact declaration lookup: keys are found by the host lexer, so
//! strings and comments never produce false matches the way plain text
//! scanning does.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};
use tracing::trace;

use super::lexer::{HostLexer, HostToken, HostTokenKind};

/// A property key declared directly inside an object literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyKey {
    pub name: SmolStr,
    /// Range of the name, without quotes for quoted keys.
    pub range: TextRange,
    pub quoted: bool,
}

/// All property keys of a host document, in text order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyTable {
    keys: Vec<PropertyKey>,
}

impl PropertyTable {
    pub fn from_host(text: &str) -> Self {
        let tokens: Vec<HostToken<'_>> = HostLexer::new(text)
            .filter(|t| !t.kind.is_trivia())
            .collect();

        let mut keys = Vec::new();
        let mut delimiters: Vec<HostTokenKind> = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            match token.kind {
                HostTokenKind::LBrace | HostTokenKind::LParen | HostTokenKind::LBracket => {
                    delimiters.push(token.kind);
                    continue;
                }
                HostTokenKind::RBrace | HostTokenKind::RParen | HostTokenKind::RBracket => {
                    delimiters.pop();
                    continue;
                }
                _ => {}
            }

            if delimiters.last() != Some(&HostTokenKind::LBrace) {
                continue;
            }
            let after_separator = i
                .checked_sub(1)
                .map(|p| matches!(tokens[p].kind, HostTokenKind::LBrace | HostTokenKind::Comma))
                .unwrap_or(false);
            let before_colon = tokens
                .get(i + 1)
                .is_some_and(|next| next.kind == HostTokenKind::Colon);
            if !(after_separator && before_colon) {
                continue;
            }

            if let Some(key) = property_key(token) {
                trace!(name = %key.name, range = ?key.range, "property key");
                keys.push(key);
            }
        }

        Self { keys }
    }

    pub fn keys(&self) -> &[PropertyKey] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Every key with this name, in text order.
    pub fn lookup<'t, 'n>(&'t self, name: &'n str) -> impl Iterator<Item = &'t PropertyKey> + 'n
    where
        't: 'n,
    {
        self.keys.iter().filter(move |key| key.name == name)
    }

    /// The key with this name closest to `near`. Ties go to the earlier key.
    pub fn nearest<'t>(&'t self, name: &str, near: TextSize) -> Option<&'t PropertyKey> {
        self.lookup(name)
            .min_by_key(|key| u32::from(key.range.start()).abs_diff(u32::from(near)))
    }
}

fn property_key(token: &HostToken<'_>) -> Option<PropertyKey> {
    match token.kind {
        HostTokenKind::Ident => Some(PropertyKey {
            name: SmolStr::new(token.text),
            range: token.range,
            quoted: false,
        }),
        // Template literals cannot be keys
        HostTokenKind::String if !token.text.starts_with('`') => {
            let range = token.string_content_range()?;
            let start = usize::from(range.start() - token.range.start());
            let end = usize::from(range.end() - token.range.start());
            Some(PropertyKey {
                name: SmolStr::new(&token.text[start..end]),
                range,
                quoted: true,
            })
        }
        _ => None,
    }
}
