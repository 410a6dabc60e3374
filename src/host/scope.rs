//! Scope extraction: which type aliases are visible at a host offset.
//!
//! A scope is declared in host text as
//! `const name = scope({ Alias: "...", ... })` (or `type.scope({...})`).
//! Its aliases are visible inside the scope body and inside any dependent
//! definition `const x = name.type({ ... })`.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};
use tracing::{debug, trace};

use crate::base::to_text_size;
use crate::catalog::Catalog;
use crate::core::text_utils::{balance_braces, is_word_character};

static SCOPE_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(const|let|var)\s+(\w+)\s*=\s*(scope|type\.scope)\s*\(\s*\{").unwrap()
});

// Only unquoted identifier keys match, so quoted keys such as `"#Private":`
// never become aliases.
static ALIAS_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([\p{XID_Start}_$][\p{XID_Continue}$]*)\s*:").unwrap());

/// Names that can never be aliases even when followed by a colon.
const BINDING_KEYWORDS: &[&str] = &["const", "let", "var"];

/// A scope declaration header found in host text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeHeader<'a> {
    /// The bound variable name.
    pub name: &'a str,
    /// Range of the whole header, up to and including the opening brace.
    pub range: TextRange,
}

impl ScopeHeader<'_> {
    /// Offset right after the opening brace.
    pub fn body_start(&self) -> TextSize {
        self.range.end()
    }
}

/// A brace-balanced body following a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeRegion<'a> {
    /// From the first byte after `{` to the closing `}` (exclusive), or to
    /// the end of text when the braces never balance.
    pub range: TextRange,
    pub content: &'a str,
}

impl<'a> ScopeRegion<'a> {
    /// Balance braces from `body_start` (just after an opening brace).
    ///
    /// A start past the end of `host` gives an empty region at the end.
    pub fn after(host: &'a str, body_start: TextSize) -> Self {
        let start = usize::from(body_start).min(host.len());
        let end = balance_braces(host, start).max(start);
        Self {
            range: TextRange::new(to_text_size(start), to_text_size(end)),
            content: host.get(start..end).unwrap_or_default(),
        }
    }

    /// Whether a host offset falls inside the region, both ends included.
    pub fn is_active_at(&self, offset: TextSize) -> bool {
        self.range.contains_inclusive(offset)
    }
}

/// A user-defined alias declared in a scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AliasSymbol {
    pub name: SmolStr,
    /// Host offset of the alias name.
    pub offset: TextSize,
}

impl AliasSymbol {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.name.as_str()))
    }
}

/// How the active scope was reached from the query offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveScope<'a> {
    /// The offset is inside the scope body.
    Body {
        header: ScopeHeader<'a>,
        region: ScopeRegion<'a>,
    },
    /// The offset is inside `name.type({ ... })` for this scope.
    Dependent {
        header: ScopeHeader<'a>,
        region: ScopeRegion<'a>,
        definition: ScopeRegion<'a>,
    },
}

impl<'a> ActiveScope<'a> {
    pub fn header(&self) -> ScopeHeader<'a> {
        match self {
            ActiveScope::Body { header, .. } | ActiveScope::Dependent { header, .. } => *header,
        }
    }

    /// The scope body whose aliases apply.
    pub fn region(&self) -> ScopeRegion<'a> {
        match self {
            ActiveScope::Body { region, .. } | ActiveScope::Dependent { region, .. } => *region,
        }
    }
}

/// Find all scope declaration headers, in text order.
pub fn scope_headers(host: &str) -> Vec<ScopeHeader<'_>> {
    SCOPE_HEADER
        .captures_iter(host)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(2)?;
            Some(ScopeHeader {
                name: name.as_str(),
                range: TextRange::new(to_text_size(whole.start()), to_text_size(whole.end())),
            })
        })
        .collect()
}

/// Bodies of `const x = <scope_name>.type({ ... })` definitions, in text order.
pub fn dependent_regions<'a>(host: &'a str, scope_name: &str) -> Vec<ScopeRegion<'a>> {
    let pattern = format!(
        r"const\s+\w+\s*=\s*{}\.type\s*\(\s*\{{",
        regex::escape(scope_name)
    );
    let Ok(regex) = Regex::new(&pattern) else {
        return Vec::new();
    };
    regex
        .find_iter(host)
        .map(|m| ScopeRegion::after(host, to_text_size(m.end())))
        .collect()
}

/// Aliases visible at `offset` using the built-in catalog.
pub fn aliases_visible_at(host: &str, offset: TextSize) -> Vec<AliasSymbol> {
    ScopeExtractor::new(Catalog::builtin()).aliases_visible_at(host, offset)
}

/// Extracts scope aliases, filtering out catalog words.
#[derive(Debug, Clone, Copy)]
pub struct ScopeExtractor<'c> {
    catalog: &'c Catalog,
}

impl<'c> ScopeExtractor<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// The first scope, in header order, that applies at `offset`.
    ///
    /// Nested or overlapping scopes are not merged: the first match wins.
    pub fn active_scope<'a>(&self, host: &'a str, offset: TextSize) -> Option<ActiveScope<'a>> {
        for header in scope_headers(host) {
            let region = ScopeRegion::after(host, header.body_start());
            trace!(scope = header.name, range = ?region.range, "scope header");

            if region.is_active_at(offset) {
                debug!(scope = header.name, "offset inside scope body");
                return Some(ActiveScope::Body { header, region });
            }

            if let Some(definition) = dependent_regions(host, header.name)
                .into_iter()
                .find(|definition| definition.is_active_at(offset))
            {
                debug!(scope = header.name, "offset inside dependent type definition");
                return Some(ActiveScope::Dependent {
                    header,
                    region,
                    definition,
                });
            }
        }
        None
    }

    /// Aliases visible at `offset`, in declaration order, names unique.
    pub fn aliases_visible_at(&self, host: &str, offset: TextSize) -> Vec<AliasSymbol> {
        self.active_scope(host, offset)
            .map(|scope| self.extract_aliases(&scope.region()))
            .unwrap_or_default()
    }

    /// Aliases declared at the top level of a scope body.
    ///
    /// Keys of nested object literals are properties, not aliases. Depth is
    /// counted without regard to quotes, like the region boundary itself.
    pub fn extract_aliases(&self, region: &ScopeRegion<'_>) -> Vec<AliasSymbol> {
        let content = region.content;
        let mut aliases: IndexMap<SmolStr, AliasSymbol, FxBuildHasher> = IndexMap::default();
        let mut depth = 0usize;
        let mut scanned = 0usize;

        for caps in ALIAS_KEY.captures_iter(content) {
            let Some(name) = caps.get(1) else { continue };
            for byte in content[scanned..name.start()].bytes() {
                match byte {
                    b'{' => depth += 1,
                    b'}' => depth = depth.saturating_sub(1),
                    _ => {}
                }
            }
            scanned = name.start();

            // A name must start a word: `12abc:` has no alias
            let starts_word = !content[..name.start()]
                .chars()
                .next_back()
                .is_some_and(is_word_character);
            if starts_word && depth == 0 && self.is_alias_name(name.as_str()) {
                aliases
                    .entry(SmolStr::new(name.as_str()))
                    .or_insert_with(|| AliasSymbol {
                        name: SmolStr::new(name.as_str()),
                        offset: region.range.start() + to_text_size(name.start()),
                    });
            }
        }

        aliases.into_values().collect()
    }

    fn is_alias_name(&self, name: &str) -> bool {
        !BINDING_KEYWORDS.contains(&name)
            && !self.catalog.is_keyword(name)
            && !self.catalog.is_subtype(name)
    }
}
