//! Go-to-definition for alias references.
//!
//! Resolution is tiered. The strict tier looks names up in the host's
//! object-literal keys ([`PropertyTable`]); the heuristic tier scans scope-like
//! brace regions as plain text ([`ScopeTextResolver`]). Both implement
//! [`ResolveNames`], and [`Resolver`] consults them in order.

use std::sync::Arc;

use regex::Regex;
use text_size::{TextRange, TextSize};
use tracing::debug;

use crate::base::{Injection, LineIndex, OffsetMap, to_text_size};
use crate::catalog::Catalog;
use crate::core::Result;
use crate::core::text_utils::{find_word, skip_whitespace};
use crate::host::{MAX_REGION_DEPTH, PropertyTable, RegionId, RegionTree};
use crate::ide::references::{Reference, reference_at};
use crate::parser::Lexer;

/// Which resolution tier produced a declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclarationOrigin {
    /// An object-literal key found by the host lexer.
    PropertyKey,
    /// A `name:` match inside a scope-like region.
    ScopeText,
    /// A declaration-shaped occurrence found by the descendant search.
    Descendant,
}

/// A declaration in host coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedDeclaration {
    pub range: TextRange,
    /// The host text at `range`.
    pub text: String,
    pub origin: DeclarationOrigin,
}

/// Something that can propose declarations for a name.
///
/// `near` is the host offset of the occurrence being resolved. Candidates are
/// returned best first; an empty list means "not found here".
pub trait ResolveNames {
    fn candidates(&self, name: &str, near: TextSize) -> Vec<ResolvedDeclaration>;
}

/// Exact keys, closest to the occurrence first.
pub struct PropertyResolver<'a> {
    host: &'a str,
    table: PropertyTable,
}

impl<'a> PropertyResolver<'a> {
    pub fn new(host: &'a str) -> Self {
        Self {
            host,
            table: PropertyTable::from_host(host),
        }
    }
}

impl ResolveNames for PropertyResolver<'_> {
    fn candidates(&self, name: &str, near: TextSize) -> Vec<ResolvedDeclaration> {
        let mut keys: Vec<_> = self.table.lookup(name).collect();
        keys.sort_by_key(|key| u32::from(key.range.start()).abs_diff(u32::from(near)));
        keys.into_iter()
            .map(|key| ResolvedDeclaration {
                range: key.range,
                text: self.host[key.range].to_string(),
                origin: DeclarationOrigin::PropertyKey,
            })
            .collect()
    }
}

/// Plain-text search over the brace regions of the host.
pub struct ScopeTextResolver<'a> {
    tree: RegionTree<'a>,
}

impl<'a> ScopeTextResolver<'a> {
    pub fn new(host: &'a str) -> Self {
        Self {
            tree: RegionTree::build(host),
        }
    }

    /// First `name:` inside a scope-like region, regions in pre-order.
    fn direct_match(&self, name: &str) -> Option<ResolvedDeclaration> {
        let pattern = Regex::new(&format!(r"\b{}\s*:", regex::escape(name))).ok()?;
        self.tree
            .ids()
            .filter(|&id| self.tree.is_scope_like(id))
            .find_map(|id| {
                let region = self.tree.get(id)?;
                let found = pattern.find(self.tree.region_text(id))?;
                let start = region.open + to_text_size(found.start());
                Some(self.declaration(start, name, DeclarationOrigin::ScopeText))
            })
    }

    /// Depth-bounded walk below every top-level region.
    fn descendant_match(&self, name: &str) -> Option<ResolvedDeclaration> {
        self.tree
            .ids()
            .filter(|&id| self.tree.get(id).is_some_and(|r| r.parent.is_none()))
            .find_map(|id| self.search_region(id, name, 0))
    }

    fn search_region(&self, id: RegionId, name: &str, depth: usize) -> Option<ResolvedDeclaration> {
        if depth > MAX_REGION_DEPTH {
            return None;
        }
        let region = self.tree.get(id)?;

        // Own text and children, in text order
        let mut pieces: Vec<(TextSize, Piece)> = self
            .tree
            .own_spans(id)
            .into_iter()
            .map(|span| (span.start(), Piece::Text(span)))
            .collect();
        for &child in &region.children {
            pieces.push((self.tree.get(child)?.open, Piece::Child(child)));
        }
        pieces.sort_by_key(|&(start, _)| start);

        pieces.into_iter().find_map(|(_, piece)| match piece {
            Piece::Text(span) => self.match_in_span(id, span, name),
            Piece::Child(child) => self.search_region(child, name, depth + 1),
        })
    }

    fn match_in_span(&self, id: RegionId, span: TextRange, name: &str) -> Option<ResolvedDeclaration> {
        let text = self.tree.text();
        let span_text = &text[span];
        let base = usize::from(span.start());

        let mut occurrences = find_word(span_text, name).map(|idx| base + idx).peekable();
        let first = *occurrences.peek()?;
        let start = occurrences
            .find(|&start| is_declaration_shaped(text, start, name))
            .or_else(|| self.has_declaring_ancestor(id, name).then_some(first))?;
        Some(self.declaration(to_text_size(start), name, DeclarationOrigin::Descendant))
    }

    /// An ancestor (within the ancestor limit) that is a scope body and
    /// declares `name`, quoted or not.
    fn has_declaring_ancestor(&self, id: RegionId, name: &str) -> bool {
        let Ok(pattern) = Regex::new(&format!(r#"\b{}["'`]?\s*:"#, regex::escape(name))) else {
            return false;
        };
        self.tree.ancestors(id).any(|ancestor| {
            self.tree
                .get(ancestor)
                .is_some_and(|region| follows_scope_call(self.tree.text(), region.open))
                && pattern.is_match(self.tree.region_text(ancestor))
        })
    }

    fn declaration(&self, start: TextSize, name: &str, origin: DeclarationOrigin) -> ResolvedDeclaration {
        let range = TextRange::at(start, TextSize::of(name));
        ResolvedDeclaration {
            range,
            text: self.tree.text()[range].to_string(),
            origin,
        }
    }
}

impl ResolveNames for ScopeTextResolver<'_> {
    fn candidates(&self, name: &str, _near: TextSize) -> Vec<ResolvedDeclaration> {
        self.direct_match(name)
            .or_else(|| self.descendant_match(name))
            .into_iter()
            .collect()
    }
}

#[derive(Clone, Copy)]
enum Piece {
    Text(TextRange),
    Child(RegionId),
}

/// `name` at `start` is a key: optionally quoted, then a colon.
fn is_declaration_shaped(text: &str, start: usize, name: &str) -> bool {
    let mut end = start + name.len();
    let before = text[..start].chars().next_back();
    if let Some(quote @ ('"' | '\'' | '`')) = before {
        if !text[end..].starts_with(quote) {
            return false;
        }
        end += quote.len_utf8();
    }
    text[skip_whitespace(text, end)..].starts_with(':')
}

/// The brace at `open` is the argument of `scope(` or `type.scope(`.
fn follows_scope_call(text: &str, open: TextSize) -> bool {
    let before = text[..usize::from(open)].trim_end();
    before
        .strip_suffix('(')
        .is_some_and(|callee| callee.trim_end().ends_with("scope"))
}

/// Tiered resolver: strict first, heuristic only when strict finds nothing.
#[derive(Default)]
pub struct Resolver<'r> {
    strict: Option<&'r dyn ResolveNames>,
    heuristic: Option<&'r dyn ResolveNames>,
}

impl<'r> Resolver<'r> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict(mut self, strict: &'r dyn ResolveNames) -> Self {
        self.strict = Some(strict);
        self
    }

    pub fn with_heuristic(mut self, heuristic: &'r dyn ResolveNames) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    /// Resolve `name` as seen from host offset `near`.
    pub fn resolve_name(&self, name: &str, near: TextSize) -> Option<ResolvedDeclaration> {
        for (tier, resolver) in [("strict", self.strict), ("heuristic", self.heuristic)] {
            let Some(resolver) = resolver else { continue };
            if let Some(found) = resolver.candidates(name, near).into_iter().next() {
                debug!(alias = name, tier, range = ?found.range, "resolved");
                return Some(found);
            }
            debug!(alias = name, tier, "no candidate");
        }
        None
    }

    /// Resolve a reference found in the DSL buffer of `injection`.
    pub fn resolve(&self, injection: &Injection<'_>, occurrence: &Reference) -> Option<ResolvedDeclaration> {
        let near = injection.to_host(occurrence.range.start())?;
        self.resolve_name(&occurrence.name, near)
    }
}

/// Result of a go-to-definition request.
#[derive(Clone, Debug)]
pub struct GotoResult {
    /// Host range of the name under the cursor, if there was one.
    pub origin_range: Option<TextRange>,
    pub targets: Vec<GotoTarget>,
}

impl GotoResult {
    pub fn empty() -> Self {
        Self {
            origin_range: None,
            targets: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// A target location for go-to-definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GotoTarget {
    /// Host range of the declaring name.
    pub range: TextRange,
    /// Start line (0-indexed).
    pub start_line: u32,
    /// Start column (0-indexed).
    pub start_col: u32,
    /// End line (0-indexed).
    pub end_line: u32,
    /// End column (0-indexed).
    pub end_col: u32,
    pub name: Arc<str>,
    pub origin: DeclarationOrigin,
}

impl GotoTarget {
    fn new(declaration: ResolvedDeclaration, lines: &LineIndex) -> Self {
        let start = lines.line_col(declaration.range.start());
        let end = lines.line_col(declaration.range.end());
        Self {
            range: declaration.range,
            start_line: start.line,
            start_col: start.col,
            end_line: end.line,
            end_col: end.col,
            name: declaration.text.into(),
            origin: declaration.origin,
        }
    }
}

/// Find the declaration of the alias at DSL-local `offset`.
///
/// Fails only when `offset` lies outside the DSL buffer. A name with no
/// declaration gives an empty result.
pub fn goto_definition(catalog: &Catalog, injection: &Injection<'_>, offset: TextSize) -> Result<GotoResult> {
    injection.checked_to_host(offset)?;

    let tokens: Vec<_> = Lexer::with_catalog(injection.dsl(), catalog).collect();
    let Some(reference) = reference_at(&tokens, offset) else {
        return Ok(GotoResult::empty());
    };

    let strict = PropertyResolver::new(injection.host());
    let heuristic = ScopeTextResolver::new(injection.host());
    let resolver = Resolver::new().with_strict(&strict).with_heuristic(&heuristic);

    let lines = LineIndex::new(injection.host());
    Ok(GotoResult {
        origin_range: injection.range_to_host(reference.range),
        targets: resolver
            .resolve(injection, &reference)
            .map(|declaration| GotoTarget::new(declaration, &lines))
            .into_iter()
            .collect(),
    })
}
