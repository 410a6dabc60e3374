//! Completion suggestions implementation.

use std::sync::Arc;

use text_size::{TextRange, TextSize};
use tracing::debug;

use crate::base::{Injection, OffsetMap};
use crate::catalog::{Catalog, RootKind};
use crate::core::Result;
use crate::host::ScopeExtractor;
use crate::parser::{Lexer, Token, TokenKind, token_before};

/// Characters that end the type expression being typed.
const EXPRESSION_DELIMITERS: &[char] = &['"', '\'', '`', ',', '{', '[', '('];

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    BuiltinType,
    UtilityKeyword,
    Alias,
    Subtype,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::BuiltinType => 14,   // Keyword
            CompletionKind::UtilityKeyword => 3, // Function
            CompletionKind::Alias => 7,          // Class
            CompletionKind::Subtype => 10,       // Property
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// The text to insert.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Category label (shown after label).
    pub detail: Option<Arc<str>>,
    /// Documentation (shown in popup).
    pub documentation: Option<Arc<str>>,
    /// Accepting this item should insert a `.` and complete again.
    pub chain: bool,
    /// Sort priority (lower = higher priority).
    pub sort_priority: u32,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
            chain: false,
            sort_priority: 100,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the documentation.
    pub fn with_documentation(mut self, doc: impl Into<Arc<str>>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    pub fn with_chain(mut self, chain: bool) -> Self {
        self.chain = chain;
        self
    }

    /// Set the sort priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.sort_priority = priority;
        self
    }
}

/// Completions for a cursor inside an injected DSL region.
#[derive(Clone, Debug)]
pub struct CompletionList {
    pub items: Vec<CompletionItem>,
    /// What the user has typed of the current word, or `.` right after a dot.
    pub prefix: String,
    /// Host range an accepted item replaces. Empty right after a dot.
    pub replace_range: TextRange,
}

/// Get completion suggestions at a DSL-local cursor.
///
/// Root keywords and aliases are proposed unless the word being typed
/// contains a dot. Subtypes are proposed whenever the expression before the
/// cursor has a dotted parent path. Both can apply to one query.
pub fn complete(
    catalog: &Catalog,
    buffer: &str,
    cursor: TextSize,
    host: &str,
    host_offset: TextSize,
) -> Vec<CompletionItem> {
    let tokens: Vec<_> = Lexer::with_catalog(buffer, catalog).collect();
    let (prefix, _) = completion_prefix(&tokens, cursor);
    let mut items = Vec::new();

    if !prefix.contains('.') {
        items.extend(root_completions(catalog));
        let aliases = ScopeExtractor::new(catalog).aliases_visible_at(host, host_offset);
        debug!(count = aliases.len(), "aliases in scope");
        items.extend(aliases.into_iter().map(|alias| {
            CompletionItem::new(alias.name.as_str(), CompletionKind::Alias)
                .with_detail("alias")
                .with_priority(30)
        }));
    }

    let expression = current_type_expression(buffer, cursor);
    if let Some((parent, _)) = expression.rsplit_once('.') {
        items.extend(subtype_completions(catalog, parent));
    }

    items
}

/// Every root keyword in catalog order.
pub fn root_completions(catalog: &Catalog) -> impl Iterator<Item = CompletionItem> + '_ {
    catalog.root_keywords().map(|(word, root)| {
        let (kind, detail, priority) = match root {
            RootKind::BuiltinType => (CompletionKind::BuiltinType, "builtin type", 10),
            RootKind::Utility => (CompletionKind::UtilityKeyword, "utility keyword", 20),
        };
        item_with_docs(catalog, word, kind)
            .with_detail(detail)
            .with_priority(priority)
            .with_chain(catalog.has_children(word))
    })
}

/// Legal refinements of a dotted parent path. Unknown paths give none.
pub fn subtype_completions(catalog: &Catalog, parent: &str) -> Vec<CompletionItem> {
    catalog
        .children(parent)
        .iter()
        .map(|child| {
            let path = format!("{parent}.{child}");
            item_with_docs(catalog, child, CompletionKind::Subtype)
                .with_detail(format!("subtype of {parent}"))
                .with_priority(5)
                .with_chain(catalog.has_children(&path))
        })
        .collect()
}

fn item_with_docs(catalog: &Catalog, word: &str, kind: CompletionKind) -> CompletionItem {
    let item = CompletionItem::new(word, kind);
    match catalog.documentation(word) {
        Some(doc) => item.with_documentation(doc),
        None => item,
    }
}

/// The expression ending at `cursor`, scanning back to a delimiter.
///
/// ```
/// use arkide::ide::current_type_expression;
///
/// assert_eq!(current_type_expression("Record<string, number.in", 24.into()), "number.in");
/// assert_eq!(current_type_expression("string.date.", 12.into()), "string.date.");
/// ```
pub fn current_type_expression(buffer: &str, cursor: TextSize) -> &str {
    let end = usize::from(cursor).min(buffer.len());
    let Some(before) = buffer.get(..end) else {
        return "";
    };
    let start = before
        .char_indices()
        .rev()
        .find(|&(_, c)| c.is_whitespace() || EXPRESSION_DELIMITERS.contains(&c))
        .map_or(0, |(idx, c)| idx + c.len_utf8());
    &before[start..]
}

/// The in-progress word up to the cursor, and its range.
fn completion_prefix<'a>(tokens: &[Token<'a>], cursor: TextSize) -> (&'a str, TextRange) {
    match token_before(tokens, cursor) {
        Some(token) if token.kind.is_word() => {
            let typed = usize::from(cursor - token.range.start());
            let typed = token.text.get(..typed).unwrap_or(token.text);
            (typed, TextRange::new(token.range.start(), cursor))
        }
        Some(token) if token.kind == TokenKind::Dot => (".", TextRange::empty(cursor)),
        _ => ("", TextRange::empty(cursor)),
    }
}

/// Completions at DSL-local `cursor` of an injection.
pub fn completions(catalog: &Catalog, injection: &Injection<'_>, cursor: TextSize) -> Result<CompletionList> {
    let host_offset = injection.checked_to_host(cursor)?;
    let buffer = injection.dsl();

    let items = complete(catalog, buffer, cursor, injection.host(), host_offset);

    let tokens: Vec<_> = Lexer::with_catalog(buffer, catalog).collect();
    let (prefix, local_range) = completion_prefix(&tokens, cursor);
    let replace_range = injection
        .range_to_host(local_range)
        .unwrap_or(TextRange::empty(host_offset));

    Ok(CompletionList {
        items,
        prefix: prefix.to_string(),
        replace_range,
    })
}
