//! Keyword and subtype catalog for the type-expression language.
//!
//! The catalog is an immutable value: [`Catalog::builtin`] returns the shared
//! process-wide instance, and the `with_*` builder methods construct
//! substituted catalogs. Everything that needs keyword knowledge (the
//! tokenizer, the scope extractor, completion) takes a `&Catalog`.

mod docs;

use indexmap::{IndexMap, IndexSet};
use once_cell::sync::Lazy;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

type OrderedSet = IndexSet<SmolStr, FxBuildHasher>;

/// How a root keyword is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootKind {
    /// A host-language type name (`string`, `number`, ...).
    BuiltinType,
    /// A compositional utility (`Record`, `Pick`, ...).
    Utility,
}

/// Lexical class of a catalog word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordClass {
    Root(RootKind),
    Subtype,
}

/// Static keyword tables plus the subtype hierarchy.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Root keywords in declaration order.
    roots: IndexMap<SmolStr, RootKind, FxBuildHasher>,
    subtypes: OrderedSet,
    /// Dotted parent path → legal next segments.
    hierarchy: IndexMap<SmolStr, Vec<SmolStr>, FxBuildHasher>,
    docs: IndexMap<SmolStr, SmolStr, FxBuildHasher>,
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    let mut catalog = Catalog::new();
    for ty in ["string", "number", "boolean", "object", "array", "Date", "null", "undefined"] {
        catalog = catalog.with_builtin_type(ty);
    }
    for utility in ["Record", "Partial", "Required", "Pick", "Omit", "Exclude", "Extract"] {
        catalog = catalog.with_utility(utility);
    }
    for subtype in [
        "date", "iso", "parse", "root", "integer", "positive", "negative", "min", "max",
        "range", "true", "false", "keys", "values", "entries", "length", "items",
    ] {
        catalog = catalog.with_subtype(subtype);
    }
    catalog = catalog
        .with_children("string", ["date"])
        .with_children("string.date", ["iso", "parse"])
        .with_children("string.date.iso", ["parse"])
        .with_children(
            "number",
            ["integer", "positive", "negative", "min", "max", "range"],
        )
        .with_children("boolean", ["true", "false"])
        .with_children("object", ["keys", "values", "entries"])
        .with_children("array", ["min", "max", "length", "items"])
        .with_children("Date", ["min", "max", "range"]);
    for (word, doc) in docs::BUILTIN_DOCS {
        catalog = catalog.with_doc(word, doc);
    }
    catalog
});

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared built-in catalog.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn with_builtin_type(mut self, name: &str) -> Self {
        self.roots.insert(name.into(), RootKind::BuiltinType);
        self
    }

    pub fn with_utility(mut self, name: &str) -> Self {
        self.roots.insert(name.into(), RootKind::Utility);
        self
    }

    pub fn with_subtype(mut self, name: &str) -> Self {
        self.subtypes.insert(name.into());
        self
    }

    /// Register the legal refinements of a dotted type path.
    pub fn with_children<'c>(
        mut self,
        path: &str,
        children: impl IntoIterator<Item = &'c str>,
    ) -> Self {
        self.hierarchy
            .insert(path.into(), children.into_iter().map(SmolStr::from).collect());
        self
    }

    pub fn with_doc(mut self, word: &str, doc: &str) -> Self {
        self.docs.insert(word.into(), doc.into());
        self
    }

    /// Root keywords in declaration order.
    pub fn root_keywords(&self) -> impl Iterator<Item = (&str, RootKind)> + '_ {
        self.roots.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    /// Subtype keywords in declaration order.
    pub fn subtype_keywords(&self) -> impl Iterator<Item = &str> + '_ {
        self.subtypes.iter().map(SmolStr::as_str)
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.roots.contains_key(word)
    }

    pub fn is_subtype(&self, word: &str) -> bool {
        self.subtypes.contains(word)
    }

    /// Classify a word. Root keywords take precedence over subtypes.
    pub fn classify(&self, word: &str) -> Option<KeywordClass> {
        if let Some(kind) = self.roots.get(word) {
            Some(KeywordClass::Root(*kind))
        } else if self.subtypes.contains(word) {
            Some(KeywordClass::Subtype)
        } else {
            None
        }
    }

    /// Legal next segments after a dotted path. Unknown paths have none.
    pub fn children(&self, path: &str) -> &[SmolStr] {
        self.hierarchy.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_children(&self, path: &str) -> bool {
        !self.children(path).is_empty()
    }

    /// All hierarchy keys in declaration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> + '_ {
        self.hierarchy.keys().map(SmolStr::as_str)
    }

    /// Hierarchy keys whose parent path is neither a root keyword nor a key.
    pub fn orphan_paths(&self) -> Vec<&str> {
        self.paths()
            .filter(|path| match path.rsplit_once('.') {
                Some((parent, _)) => {
                    !self.is_keyword(parent) && !self.hierarchy.contains_key(parent)
                }
                None => false,
            })
            .collect()
    }

    /// One-line description of a keyword or subtype.
    pub fn documentation(&self, word: &str) -> Option<String> {
        if let Some(doc) = self.docs.get(word) {
            return Some(doc.to_string());
        }
        match self.classify(word)? {
            KeywordClass::Root(_) => Some(format!("Keyword: {word}")),
            KeywordClass::Subtype => Some(format!("Subtype: {word}")),
        }
    }
}
