//! AnalysisHost and Analysis: the entry point for editor queries.
//!
//! The `AnalysisHost` owns the host document and the catalog; `Analysis` is a
//! borrowed snapshot that answers queries about DSL regions of that document.
//! Nothing is cached: every query rescans the text it needs.
//!
//! ## Usage
//!
//! ```
//! use arkide::ide::AnalysisHost;
//!
//! let host = AnalysisHost::new(r#"const s = scope({ Id: "string", User: "Id[]" })"#);
//! let analysis = host.analysis();
//!
//! let literal = analysis.literal_at(40.into()).unwrap();
//! let goto = analysis.goto_definition(literal, 40.into()).unwrap();
//! assert_eq!(goto.targets.len(), 1);
//! ```

use text_size::{TextRange, TextSize};

use crate::base::{Injection, LineCol, LineIndex, OffsetMap};
use crate::catalog::Catalog;
use crate::core::{AnalysisError, Result};
use crate::host::{AliasSymbol, ScopeExtractor, string_literal_at};

use super::{
    CompletionList, GotoResult, HoverResult, SemanticToken, completions, goto_definition, hover,
    semantic_tokens,
};

/// Owns the document text and the keyword catalog.
#[derive(Debug, Clone)]
pub struct AnalysisHost {
    text: String,
    catalog: Catalog,
}

impl Default for AnalysisHost {
    fn default() -> Self {
        Self::new("")
    }
}

impl AnalysisHost {
    /// Create a host over `text` with the built-in catalog.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_catalog(text, Catalog::builtin().clone())
    }

    pub fn with_catalog(text: impl Into<String>, catalog: Catalog) -> Self {
        Self {
            text: text.into(),
            catalog,
        }
    }

    /// Replace the document text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get a snapshot for querying.
    pub fn analysis(&self) -> Analysis<'_> {
        Analysis {
            text: &self.text,
            catalog: &self.catalog,
            lines: LineIndex::new(&self.text),
        }
    }
}

/// An immutable snapshot of one document.
///
/// DSL regions are identified by the host range of their string literal,
/// quotes included; positions are host offsets.
pub struct Analysis<'a> {
    text: &'a str,
    catalog: &'a Catalog,
    lines: LineIndex,
}

impl<'a> Analysis<'a> {
    /// The injection for a host string literal.
    pub fn injection(&self, literal: TextRange) -> Result<Injection<'a>> {
        Injection::from_literal(self.text, literal)
    }

    /// Host range of the string literal containing `offset`, if any.
    pub fn literal_at(&self, offset: TextSize) -> Option<TextRange> {
        string_literal_at(self.text, offset)
    }

    pub fn line_col(&self, offset: TextSize) -> LineCol {
        self.lines.line_col(offset)
    }

    /// Completions at host `offset` inside the literal.
    pub fn completions(&self, literal: TextRange, offset: TextSize) -> Result<CompletionList> {
        let (injection, local) = self.locate(literal, offset)?;
        completions(self.catalog, &injection, local)
    }

    pub fn goto_definition(&self, literal: TextRange, offset: TextSize) -> Result<GotoResult> {
        let (injection, local) = self.locate(literal, offset)?;
        goto_definition(self.catalog, &injection, local)
    }

    pub fn hover(&self, literal: TextRange, offset: TextSize) -> Result<Option<HoverResult>> {
        let (injection, local) = self.locate(literal, offset)?;
        hover(self.catalog, &injection, local)
    }

    pub fn semantic_tokens(&self, literal: TextRange) -> Result<Vec<SemanticToken>> {
        let injection = self.injection(literal)?;
        Ok(semantic_tokens(self.catalog, &injection))
    }

    /// Aliases visible at a host offset.
    pub fn aliases_at(&self, offset: TextSize) -> Vec<AliasSymbol> {
        ScopeExtractor::new(self.catalog).aliases_visible_at(self.text, offset)
    }

    fn locate(&self, literal: TextRange, offset: TextSize) -> Result<(Injection<'a>, TextSize)> {
        AnalysisError::check_offset(self.text, offset)?;
        let injection = self.injection(literal)?;
        let local = injection
            .to_local(offset)
            .ok_or(AnalysisError::OutsideInjection { offset })?;
        Ok((injection, local))
    }
}
