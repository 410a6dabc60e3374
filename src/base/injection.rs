//! The boundary between a host document and one embedded DSL region.
//!
//! The embedding mechanism (which string literals carry type expressions) is
//! outside this crate. It hands us the host text and the host range of the
//! DSL content; everything here translates between the two coordinate spaces.

use text_size::{TextRange, TextSize};

use crate::core::{AnalysisError, Result};

/// Bidirectional mapping between DSL-local and host offsets.
pub trait OffsetMap {
    /// Translate a DSL-local offset into the host document.
    fn to_host(&self, local: TextSize) -> Option<TextSize>;

    /// Translate a host offset into DSL-local coordinates.
    fn to_local(&self, host: TextSize) -> Option<TextSize>;

    /// Translate a DSL-local range into the host document.
    fn range_to_host(&self, local: TextRange) -> Option<TextRange> {
        Some(TextRange::new(
            self.to_host(local.start())?,
            self.to_host(local.end())?,
        ))
    }
}

/// A single DSL region injected into a host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Injection<'a> {
    host: &'a str,
    content: TextRange,
}

impl<'a> Injection<'a> {
    /// Create an injection from the host range of the DSL content.
    pub fn new(host: &'a str, content: TextRange) -> Result<Self> {
        AnalysisError::check_offset(host, content.start())?;
        AnalysisError::check_offset(host, content.end())?;
        Ok(Self { host, content })
    }

    /// Create an injection from the host range of a whole string literal,
    /// quotes included. The DSL content is everything between the quotes.
    pub fn from_literal(host: &'a str, literal: TextRange) -> Result<Self> {
        AnalysisError::check_offset(host, literal.start())?;
        AnalysisError::check_offset(host, literal.end())?;
        let text = &host[literal];
        let mut chars = text.chars();
        let (Some(open), Some(close)) = (chars.next(), chars.next_back()) else {
            return Err(AnalysisError::InvalidLiteral { range: literal });
        };
        if !matches!(open, '"' | '\'' | '`') || open != close {
            return Err(AnalysisError::InvalidLiteral { range: literal });
        }
        let content = TextRange::new(
            literal.start() + TextSize::of(open),
            literal.end() - TextSize::of(close),
        );
        Ok(Self { host, content })
    }

    /// The full host document.
    pub fn host(&self) -> &'a str {
        self.host
    }

    /// The DSL-local buffer.
    pub fn dsl(&self) -> &'a str {
        &self.host[self.content]
    }

    /// Host range covered by the DSL buffer.
    pub fn content_range(&self) -> TextRange {
        self.content
    }

    /// Translate a DSL-local offset, failing if it lies outside the buffer.
    pub fn checked_to_host(&self, local: TextSize) -> Result<TextSize> {
        AnalysisError::check_offset(self.dsl(), local)?;
        Ok(self.content.start() + local)
    }
}

impl OffsetMap for Injection<'_> {
    fn to_host(&self, local: TextSize) -> Option<TextSize> {
        (local <= self.content.len()).then(|| self.content.start() + local)
    }

    fn to_local(&self, host: TextSize) -> Option<TextSize> {
        self.content
            .contains_inclusive(host)
            .then(|| host - self.content.start())
    }
}
