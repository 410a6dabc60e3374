//! Error types for caller-facing precondition violations.
//!
//! A lookup that finds nothing is never an error: operations return an empty
//! list or `None` for that. These variants only describe inputs the caller
//! should not have passed.

use text_size::{TextRange, TextSize};
use thiserror::Error;

/// Errors reported when a request violates its preconditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Offset lies past the end of the text it indexes.
    #[error("offset {offset:?} is out of bounds (length {len:?})")]
    OffsetOutOfBounds { offset: TextSize, len: TextSize },

    /// Offset splits a multi-byte character.
    #[error("offset {offset:?} is not on a character boundary")]
    NotCharBoundary { offset: TextSize },

    /// Host offset does not fall inside the injected region.
    #[error("host offset {offset:?} is outside the injected region")]
    OutsideInjection { offset: TextSize },

    /// Range does not describe a quoted host string literal.
    #[error("range {range:?} is not a quoted string literal")]
    InvalidLiteral { range: TextRange },
}

impl AnalysisError {
    /// Check that `offset` indexes into `text` (the end position included).
    pub fn check_offset(text: &str, offset: TextSize) -> Result<(), Self> {
        let idx = usize::from(offset);
        if idx > text.len() {
            return Err(Self::OffsetOutOfBounds {
                offset,
                len: TextSize::of(text),
            });
        }
        if !text.is_char_boundary(idx) {
            return Err(Self::NotCharBoundary { offset });
        }
        Ok(())
    }
}

pub type Result<T, E = AnalysisError> = std::result::Result<T, E>;
