//! Errors and text-scanning primitives shared by the DSL tokenizer and the
//! host-text analysis.

pub mod error;
pub mod text_utils;

pub use error::{AnalysisError, Result};
