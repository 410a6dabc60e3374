//! Foundation types for the arkide toolchain.
//!
//! This module provides the position types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion for host documents
//! - [`Injection`], [`OffsetMap`] - The mapping between DSL-local and host offsets
//!
//! This module has NO dependencies on other arkide modules except the error type.

mod injection;
mod position;

pub use injection::{Injection, OffsetMap};
pub use position::{LineCol, LineIndex, to_text_size};
pub use text_size::{TextRange, TextSize};
