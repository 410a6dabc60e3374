//! # arkide-base
//!
//! Core library for editor assistance on type expressions embedded as string
//! literals in JavaScript/TypeScript source: tokenizing, completion, hover,
//! and resolving alias references back to their declarations in host text.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → IDE features (completion, goto-def, hover, semantic tokens)
//!   ↓
//! host      → Host-text analysis (scopes, aliases, brace regions, property keys)
//!   ↓
//! parser    → Logos lexer for type expressions
//!   ↓
//! catalog   → Keywords, subtypes, and the subtype hierarchy
//!   ↓
//! core      → Errors, shared text scanners
//!   ↓
//! base      → Primitives (TextRange, LineIndex, Injection offset mapping)
//! ```

// ============================================================================
// MODULES (dependency order: base → core → catalog → parser → host → ide)
// ============================================================================

/// Foundation types: TextRange, line/column conversion, DSL ↔ host offsets
pub mod base;

/// Errors and text scanning shared by the DSL and host layers
pub mod core;

/// Keyword and subtype catalog
pub mod catalog;

/// Type-expression tokenizer
pub mod parser;

/// Scope extraction and host-text structure
pub mod host;

/// IDE features: completion, hover, goto-definition, semantic tokens
pub mod ide;

// Re-export foundation types
pub use crate::base::{Injection, LineCol, LineIndex, OffsetMap, TextRange, TextSize};
pub use crate::catalog::Catalog;
pub use crate::core::{AnalysisError, Result};
pub use crate::ide::{Analysis, AnalysisHost};
