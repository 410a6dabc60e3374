//! Analysis of the host document that surrounds embedded type expressions.
//!
//! None of this is a real parser for the host language. The scope extractor
//! and the region tree work on raw text with brace balancing; the property
//! table uses a small lexer that at least knows about strings and comments.

pub mod lexer;
pub mod properties;
pub mod regions;
pub mod scope;

pub use lexer::{HostLexer, HostToken, HostTokenKind, string_literal_at};
pub use properties::{PropertyKey, PropertyTable};
pub use regions::{MAX_ANCESTOR_DEPTH, MAX_REGION_DEPTH, Region, RegionId, RegionTree};
pub use scope::{
    ActiveScope, AliasSymbol, ScopeExtractor, ScopeHeader, ScopeRegion, aliases_visible_at,
    dependent_regions, scope_headers,
};
