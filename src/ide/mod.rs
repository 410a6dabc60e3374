//! IDE features: high-level APIs for editor requests.
//!
//! Every function here takes an [`Injection`](crate::base::Injection) (the
//! host document plus the DSL region being edited) and returns host-ranged
//! results. DSL-local offsets never leave this module.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take text in, return data out
//! 2. **No LSP types**: Uses our own types, converted at LSP boundary
//! 3. **No fault on a miss**: Nothing found is an empty result, not an error
//!
//! ## Usage
//!
//! ```
//! use arkide::base::{Injection, TextRange};
//! use arkide::catalog::Catalog;
//! use arkide::ide::completions;
//!
//! let host = r#"const t = type("string.")"#;
//! let injection = Injection::from_literal(host, TextRange::new(15.into(), 24.into())).unwrap();
//! let list = completions(Catalog::builtin(), &injection, 7.into()).unwrap();
//! assert_eq!(&*list.items[0].label, "date");
//! ```

mod analysis;
mod completion;
mod goto;
mod hover;
mod references;
mod semantic_tokens;

pub use analysis::{Analysis, AnalysisHost};
pub use completion::{
    CompletionItem, CompletionKind, CompletionList, complete, completions,
    current_type_expression, root_completions, subtype_completions,
};
pub use goto::{
    DeclarationOrigin, GotoResult, GotoTarget, PropertyResolver, ResolveNames,
    ResolvedDeclaration, Resolver, ScopeTextResolver, goto_definition,
};
pub use hover::{HoverResult, hover};
pub use references::{Reference, reference_at, references_at, token_references};
pub use semantic_tokens::{SemanticToken, TokenType, semantic_tokens};
