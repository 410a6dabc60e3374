//! Helpers for locating DSL regions in host fixtures.

use arkide::base::{Injection, TextRange, TextSize};

/// The `n`th host string literal whose content is exactly `content`.
pub fn literal(host: &str, content: &str, n: usize) -> TextRange {
    let quoted = format!("\"{content}\"");
    let start = host
        .match_indices(&quoted)
        .nth(n)
        .map(|(idx, _)| idx)
        .unwrap_or_else(|| panic!("literal {quoted} #{n} not found"));
    TextRange::at(offset(start), TextSize::of(quoted.as_str()))
}

/// Injection for the `n`th literal with this content.
pub fn injection<'a>(host: &'a str, content: &str, n: usize) -> Injection<'a> {
    Injection::from_literal(host, literal(host, content, n)).expect("valid literal")
}

/// DSL-local offset of `needle` inside the injection.
pub fn local_offset(injection: &Injection<'_>, needle: &str) -> TextSize {
    let idx = injection
        .dsl()
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not in {:?}", injection.dsl()));
    offset(idx)
}

/// Host offset of the first `needle`.
pub fn host_offset(host: &str, needle: &str) -> TextSize {
    offset(host.find(needle).unwrap_or_else(|| panic!("{needle:?} not in host")))
}

pub fn offset(idx: usize) -> TextSize {
    TextSize::try_from(idx).expect("offset fits in u32")
}
