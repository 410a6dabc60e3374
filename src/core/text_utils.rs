//! Text manipulation utilities for working with source code.
//!
//! These scanners are shared by the DSL tokenizer and the host-text analysis,
//! so that both sides agree on what a word, a string literal, and a
//! brace-balanced region are.

/// Check if a character can start an identifier.
///
/// Uses Unicode Standard Annex #31 rules, extended with `_` and `$` as in
/// JavaScript and TypeScript.
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    unicode_ident::is_xid_start(c) || c == '_' || c == '$'
}

/// Check if a character is considered part of a word (identifier).
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c) || c == '$'
}

/// Scan a quoted string whose opening quote has already been consumed.
///
/// `rest` is the text after the opening quote. A backslash escapes the next
/// character. Returns the number of bytes consumed, including the closing
/// quote when present; an unterminated string consumes everything.
pub fn scan_quoted(rest: &str, quote: char) -> usize {
    let mut chars = rest.char_indices();
    while let Some((idx, c)) = chars.next() {
        if c == quote {
            return idx + c.len_utf8();
        }
        if c == '\\' {
            chars.next();
        }
    }
    rest.len()
}

/// Find the brace that closes a region whose opening `{` ends at `from`.
///
/// Counts `{` and `}` from depth 1 without looking at quotes, so braces inside
/// string literals move the boundary. Returns the byte offset of the closing
/// brace, or `text.len()` when the region never closes.
pub fn balance_braces(text: &str, from: usize) -> usize {
    let mut depth = 1usize;
    for (idx, byte) in text.bytes().enumerate().skip(from) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return idx;
                }
            }
            _ => {}
        }
    }
    text.len()
}

/// Find every occurrence of `word` in `text` that is not part of a longer word.
pub fn find_word<'t>(text: &'t str, word: &'t str) -> impl Iterator<Item = usize> + 't {
    text.match_indices(word)
        .map(|(idx, _)| idx)
        .filter(move |&idx| {
            let before = text[..idx].chars().next_back();
            let after = text[idx + word.len()..].chars().next();
            !word.is_empty()
                && !before.is_some_and(is_word_character)
                && !after.is_some_and(is_word_character)
        })
}

/// Skip ASCII and Unicode whitespace starting at `from`, returning the new offset.
pub fn skip_whitespace(text: &str, from: usize) -> usize {
    text[from..]
        .char_indices()
        .find(|&(_, c)| !c.is_whitespace())
        .map_or(text.len(), |(idx, _)| from + idx)
}
