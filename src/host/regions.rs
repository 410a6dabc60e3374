//! Brace-balanced regions of host text arranged as a tree.
//!
//! Uses the same quote-unaware depth counting as the scope extractor: a `{`
//! inside a string literal opens a region like any other. Unclosed regions
//! run to the end of the text.

use once_cell::sync::Lazy;
use regex::Regex;
use text_size::{TextRange, TextSize};

use crate::base::to_text_size;

/// Maximum depth for descendant searches below a region.
pub const MAX_REGION_DEPTH: usize = 32;

/// Maximum number of ancestors inspected when walking up from a region.
pub const MAX_ANCESTOR_DEPTH: usize = 10;

static PROPERTY_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\s*:").unwrap());

pub type RegionId = usize;

/// One `{ ... }` region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Offset of the opening brace.
    pub open: TextSize,
    /// Offset of the closing brace, or the text length when unclosed.
    pub close: TextSize,
    pub closed: bool,
    pub parent: Option<RegionId>,
    pub children: Vec<RegionId>,
}

impl Region {
    /// Range including both braces (up to the end of text when unclosed).
    pub fn range(&self) -> TextRange {
        let end = if self.closed {
            self.close + TextSize::of('}')
        } else {
            self.close
        };
        TextRange::new(self.open, end)
    }

    /// Range between the braces.
    pub fn content_range(&self) -> TextRange {
        TextRange::new(self.open + TextSize::of('{'), self.close)
    }
}

/// All brace regions of a text, stored in pre-order (by opening offset).
#[derive(Debug, Clone)]
pub struct RegionTree<'a> {
    text: &'a str,
    regions: Vec<Region>,
}

impl<'a> RegionTree<'a> {
    pub fn build(text: &'a str) -> Self {
        let mut regions: Vec<Region> = Vec::new();
        let mut stack: Vec<RegionId> = Vec::new();

        for (idx, byte) in text.bytes().enumerate() {
            match byte {
                b'{' => {
                    let id = regions.len();
                    let parent = stack.last().copied();
                    if let Some(parent) = parent {
                        regions[parent].children.push(id);
                    }
                    regions.push(Region {
                        open: to_text_size(idx),
                        close: to_text_size(text.len()),
                        closed: false,
                        parent,
                        children: Vec::new(),
                    });
                    stack.push(id);
                }
                b'}' => {
                    // Stray closing braces outside any region are ignored
                    if let Some(id) = stack.pop() {
                        regions[id].close = to_text_size(idx);
                        regions[id].closed = true;
                    }
                }
                _ => {}
            }
        }

        Self { text, regions }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id)
    }

    /// Region ids in pre-order.
    pub fn ids(&self) -> std::ops::Range<RegionId> {
        0..self.regions.len()
    }

    /// Text of a region, braces included.
    pub fn region_text(&self, id: RegionId) -> &'a str {
        &self.text[self.regions[id].range()]
    }

    /// Ancestors of a region, nearest first, at most `MAX_ANCESTOR_DEPTH` of them.
    pub fn ancestors(&self, id: RegionId) -> impl Iterator<Item = RegionId> + '_ {
        std::iter::successors(self.regions[id].parent, move |&parent| {
            self.regions[parent].parent
        })
        .take(MAX_ANCESTOR_DEPTH)
    }

    /// A region that looks like an object literal with `key:` entries.
    pub fn is_scope_like(&self, id: RegionId) -> bool {
        let text = self.region_text(id);
        text.contains(':') && PROPERTY_PATTERN.is_match(text)
    }

    /// Text spans of a region that are not covered by its children.
    pub fn own_spans(&self, id: RegionId) -> Vec<TextRange> {
        let region = &self.regions[id];
        let content = region.content_range();
        let mut spans = Vec::new();
        let mut cursor = content.start();
        for &child in &region.children {
            let child_range = self.regions[child].range();
            if child_range.start() > cursor {
                spans.push(TextRange::new(cursor, child_range.start()));
            }
            cursor = child_range.end().min(content.end()).max(cursor);
        }
        if content.end() > cursor {
            spans.push(TextRange::new(cursor, content.end()));
        }
        spans
    }
}
