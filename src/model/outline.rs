//! Outline types: headings and the per-document outline.

use serde::{Deserialize, Serialize};

/// A classified heading.
///
/// Headings are ordered by `(page_number, position)`. Levels follow outline
/// discipline: relative to the nearest preceding shallower heading, a level
/// may deepen by at most one step, but may shallow by any amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heading {
    /// Heading text (merged from its source fragments)
    pub text: String,

    /// Outline level, 1 (shallowest) to 6 (deepest)
    pub level: u8,

    /// Page the heading starts on (1-indexed)
    #[serde(rename = "page")]
    pub page_number: u32,

    /// Reading-order index of the first source fragment
    #[serde(skip)]
    pub position: usize,

    /// Number of consecutive fragments merged into this heading line
    #[serde(skip)]
    pub span: usize,
}

impl Heading {
    /// Create a heading covering a single fragment.
    pub fn new(text: impl Into<String>, level: u8, page_number: u32, position: usize) -> Self {
        Self {
            text: text.into(),
            level: level.clamp(1, 6),
            page_number,
            position,
            span: 1,
        }
    }
}

/// The extracted outline of one document: a title plus leveled headings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentOutline {
    /// Document title ("" when page 1 yielded nothing)
    pub title: String,

    /// Headings in reading order
    pub headings: Vec<Heading>,
}

impl DocumentOutline {
    /// Check if the outline has no headings.
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    /// Deepest level present, or 0 for an empty outline.
    pub fn max_depth(&self) -> u8 {
        self.headings.iter().map(|h| h.level).max().unwrap_or(0)
    }
}
