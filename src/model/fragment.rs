//! Styled text fragment input types.

use serde::{Deserialize, Serialize};

/// One contiguous run of styled text at a known position.
///
/// Fragments are the smallest unit the external PDF extraction layer
/// provides. They arrive in reading order and are never mutated by the
/// pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextFragment {
    /// The text content
    pub text: String,

    /// Font size in points
    pub font_size: f32,

    /// Whether the font appears to be bold
    #[serde(default)]
    pub is_bold: bool,

    /// Whether the font appears to be italic
    #[serde(default)]
    pub is_italic: bool,

    /// Page number (1-indexed)
    pub page_number: u32,

    /// Reading-order index within the document
    pub position: usize,
}

impl TextFragment {
    /// Create a new fragment with regular (non-bold, non-italic) styling.
    pub fn new(text: impl Into<String>, font_size: f32, page_number: u32, position: usize) -> Self {
        Self {
            text: text.into(),
            font_size,
            is_bold: false,
            is_italic: false,
            page_number,
            position,
        }
    }

    /// Mark the fragment as bold.
    pub fn bold(mut self) -> Self {
        self.is_bold = true;
        self
    }

    /// Mark the fragment as italic.
    pub fn italic(mut self) -> Self {
        self.is_italic = true;
        self
    }

    /// Check if the fragment contains only whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// The ordered fragment sequence for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFragments {
    /// Identifier for the document (typically the source file name)
    pub document_id: String,

    /// Fragments in reading order
    pub fragments: Vec<TextFragment>,
}

impl DocumentFragments {
    /// Create an empty fragment sequence.
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            fragments: Vec::new(),
        }
    }

    /// Append a fragment.
    pub fn push(&mut self, fragment: TextFragment) {
        self.fragments.push(fragment);
    }

    /// Check if the document yielded no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Iterate fragments on a given page.
    pub fn page_fragments(&self, page: u32) -> impl Iterator<Item = &TextFragment> {
        self.fragments.iter().filter(move |f| f.page_number == page)
    }

    /// Highest page number observed, or 0 for an empty document.
    pub fn page_count(&self) -> u32 {
        self.fragments.iter().map(|f| f.page_number).max().unwrap_or(0)
    }
}
