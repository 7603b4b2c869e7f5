//! Section types produced by assembly and consumed by scoring.

use serde::{Deserialize, Serialize};

/// A contiguous slice of a document: a heading plus the text until the next
/// heading (or document end).
///
/// The sections of a document partition its fragment stream with no overlap
/// and no gaps; a heading's own text lives in `title`, everything between it
/// and the next heading in `body`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Identifier of the owning document
    pub document_id: String,

    /// Page the section starts on (1-indexed)
    pub page_number: u32,

    /// Section title, derived from its heading
    pub title: String,

    /// Concatenated fragment text up to the next heading
    pub body: String,

    /// Reading-order index where the section starts
    pub position: usize,
}

impl Section {
    /// Check if the section carries no body text.
    pub fn is_body_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

/// A section with its relevance score and global importance rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredSection {
    /// The underlying section
    pub section: Section,

    /// Non-negative relevance score against the persona profile
    pub relevance_score: f64,

    /// Dense 1-based rank across the whole document set (0 = not yet ranked)
    pub importance_rank: u32,
}

impl ScoredSection {
    /// Wrap a section with its score; the rank is assigned later by the
    /// ranker.
    pub fn new(section: Section, relevance_score: f64) -> Self {
        Self {
            section,
            relevance_score,
            importance_rank: 0,
        }
    }
}

/// A scored sub-chunk of a section body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subsection {
    /// The chunk text, rejoined at sentence boundaries
    pub refined_text: String,

    /// Page of the parent section
    pub page_number: u32,

    /// Relevance score of this chunk alone
    pub relevance_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(body: &str) -> Section {
        Section {
            document_id: "doc.pdf".to_string(),
            page_number: 1,
            title: "Intro".to_string(),
            body: body.to_string(),
            position: 0,
        }
    }

    #[test]
    fn test_is_body_empty() {
        assert!(section("").is_body_empty());
        assert!(section("   \n").is_body_empty());
        assert!(!section("text").is_body_empty());
    }

    #[test]
    fn test_scored_section_starts_unranked() {
        let scored = ScoredSection::new(section("text"), 1.5);
        assert_eq!(scored.importance_rank, 0);
        assert!((scored.relevance_score - 1.5).abs() < f64::EPSILON);
    }
}
