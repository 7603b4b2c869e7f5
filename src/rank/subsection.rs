//! Sub-chunking of section bodies for finer-grained scoring.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Section, Subsection};

use super::RelevanceScorer;

static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Splits section bodies into sentence-bounded chunks and scores each chunk
/// independently.
#[derive(Debug, Clone)]
pub struct SubsectionAnalyzer {
    /// Sentences shorter than this (trimmed chars) are ignored
    pub min_sentence_len: usize,

    /// Target number of sentences per chunk
    pub sentences_per_chunk: usize,
}

impl SubsectionAnalyzer {
    /// Create an analyzer with the given chunking parameters.
    pub fn new(min_sentence_len: usize, sentences_per_chunk: usize) -> Self {
        Self {
            min_sentence_len,
            sentences_per_chunk: sentences_per_chunk.max(1),
        }
    }

    /// Chunk a section body and score every chunk.
    ///
    /// Chunks are returned in body order. A body with no usable sentences
    /// yields no subsections.
    pub fn analyze(&self, section: &Section, scorer: &RelevanceScorer) -> Vec<Subsection> {
        let sentences: Vec<&str> = SENTENCE_BOUNDARY
            .split(&section.body)
            .map(str::trim)
            .filter(|s| s.chars().count() >= self.min_sentence_len)
            .collect();

        sentences
            .chunks(self.sentences_per_chunk)
            .map(|chunk| {
                let refined_text = format!("{}.", chunk.join(". "));
                let relevance_score = scorer.score(&refined_text);
                Subsection {
                    refined_text,
                    page_number: section.page_number,
                    relevance_score,
                }
            })
            .collect()
    }
}

impl Default for SubsectionAnalyzer {
    fn default() -> Self {
        Self::new(20, 2)
    }
}
