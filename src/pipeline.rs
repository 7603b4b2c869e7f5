//! Batch orchestration over the document set.
//!
//! Documents are independent up to the final ranking step: each one is
//! extracted, assembled, and scored on its own (in parallel across the set),
//! and the ranker joins the results once every document has finished.

use chrono::Utc;
use rayon::prelude::*;

use crate::extract::{assemble_sections, detect_title, ExtractOptions, HeadingClassifier};
use crate::model::{DocumentFragments, DocumentOutline, ScoredSection, Subsection};
use crate::rank::{
    rank_sections, KeywordCatalog, PersonaProfile, RelevanceScorer, SubsectionAnalyzer,
};
use crate::report::{Analysis, AnalysisMetadata};

/// Options for scoring, sub-chunking, and output capping.
#[derive(Debug, Clone)]
pub struct RankOptions {
    /// Maximum ranked sections in the output (0 = unlimited)
    pub max_sections: usize,

    /// Maximum subsections per ranked section (0 = unlimited)
    pub max_subsections: usize,

    /// Sentences shorter than this are ignored during sub-chunking
    pub min_sentence_len: usize,

    /// Target sentences per sub-chunk
    pub sentences_per_chunk: usize,
}

impl RankOptions {
    /// Create new rank options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ranked-section output cap.
    pub fn with_max_sections(mut self, max: usize) -> Self {
        self.max_sections = max;
        self
    }

    /// Set the per-section subsection cap.
    pub fn with_max_subsections(mut self, max: usize) -> Self {
        self.max_subsections = max;
        self
    }

    /// Set the sub-chunk size in sentences.
    pub fn with_sentences_per_chunk(mut self, sentences: usize) -> Self {
        self.sentences_per_chunk = sentences;
        self
    }
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            max_sections: 10,
            max_subsections: 3,
            min_sentence_len: 20,
            sentences_per_chunk: 2,
        }
    }
}

/// Extract the outline (title + headings) of one document.
pub fn extract_outline(doc: &DocumentFragments, options: &ExtractOptions) -> DocumentOutline {
    let title = detect_title(doc, options);
    let headings = HeadingClassifier::new(options).classify(doc);
    DocumentOutline { title, headings }
}

/// Run the persona-driven analysis over a document set.
///
/// Sections are scored per document in parallel; global ranks are computed
/// over the full cross-document set before `max_sections` caps the output,
/// so rank values stay meaningful regardless of the cap.
pub fn analyze_documents(
    docs: &[DocumentFragments],
    persona: &str,
    job: &str,
    extract: &ExtractOptions,
    rank: &RankOptions,
) -> Analysis {
    let profile = PersonaProfile::resolve(persona, job, KeywordCatalog::builtin());

    let per_document: Vec<Vec<ScoredSection>> = docs
        .par_iter()
        .map(|doc| score_document(doc, &profile, extract))
        .collect();
    let all_sections: Vec<ScoredSection> = per_document.into_iter().flatten().collect();

    let total_sections_analyzed = all_sections.len();
    log::debug!(
        "scored {} sections across {} documents",
        total_sections_analyzed,
        docs.len()
    );

    let mut ranked = rank_sections(all_sections);
    if rank.max_sections > 0 {
        ranked.truncate(rank.max_sections);
    }

    let scorer = RelevanceScorer::new(&profile);
    let analyzer = SubsectionAnalyzer::new(rank.min_sentence_len, rank.sentences_per_chunk);
    let sections: Vec<(ScoredSection, Vec<Subsection>)> = ranked
        .into_iter()
        .map(|scored| {
            let mut subsections = analyzer.analyze(&scored.section, &scorer);
            if rank.max_subsections > 0 {
                subsections.truncate(rank.max_subsections);
            }
            (scored, subsections)
        })
        .collect();

    let metadata = AnalysisMetadata {
        input_documents: docs.iter().map(|d| d.document_id.clone()).collect(),
        persona: profile.persona.clone(),
        job_to_be_done: profile.job.clone(),
        total_documents: docs.len(),
        total_sections_analyzed,
        processing_timestamp: Utc::now().to_rfc3339(),
    };

    Analysis::assemble(metadata, sections)
}

/// Extract, assemble, and score one document's sections.
fn score_document(
    doc: &DocumentFragments,
    profile: &PersonaProfile,
    options: &ExtractOptions,
) -> Vec<ScoredSection> {
    let outline = extract_outline(doc, options);
    let sections = assemble_sections(doc, &outline.headings, &outline.title);
    let scorer = RelevanceScorer::new(profile);

    sections
        .into_iter()
        .map(|section| {
            let score = scorer.score(&section.body);
            ScoredSection::new(section, score)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextFragment;

    fn doc(id: &str, fragments: Vec<TextFragment>) -> DocumentFragments {
        DocumentFragments {
            document_id: id.to_string(),
            fragments,
        }
    }

    fn frag(text: &str, size: f32, page: u32, position: usize) -> TextFragment {
        TextFragment::new(text, size, page, position)
    }

    #[test]
    fn test_rank_options_builder() {
        let options = RankOptions::new()
            .with_max_sections(5)
            .with_max_subsections(2)
            .with_sentences_per_chunk(3);

        assert_eq!(options.max_sections, 5);
        assert_eq!(options.max_subsections, 2);
        assert_eq!(options.sentences_per_chunk, 3);
    }

    #[test]
    fn test_extract_outline_empty_document() {
        let outline = extract_outline(&doc("empty.pdf", vec![]), &ExtractOptions::default());
        assert_eq!(outline.title, "");
        assert!(outline.headings.is_empty());
    }

    #[test]
    fn test_analyze_empty_document_set() {
        let analysis = analyze_documents(
            &[],
            "Researcher",
            "literature review",
            &ExtractOptions::default(),
            &RankOptions::default(),
        );

        assert_eq!(analysis.metadata.total_documents, 0);
        assert!(analysis.extracted_sections.is_empty());
        assert!(analysis.subsection_analysis.is_empty());
    }

    #[test]
    fn test_analyze_ranks_across_documents() {
        let docs = vec![
            doc(
                "a.pdf",
                vec![
                    frag("1. Methodology", 16.0, 1, 0),
                    frag(
                        "This study describes the research methodology and data analysis.",
                        12.0,
                        1,
                        1,
                    ),
                    frag("filler text", 12.0, 1, 2),
                ],
            ),
            doc(
                "b.pdf",
                vec![
                    frag("1. Unrelated", 16.0, 1, 0),
                    frag("Nothing about the topic at hand.", 12.0, 1, 1),
                    frag("filler text", 12.0, 1, 2),
                ],
            ),
        ];

        let analysis = analyze_documents(
            &docs,
            "PhD Researcher",
            "Prepare a literature review",
            &ExtractOptions::default(),
            &RankOptions::default(),
        );

        assert_eq!(analysis.metadata.total_documents, 2);
        assert_eq!(analysis.metadata.input_documents, vec!["a.pdf", "b.pdf"]);
        assert_eq!(analysis.extracted_sections[0].document, "a.pdf");
        assert_eq!(analysis.extracted_sections[0].importance_rank, 1);

        // Ranks are dense over everything that was scored.
        let ranks: Vec<u32> = analysis
            .extracted_sections
            .iter()
            .map(|s| s.importance_rank)
            .collect();
        let expected: Vec<u32> = (1..=ranks.len() as u32).collect();
        assert_eq!(ranks, expected);
    }

    #[test]
    fn test_max_sections_caps_output_not_ranks() {
        let docs: Vec<DocumentFragments> = (0..4)
            .map(|i| {
                doc(
                    &format!("doc{}.pdf", i),
                    vec![
                        frag("1. Summary", 16.0, 1, 0),
                        frag("research data analysis study results", 12.0, 1, 1),
                        frag("padding words", 12.0, 1, 2),
                    ],
                )
            })
            .collect();

        let rank = RankOptions::new().with_max_sections(2);
        let analysis = analyze_documents(
            &docs,
            "Researcher",
            "literature review",
            &ExtractOptions::default(),
            &rank,
        );

        assert_eq!(analysis.extracted_sections.len(), 2);
        assert_eq!(analysis.metadata.total_sections_analyzed, 4);
        assert_eq!(analysis.extracted_sections[0].importance_rank, 1);
        assert_eq!(analysis.extracted_sections[1].importance_rank, 2);
    }
}
