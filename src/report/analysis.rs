//! Persona-driven analysis output shapes.

use serde::{Deserialize, Serialize};

use crate::model::{ScoredSection, Subsection};

/// Metadata block of an analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Document ids in input order
    pub input_documents: Vec<String>,

    /// Persona free text as given
    pub persona: String,

    /// Job free text as given
    pub job_to_be_done: String,

    /// Number of input documents
    pub total_documents: usize,

    /// Number of sections scored before the output cap
    pub total_sections_analyzed: usize,

    /// RFC 3339 timestamp of the run
    pub processing_timestamp: String,
}

/// One ranked section in the output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedSection {
    /// Owning document id
    pub document: String,

    /// Page the section starts on
    pub page_number: u32,

    /// Section title
    pub section_title: String,

    /// Dense global rank, 1 = most relevant
    pub importance_rank: u32,

    /// Relevance score, rounded to 3 decimals
    pub relevance_score: f64,

    /// Scored sub-chunks of this section, in body order
    pub subsections: Vec<SubsectionEntry>,
}

/// One scored sub-chunk in the output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubsectionEntry {
    /// Owning document id
    pub document: String,

    /// The chunk text, rejoined at sentence boundaries
    pub refined_text: String,

    /// Page of the parent section
    pub page_number: u32,

    /// Relevance score of the chunk, rounded to 3 decimals
    pub relevance_score: f64,

    /// 1-based position rank within the parent section
    pub subsection_rank: u32,
}

/// The complete persona-driven analysis result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Run metadata
    pub metadata: AnalysisMetadata,

    /// Ranked sections, most relevant first
    pub extracted_sections: Vec<RankedSection>,

    /// All subsections across the ranked sections, flattened in section
    /// order
    pub subsection_analysis: Vec<SubsectionEntry>,
}

impl Analysis {
    /// Build the output from ranked sections and their subsections.
    ///
    /// `sections` pairs each ranked section with its (already capped)
    /// subsections; `subsection_analysis` is the flattening of the same
    /// entries in section order.
    pub fn assemble(
        metadata: AnalysisMetadata,
        sections: Vec<(ScoredSection, Vec<Subsection>)>,
    ) -> Self {
        let mut extracted_sections = Vec::with_capacity(sections.len());
        let mut subsection_analysis = Vec::new();

        for (scored, subsections) in sections {
            let entries: Vec<SubsectionEntry> = subsections
                .into_iter()
                .enumerate()
                .map(|(i, sub)| SubsectionEntry {
                    document: scored.section.document_id.clone(),
                    refined_text: sub.refined_text,
                    page_number: sub.page_number,
                    relevance_score: round3(sub.relevance_score),
                    subsection_rank: (i + 1) as u32,
                })
                .collect();

            subsection_analysis.extend(entries.iter().cloned());
            extracted_sections.push(RankedSection {
                document: scored.section.document_id,
                page_number: scored.section.page_number,
                section_title: scored.section.title,
                importance_rank: scored.importance_rank,
                relevance_score: round3(scored.relevance_score),
                subsections: entries,
            });
        }

        Self {
            metadata,
            extracted_sections,
            subsection_analysis,
        }
    }
}

/// Round to 3 decimals for output stability.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
