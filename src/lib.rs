//! # docrank
//!
//! Document outline extraction and persona-driven section relevance ranking.
//!
//! docrank consumes the styled text fragments an external PDF extractor
//! produces and turns them into a machine-readable table of contents, or
//! into a relevance-ordered reading list for a given persona and
//! job-to-be-done.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docrank::{analyze, extract_outline, DocumentFragments, TextFragment};
//!
//! fn main() -> docrank::Result<()> {
//!     let mut doc = DocumentFragments::new("paper.pdf");
//!     doc.push(TextFragment::new("Introduction", 18.0, 1, 0).bold());
//!     doc.push(TextFragment::new("This paper studies...", 12.0, 1, 1));
//!
//!     // Outline: title + leveled headings
//!     let outline = extract_outline(&doc);
//!     println!("{} headings", outline.headings.len());
//!
//!     // Persona-driven ranking across a document set
//!     let analysis = analyze(
//!         &[doc],
//!         "PhD Researcher in Computational Biology",
//!         "Prepare a literature review",
//!     );
//!     for section in &analysis.extracted_sections {
//!         println!("#{} {}", section.importance_rank, section.section_title);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Outline extraction**: title detection plus a two-signal heading
//!   classifier (numbering patterns and font-size style)
//! - **Section assembly**: gap-free partitioning of the fragment stream at
//!   heading boundaries
//! - **Persona profiles**: free-text persona/job resolution against an
//!   explicit keyword catalog, with a generic fallback
//! - **Deterministic ranking**: weighted term-frequency scores with stable
//!   tie-breaking and dense global ranks
//! - **Parallel processing**: documents are scored concurrently via Rayon

pub mod error;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod rank;
pub mod report;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::{ExtractOptions, FontProfile, HeadingClassifier, StyleThresholds};
pub use model::{
    DocumentFragments, DocumentOutline, Heading, ScoredSection, Section, Subsection, TextFragment,
};
pub use pipeline::RankOptions;
pub use rank::{JobCategory, KeywordCatalog, PersonaCategory, PersonaProfile, RelevanceScorer};
pub use report::{Analysis, AnalysisMetadata, JsonFormat, RankedSection, SubsectionEntry};

/// Extract the outline of one document with default options.
///
/// # Example
///
/// ```no_run
/// use docrank::{extract_outline, DocumentFragments};
///
/// let doc = DocumentFragments::new("empty.pdf");
/// let outline = extract_outline(&doc);
/// assert!(outline.headings.is_empty());
/// ```
pub fn extract_outline(doc: &DocumentFragments) -> DocumentOutline {
    pipeline::extract_outline(doc, &ExtractOptions::default())
}

/// Run the persona-driven analysis over a document set with default options.
pub fn analyze(docs: &[DocumentFragments], persona: &str, job: &str) -> Analysis {
    pipeline::analyze_documents(
        docs,
        persona,
        job,
        &ExtractOptions::default(),
        &RankOptions::default(),
    )
}

/// Builder for configuring extraction and ranking in one place.
///
/// # Example
///
/// ```no_run
/// use docrank::{Docrank, DocumentFragments};
///
/// let docs = vec![DocumentFragments::new("a.pdf")];
/// let analysis = Docrank::new()
///     .with_max_sections(5)
///     .with_max_subsections(2)
///     .analyze(&docs, "Investment Analyst", "Analyze revenue trends");
/// ```
pub struct Docrank {
    extract_options: ExtractOptions,
    rank_options: RankOptions,
}

impl Docrank {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            extract_options: ExtractOptions::default(),
            rank_options: RankOptions::default(),
        }
    }

    /// Replace the extraction options.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract_options = options;
        self
    }

    /// Replace the style thresholds.
    pub fn with_style(mut self, style: StyleThresholds) -> Self {
        self.extract_options = self.extract_options.with_style(style);
        self
    }

    /// Set the ranked-section output cap (0 = unlimited).
    pub fn with_max_sections(mut self, max: usize) -> Self {
        self.rank_options = self.rank_options.with_max_sections(max);
        self
    }

    /// Set the per-section subsection cap (0 = unlimited).
    pub fn with_max_subsections(mut self, max: usize) -> Self {
        self.rank_options = self.rank_options.with_max_subsections(max);
        self
    }

    /// Extract the outline of one document.
    pub fn outline(&self, doc: &DocumentFragments) -> DocumentOutline {
        pipeline::extract_outline(doc, &self.extract_options)
    }

    /// Run the persona-driven analysis over a document set.
    pub fn analyze(&self, docs: &[DocumentFragments], persona: &str, job: &str) -> Analysis {
        pipeline::analyze_documents(docs, persona, job, &self.extract_options, &self.rank_options)
    }
}

impl Default for Docrank {
    fn default() -> Self {
        Self::new()
    }
}
