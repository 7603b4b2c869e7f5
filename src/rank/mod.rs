//! Persona-driven relevance ranking.
//!
//! A free-text persona and job description resolve into a weighted keyword
//! profile; sections (and their sentence-bounded sub-chunks) are scored
//! against the profile and ranked globally across the document set.

mod keywords;
mod profile;
mod ranker;
mod score;
mod subsection;

pub use keywords::{JobCategory, KeywordCatalog, PersonaCategory, STOPWORDS};
pub use profile::{PersonaProfile, BASE_KEYWORD_WEIGHT, JOB_KEYWORD_WEIGHT};
pub use ranker::rank_sections;
pub use score::{tokenize, RelevanceScorer};
pub use subsection::SubsectionAnalyzer;
