//! Data model for document analysis.
//!
//! This module defines the intermediate representation shared by outline
//! extraction and relevance ranking: styled text fragments as produced by an
//! external PDF extractor, the headings and outline derived from them, and
//! the sections that scoring and ranking operate on.

mod fragment;
mod outline;
mod section;

pub use fragment::{DocumentFragments, TextFragment};
pub use outline::{DocumentOutline, Heading};
pub use section::{ScoredSection, Section, Subsection};
