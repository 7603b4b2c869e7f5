//! Global importance ranking across the document set.

use std::cmp::Ordering;

use crate::model::ScoredSection;

/// Sort scored sections and assign dense importance ranks.
///
/// Sort key: relevance score descending, then the original
/// `(document_id, page_number, position)` order ascending. Ranks are dense
/// integers starting at 1 with no gaps; among exactly equal scores the
/// earlier section ranks first.
pub fn rank_sections(mut sections: Vec<ScoredSection>) -> Vec<ScoredSection> {
    sections.sort_by(compare);
    for (index, scored) in sections.iter_mut().enumerate() {
        scored.importance_rank = (index + 1) as u32;
    }
    sections
}

fn compare(a: &ScoredSection, b: &ScoredSection) -> Ordering {
    b.relevance_score
        .partial_cmp(&a.relevance_score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.section.document_id.cmp(&b.section.document_id))
        .then_with(|| a.section.page_number.cmp(&b.section.page_number))
        .then_with(|| a.section.position.cmp(&b.section.position))
}
