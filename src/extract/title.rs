//! Title detection from first-page fragments.

use crate::model::DocumentFragments;

use super::ExtractOptions;

/// Detect the document title from page-1 fragments.
///
/// The title is the first contiguous run of page-1 fragments whose font size
/// is within `title_tolerance` of the page's maximum, joined in reading
/// order. Fails soft: a page with no usable fragments yields the largest
/// fragment's text, or an empty string when page 1 is empty.
pub fn detect_title(doc: &DocumentFragments, options: &ExtractOptions) -> String {
    let page_one: Vec<_> = doc
        .page_fragments(1)
        .filter(|f| !f.is_whitespace())
        .collect();

    if page_one.is_empty() {
        return String::new();
    }

    let max_size = page_one
        .iter()
        .map(|f| f.font_size)
        .fold(f32::MIN, f32::max);

    let qualifies = |size: f32| size >= max_size - options.title_tolerance;

    // First contiguous qualifying run, in reading order.
    let mut parts: Vec<&str> = Vec::new();
    let mut in_run = false;
    for frag in &page_one {
        if qualifies(frag.font_size) {
            in_run = true;
            parts.push(frag.text.trim());
        } else if in_run {
            break;
        }
    }

    let title = parts.join(" ").trim().to_string();
    if !title.is_empty() {
        return title;
    }

    // No run qualified; fall back to the single largest fragment.
    log::debug!(
        "{}: no title run within {:.1}pt of max size {:.1}, falling back",
        doc.document_id,
        options.title_tolerance,
        max_size
    );
    page_one
        .iter()
        .max_by(|a, b| {
            a.font_size
                .partial_cmp(&b.font_size)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|f| f.text.trim().to_string())
        .unwrap_or_default()
}
