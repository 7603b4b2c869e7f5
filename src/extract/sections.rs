//! Section assembly: grouping fragment text between consecutive headings.

use crate::model::{DocumentFragments, Heading, Section};

/// Title substituted when a section needs a name and the document has none.
pub const UNTITLED: &str = "Untitled";

/// Assemble the ordered section sequence for one document.
///
/// Sections partition the fragment stream with no overlap and no gaps: each
/// heading owns its own fragments as the section title and every fragment up
/// to the next heading as the body. Fragments ahead of the first heading
/// form a preamble section named after the document title. A document with
/// no headings at all becomes a single whole-document section, and an empty
/// document yields no sections.
pub fn assemble_sections(
    doc: &DocumentFragments,
    headings: &[Heading],
    title: &str,
) -> Vec<Section> {
    if doc.is_empty() {
        return Vec::new();
    }

    let fallback_title = if title.trim().is_empty() {
        UNTITLED
    } else {
        title.trim()
    };

    if headings.is_empty() {
        let body = join_fragment_text(doc, 0, usize::MAX);
        return vec![Section {
            document_id: doc.document_id.clone(),
            page_number: doc.fragments[0].page_number,
            title: fallback_title.to_string(),
            body,
            position: 0,
        }];
    }

    let mut sections = Vec::with_capacity(headings.len() + 1);

    // Preamble ahead of the first heading.
    let first_start = headings[0].position;
    let preamble = join_fragment_text(doc, 0, first_start);
    if !preamble.trim().is_empty() {
        sections.push(Section {
            document_id: doc.document_id.clone(),
            page_number: doc.fragments[0].page_number,
            title: fallback_title.to_string(),
            body: preamble,
            position: doc.fragments[0].position,
        });
    }

    for (i, heading) in headings.iter().enumerate() {
        let body_start = heading.position + heading.span;
        let body_end = headings
            .get(i + 1)
            .map(|next| next.position)
            .unwrap_or(usize::MAX);

        sections.push(Section {
            document_id: doc.document_id.clone(),
            page_number: heading.page_number,
            title: heading.text.clone(),
            body: join_fragment_text(doc, body_start, body_end),
            position: heading.position,
        });
    }

    sections
}

/// Space-join the text of fragments with positions in `[start, end)`.
fn join_fragment_text(doc: &DocumentFragments, start: usize, end: usize) -> String {
    let mut body = String::new();
    for frag in &doc.fragments {
        if frag.position < start || frag.position >= end {
            continue;
        }
        let piece = frag.text.trim();
        if piece.is_empty() {
            continue;
        }
        if !body.is_empty() {
            body.push(' ');
        }
        body.push_str(piece);
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextFragment;

    fn frag(text: &str, page: u32, position: usize) -> TextFragment {
        TextFragment::new(text, 12.0, page, position)
    }

    fn doc(fragments: Vec<TextFragment>) -> DocumentFragments {
        DocumentFragments {
            document_id: "test.pdf".to_string(),
            fragments,
        }
    }

    #[test]
    fn test_empty_document_yields_no_sections() {
        let doc = doc(vec![]);
        assert!(assemble_sections(&doc, &[], "Title").is_empty());
    }

    #[test]
    fn test_no_headings_whole_document_section() {
        let doc = doc(vec![frag("alpha", 1, 0), frag("beta", 2, 1)]);
        let sections = assemble_sections(&doc, &[], "My Report");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "My Report");
        assert_eq!(sections[0].body, "alpha beta");
        assert_eq!(sections[0].page_number, 1);
    }

    #[test]
    fn test_no_headings_untitled_fallback() {
        let doc = doc(vec![frag("alpha", 1, 0)]);
        let sections = assemble_sections(&doc, &[], "  ");
        assert_eq!(sections[0].title, UNTITLED);
    }

    #[test]
    fn test_bodies_split_at_headings() {
        let doc = doc(vec![
            frag("Intro", 1, 0),
            frag("first body", 1, 1),
            frag("Methods", 2, 2),
            frag("second body", 2, 3),
            frag("continues", 2, 4),
        ]);
        let headings = vec![
            Heading::new("Intro", 1, 1, 0),
            Heading::new("Methods", 1, 2, 2),
        ];

        let sections = assemble_sections(&doc, &headings, "Title");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Intro");
        assert_eq!(sections[0].body, "first body");
        assert_eq!(sections[1].title, "Methods");
        assert_eq!(sections[1].body, "second body continues");
        assert_eq!(sections[1].page_number, 2);
    }

    #[test]
    fn test_preamble_section_before_first_heading() {
        let doc = doc(vec![
            frag("cover text", 1, 0),
            frag("Intro", 1, 1),
            frag("body", 1, 2),
        ]);
        let headings = vec![Heading::new("Intro", 1, 1, 1)];

        let sections = assemble_sections(&doc, &headings, "Report");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Report");
        assert_eq!(sections[0].body, "cover text");
        assert_eq!(sections[1].title, "Intro");
    }

    #[test]
    fn test_merged_heading_span_excluded_from_body() {
        // "1.1" and "Background" merged into one heading with span 2.
        let doc = doc(vec![
            frag("1.1", 1, 0),
            frag("Background", 1, 1),
            frag("body text", 1, 2),
        ]);
        let mut heading = Heading::new("1.1 Background", 2, 1, 0);
        heading.span = 2;

        let sections = assemble_sections(&doc, &[heading], "Title");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "1.1 Background");
        assert_eq!(sections[0].body, "body text");
    }

    #[test]
    fn test_partition_no_loss_no_duplication() {
        let doc = doc(vec![
            frag("preamble words", 1, 0),
            frag("Heading One", 1, 1),
            frag("alpha beta", 1, 2),
            frag("Heading Two", 2, 3),
            frag("gamma", 2, 4),
        ]);
        let headings = vec![
            Heading::new("Heading One", 1, 1, 1),
            Heading::new("Heading Two", 1, 2, 3),
        ];

        let sections = assemble_sections(&doc, &headings, "Doc");

        // Concatenating titles and bodies in order reproduces every
        // fragment token exactly once (the preamble title is synthetic and
        // excluded).
        let mut tokens: Vec<&str> = Vec::new();
        tokens.extend(sections[0].body.split_whitespace());
        for section in &sections[1..] {
            tokens.extend(section.title.split_whitespace());
            tokens.extend(section.body.split_whitespace());
        }

        let expected: Vec<&str> = doc
            .fragments
            .iter()
            .flat_map(|f| f.text.split_whitespace())
            .collect();
        assert_eq!(tokens, expected);
    }
}
