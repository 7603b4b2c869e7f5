//! Heading classification.
//!
//! Two independent signals combine into a level assignment: regex families
//! over the leading text (numbered, lettered, keyword prefixes) and font
//! size relative to the document's body size. Numbering is the stronger
//! structural cue, so the pattern signal takes precedence when both fire.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{DocumentFragments, Heading, TextFragment};

use super::ExtractOptions;

/// Numbered prefixes: `1.`, `1.1`, `1.1.1.` followed by an uppercase letter.
static NUMBERED_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(?:\.\d+)*)\.?\s+\p{Lu}").expect("valid regex"));

/// Lettered prefixes: `A.` or `a)`.
static LETTERED_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[A-Z]\.|[a-z]\))\s+\S").expect("valid regex"));

/// Keyword prefixes: `Chapter 3`, `Section 2`, `Appendix B`.
static KEYWORD_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:Chapter|CHAPTER|Section|SECTION|Appendix|APPENDIX)\s+\S")
        .expect("valid regex")
});

/// Candidate level from the pattern signal alone.
///
/// Numbered prefixes yield their numbering depth (capped at 6); keyword and
/// lettered prefixes yield level 1.
pub fn pattern_level(text: &str) -> Option<u8> {
    if KEYWORD_HEADING.is_match(text) {
        return Some(1);
    }
    if let Some(caps) = NUMBERED_HEADING.captures(text) {
        let depth = caps[1].split('.').count().min(6);
        return Some(depth as u8);
    }
    if LETTERED_HEADING.is_match(text) {
        return Some(1);
    }
    None
}

/// Font-size statistics for one document.
///
/// The body size is the statistical mode of fragment font sizes, bucketed at
/// 0.1pt: the most common size is ordinary paragraph text and serves as the
/// baseline the style signal measures against.
#[derive(Debug, Clone)]
pub struct FontProfile {
    size_histogram: HashMap<i32, usize>,

    /// Body text font size (most common)
    pub body_size: f32,

    /// Largest font size observed
    pub max_size: f32,
}

impl FontProfile {
    /// Build the profile from a document's fragments.
    pub fn from_fragments(fragments: &[TextFragment], default_body_size: f32) -> Self {
        let mut size_histogram: HashMap<i32, usize> = HashMap::new();
        let mut max_size = 0.0f32;

        for frag in fragments.iter().filter(|f| !f.is_whitespace()) {
            let key = (frag.font_size * 10.0).round() as i32;
            *size_histogram.entry(key).or_insert(0) += 1;
            max_size = max_size.max(frag.font_size);
        }

        // Mode, with ties resolved toward the smaller size.
        let body_size = size_histogram
            .iter()
            .max_by_key(|(key, count)| (**count, -**key))
            .map(|(key, _)| *key as f32 / 10.0)
            .unwrap_or(default_body_size);

        Self {
            size_histogram,
            body_size,
            max_size: if max_size > 0.0 { max_size } else { default_body_size },
        }
    }

    /// Number of distinct 0.1pt size buckets observed.
    pub fn distinct_sizes(&self) -> usize {
        self.size_histogram.len()
    }
}

/// A merged line of consecutive same-font fragments.
///
/// Fragments with adjacent positions on the same page and identical
/// size/style are one visual line as far as classification is concerned;
/// merging them first means a heading split across fragments is classified
/// once, and a wrapped continuation is never classified on its own.
#[derive(Debug, Clone)]
pub struct Line {
    /// Merged text, space-joined in reading order
    pub text: String,

    /// Font size shared by the merged fragments
    pub font_size: f32,

    /// Whether the merged fragments are bold
    pub is_bold: bool,

    /// Whether the merged fragments are italic
    pub is_italic: bool,

    /// Page number (1-indexed)
    pub page_number: u32,

    /// Position of the first merged fragment
    pub position: usize,

    /// Number of fragments merged into this line
    pub span: usize,
}

/// Merge consecutive same-page, adjacent-position, same-font fragments.
///
/// Only fragments set off from body text (larger size, bold, or italic) are
/// merged; ordinary body fragments stay separate so that a body-sized
/// heading line is never fused into the paragraph that follows it.
pub fn merge_lines(fragments: &[TextFragment], body_size: f32) -> Vec<Line> {
    let distinguished = |frag: &TextFragment| {
        frag.is_bold || frag.is_italic || frag.font_size > body_size + 0.5
    };

    let mut lines: Vec<Line> = Vec::new();

    for frag in fragments {
        let joinable = distinguished(frag)
            && lines.last().is_some_and(|line| {
                line.page_number == frag.page_number
                    && line.position + line.span == frag.position
                    && (line.font_size - frag.font_size).abs() <= 0.1
                    && line.is_bold == frag.is_bold
                    && line.is_italic == frag.is_italic
            });

        if joinable {
            let line = lines.last_mut().expect("checked non-empty");
            let piece = frag.text.trim();
            if !piece.is_empty() {
                if !line.text.is_empty() {
                    line.text.push(' ');
                }
                line.text.push_str(piece);
            }
            line.span += 1;
        } else {
            lines.push(Line {
                text: frag.text.trim().to_string(),
                font_size: frag.font_size,
                is_bold: frag.is_bold,
                is_italic: frag.is_italic,
                page_number: frag.page_number,
                position: frag.position,
                span: 1,
            });
        }
    }

    lines
}

fn is_all_uppercase(text: &str) -> bool {
    let mut has_letter = false;
    for c in text.chars().filter(|c| c.is_alphabetic()) {
        if !c.is_uppercase() {
            return false;
        }
        has_letter = true;
    }
    has_letter
}

/// Classifies merged lines into an ordered heading sequence.
pub struct HeadingClassifier<'a> {
    options: &'a ExtractOptions,
}

impl<'a> HeadingClassifier<'a> {
    /// Create a classifier over the given options.
    pub fn new(options: &'a ExtractOptions) -> Self {
        Self { options }
    }

    /// Classify a document's fragments into headings.
    ///
    /// Output is ordered by `(page_number, position)` and obeys outline
    /// discipline: a level never deepens by more than one step relative to
    /// the previous heading, and the first heading of a document is level 1.
    pub fn classify(&self, doc: &DocumentFragments) -> Vec<Heading> {
        let profile =
            FontProfile::from_fragments(&doc.fragments, self.options.style.default_body_size);
        let lines = merge_lines(&doc.fragments, profile.body_size);

        let mut headings: Vec<Heading> = Vec::new();
        let mut seen: HashSet<(String, u32)> = HashSet::new();
        let mut last_level = 0u8;

        for line in lines {
            if !self.is_candidate(&line) {
                continue;
            }

            let candidate = match pattern_level(&line.text)
                .or_else(|| self.style_level(&line, &profile))
            {
                Some(level) => level,
                None => continue,
            };

            // Outline discipline: deepen by at most one, shallow freely.
            let level = candidate.min(last_level.saturating_add(1)).max(1);

            if !seen.insert((line.text.clone(), line.page_number)) {
                continue;
            }

            log::debug!(
                "{} p{} level {}: {:?}",
                doc.document_id,
                line.page_number,
                level,
                line.text
            );

            headings.push(Heading {
                text: line.text,
                level,
                page_number: line.page_number,
                position: line.position,
                span: line.span,
            });
            last_level = level;
        }

        headings
    }

    /// Filter lines that cannot be headings regardless of signals.
    fn is_candidate(&self, line: &Line) -> bool {
        let len = line.text.chars().count();
        if len < self.options.min_heading_len || len > self.options.max_heading_len {
            return false;
        }
        // A long sentence ending in a period is body text.
        if line.text.ends_with('.') && len > self.options.max_sentence_heading_len {
            return false;
        }
        true
    }

    /// Candidate level from the style signal alone.
    fn style_level(&self, line: &Line, profile: &FontProfile) -> Option<u8> {
        let s = &self.options.style;
        let body = profile.body_size;
        let size = line.font_size;
        let ratio = if body > 0.0 { size / body } else { 1.0 };

        if size > body + s.heading_margin {
            if ratio >= s.h1_ratio || size >= profile.max_size * s.top_size_factor {
                return Some(1);
            }
            if ratio >= s.h2_ratio || (line.is_bold && ratio >= s.bold_h2_ratio) {
                return Some(2);
            }
            if ratio >= s.h3_ratio || (line.is_bold && ratio >= s.bold_h3_ratio) {
                return Some(3);
            }
            // Noticeably larger than body but below the ratio ladder.
            return Some(4);
        }

        let len = line.text.chars().count();
        if is_all_uppercase(&line.text) && len > 5 && len < 60 && size >= body - 0.1 {
            return Some(if ratio >= s.caps_ratio { 2 } else { 3 });
        }

        // Bold at body size qualifies as the deepest level when the line is
        // visually set off as a run-in heading (colon-terminated).
        if line.is_bold && (size - body).abs() <= 0.5 && line.text.ends_with(':') {
            return Some(6);
        }

        None
    }
}
