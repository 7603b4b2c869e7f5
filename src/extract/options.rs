//! Extraction options and heuristic thresholds.

/// Options for outline extraction.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Tolerance (pt) below the page-1 maximum font size for title fragments
    pub title_tolerance: f32,

    /// Minimum trimmed length for a heading candidate line
    pub min_heading_len: usize,

    /// Maximum length for a heading candidate line
    pub max_heading_len: usize,

    /// Period-terminated lines longer than this are treated as body text
    pub max_sentence_heading_len: usize,

    /// Font-size thresholds for the style signal
    pub style: StyleThresholds,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title font-size tolerance.
    pub fn with_title_tolerance(mut self, tolerance: f32) -> Self {
        self.title_tolerance = tolerance;
        self
    }

    /// Set the maximum heading candidate length.
    pub fn with_max_heading_len(mut self, len: usize) -> Self {
        self.max_heading_len = len;
        self
    }

    /// Set the style thresholds.
    pub fn with_style(mut self, style: StyleThresholds) -> Self {
        self.style = style;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            title_tolerance: 0.5,
            min_heading_len: 4,
            max_heading_len: 150,
            max_sentence_heading_len: 50,
            style: StyleThresholds::default(),
        }
    }
}

/// Thresholds mapping font size to heading levels.
///
/// The ladder is a heuristic calibrated against common report and paper
/// layouts, not a contract; every rung is a named field so a corpus can
/// recalibrate it without touching the classifier.
#[derive(Debug, Clone)]
pub struct StyleThresholds {
    /// Size ratio to body text at or above which a line is level 1
    pub h1_ratio: f32,

    /// Size ratio for level 2
    pub h2_ratio: f32,

    /// Size ratio for level 3
    pub h3_ratio: f32,

    /// Reduced level-2 ratio for bold lines
    pub bold_h2_ratio: f32,

    /// Reduced level-3 ratio for bold lines
    pub bold_h3_ratio: f32,

    /// Ratio separating level 2 from level 3 for ALL-CAPS lines
    pub caps_ratio: f32,

    /// Points above body size a line must reach before the size ladder applies
    pub heading_margin: f32,

    /// Fraction of the document's maximum size that always maps to level 1
    pub top_size_factor: f32,

    /// Body size assumed when a document has no measurable fragments
    pub default_body_size: f32,
}

impl Default for StyleThresholds {
    fn default() -> Self {
        Self {
            h1_ratio: 1.8,
            h2_ratio: 1.4,
            h3_ratio: 1.15,
            bold_h2_ratio: 1.2,
            bold_h3_ratio: 1.05,
            caps_ratio: 1.1,
            heading_margin: 1.5,
            top_size_factor: 0.95,
            default_body_size: 12.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_options_builder() {
        let options = ExtractOptions::new()
            .with_title_tolerance(1.0)
            .with_max_heading_len(80);

        assert_eq!(options.title_tolerance, 1.0);
        assert_eq!(options.max_heading_len, 80);
    }

    #[test]
    fn test_default_thresholds_ordered() {
        let style = StyleThresholds::default();
        assert!(style.h1_ratio > style.h2_ratio);
        assert!(style.h2_ratio > style.h3_ratio);
        assert!(style.h3_ratio > 1.0);
        assert!(style.bold_h2_ratio < style.h2_ratio);
        assert!(style.bold_h3_ratio < style.h3_ratio);
    }
}
