//! Relevance scoring: normalized weighted term frequency.

use unicode_normalization::UnicodeNormalization;

use super::PersonaProfile;

/// Lowercased, NFKC-normalized alphanumeric tokens of a text.
///
/// Matching downstream is exact-token and case-insensitive; there is no
/// stemming.
pub fn tokenize(text: &str) -> Vec<String> {
    text.nfkc()
        .collect::<String>()
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Scores section text against a persona profile.
///
/// The score is the weight-summed term frequency divided by
/// `ln(e + token_count)`: the divisor is floored at 1 for the shortest
/// texts and grows slowly, so long sections cannot win on raw frequency
/// alone while genuinely on-topic long sections still outscore a short one
/// with a single lucky keyword.
pub struct RelevanceScorer<'a> {
    profile: &'a PersonaProfile,
}

impl<'a> RelevanceScorer<'a> {
    /// Create a scorer over a resolved profile.
    pub fn new(profile: &'a PersonaProfile) -> Self {
        Self { profile }
    }

    /// Score a text. Always finite and non-negative; a text with no
    /// matching tokens scores exactly 0.
    pub fn score(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }

        let raw: f64 = tokens.iter().map(|t| self.profile.weight(t)).sum();
        raw / (std::f64::consts::E + tokens.len() as f64).ln()
    }
}
