//! Persona profile resolution.

use std::collections::HashSet;

use super::{tokenize, JobCategory, KeywordCatalog, PersonaCategory, STOPWORDS};

/// Weight applied to job-category keyword matches.
pub const JOB_KEYWORD_WEIGHT: f64 = 1.5;

/// Weight applied to persona-category and raw job-term matches.
pub const BASE_KEYWORD_WEIGHT: f64 = 1.0;

/// A weighted keyword set resolved from a persona and a job description.
///
/// Built once per request and immutable thereafter; cloning the original
/// free text in makes the profile self-describing for output metadata.
#[derive(Debug, Clone)]
pub struct PersonaProfile {
    /// Resolved persona category
    pub persona_category: PersonaCategory,

    /// Resolved job category
    pub job_category: JobCategory,

    /// Original persona free text
    pub persona: String,

    /// Original job free text
    pub job: String,

    persona_keywords: HashSet<String>,
    job_keywords: HashSet<String>,
    raw_job_terms: HashSet<String>,
}

impl PersonaProfile {
    /// Resolve persona and job free text against a keyword catalog.
    ///
    /// Resolution never fails: unknown descriptions fall back to the
    /// `General` categories, and the raw terms of the job text are kept
    /// regardless so task specifics the catalog cannot anticipate still
    /// score.
    pub fn resolve(persona: &str, job: &str, catalog: &KeywordCatalog) -> Self {
        let persona_category = PersonaCategory::resolve(persona);
        let job_category = JobCategory::resolve(job);

        let persona_keywords = catalog
            .persona_keywords(persona_category)
            .iter()
            .map(|k| k.to_string())
            .collect();
        let job_keywords: HashSet<String> = catalog
            .job_keywords(job_category)
            .iter()
            .map(|k| k.to_string())
            .collect();

        let raw_job_terms = tokenize(job)
            .into_iter()
            .filter(|t| t.len() > 3)
            .filter(|t| t.chars().all(char::is_alphabetic))
            .filter(|t| !STOPWORDS.contains(t.as_str()))
            .collect();

        log::debug!(
            "resolved persona {:?} as {}, job {:?} as {}",
            persona,
            persona_category.name(),
            job,
            job_category.name()
        );

        Self {
            persona_category,
            job_category,
            persona: persona.to_string(),
            job: job.to_string(),
            persona_keywords,
            job_keywords,
            raw_job_terms,
        }
    }

    /// Weight of a (lowercased) token.
    ///
    /// Job-category keywords dominate: a token in both the job set and a
    /// base set scores at the job weight.
    pub fn weight(&self, token: &str) -> f64 {
        if self.job_keywords.contains(token) {
            JOB_KEYWORD_WEIGHT
        } else if self.persona_keywords.contains(token) || self.raw_job_terms.contains(token) {
            BASE_KEYWORD_WEIGHT
        } else {
            0.0
        }
    }

    /// Raw terms extracted from the job free text.
    pub fn raw_job_terms(&self) -> &HashSet<String> {
        &self.raw_job_terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_categories() {
        let profile = PersonaProfile::resolve(
            "PhD Researcher in Computational Biology",
            "Prepare a literature review",
            KeywordCatalog::builtin(),
        );

        assert_eq!(profile.persona_category, PersonaCategory::Researcher);
        assert_eq!(profile.job_category, JobCategory::LiteratureReview);
    }

    #[test]
    fn test_resolve_falls_back_to_general() {
        let profile = PersonaProfile::resolve(
            "Lighthouse keeper",
            "Catalogue the lamp maintenance schedule",
            KeywordCatalog::builtin(),
        );

        assert_eq!(profile.persona_category, PersonaCategory::General);
        assert_eq!(profile.job_category, JobCategory::General);
        // Raw job terms still capture the task specifics.
        assert!(profile.raw_job_terms().contains("lamp")
            || profile.raw_job_terms().contains("maintenance"));
    }

    #[test]
    fn test_weight_precedence() {
        let profile = PersonaProfile::resolve(
            "Researcher",
            "Prepare a literature review",
            KeywordCatalog::builtin(),
        );

        // Job keyword beats base weight even when also a persona keyword.
        assert_eq!(profile.weight("methodology"), JOB_KEYWORD_WEIGHT);
        assert_eq!(profile.weight("data"), BASE_KEYWORD_WEIGHT);
        assert_eq!(profile.weight("unrelated"), 0.0);
    }

    #[test]
    fn test_raw_terms_filtered() {
        let profile = PersonaProfile::resolve(
            "Analyst",
            "Compare the quarterly growth of ACME against its peers",
            KeywordCatalog::builtin(),
        );

        let terms = profile.raw_job_terms();
        assert!(terms.contains("quarterly"));
        assert!(terms.contains("acme"));
        // Short and stopword tokens are dropped.
        assert!(!terms.contains("the"));
        assert!(!terms.contains("its"));
    }
}
