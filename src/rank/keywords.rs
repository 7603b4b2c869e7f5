//! Persona and job categories with their keyword sets.
//!
//! Category resolution is a plain substring match over lowercased free text;
//! it never fails. Unrecognized descriptions fall back to the `General`
//! category, which carries its own generic keyword set.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// Known persona categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonaCategory {
    /// Academic or industrial researcher
    Researcher,
    /// Student preparing coursework or exams
    Student,
    /// Business or financial analyst
    Analyst,
    /// Journalist or reporter
    Journalist,
    /// Entrepreneur or founder
    Entrepreneur,
    /// Sales professional
    Salesperson,
    /// Fallback for unrecognized personas
    General,
}

impl PersonaCategory {
    /// All known categories, in resolution order.
    pub const ALL: [PersonaCategory; 7] = [
        PersonaCategory::Researcher,
        PersonaCategory::Student,
        PersonaCategory::Analyst,
        PersonaCategory::Journalist,
        PersonaCategory::Entrepreneur,
        PersonaCategory::Salesperson,
        PersonaCategory::General,
    ];

    /// Resolve a free-text persona description to a category.
    pub fn resolve(persona: &str) -> Self {
        let text = persona.to_lowercase();
        for category in Self::ALL {
            if category
                .synonyms()
                .iter()
                .any(|syn| text.contains(syn))
            {
                return category;
            }
        }
        PersonaCategory::General
    }

    /// Category name used in logs and debug output.
    pub fn name(&self) -> &'static str {
        match self {
            PersonaCategory::Researcher => "researcher",
            PersonaCategory::Student => "student",
            PersonaCategory::Analyst => "analyst",
            PersonaCategory::Journalist => "journalist",
            PersonaCategory::Entrepreneur => "entrepreneur",
            PersonaCategory::Salesperson => "salesperson",
            PersonaCategory::General => "general",
        }
    }

    fn synonyms(&self) -> &'static [&'static str] {
        match self {
            PersonaCategory::Researcher => &["researcher", "research", "phd", "scientist"],
            PersonaCategory::Student => &["student", "undergraduate", "learner"],
            PersonaCategory::Analyst => &["analyst", "investment"],
            PersonaCategory::Journalist => &["journalist", "reporter"],
            PersonaCategory::Entrepreneur => &["entrepreneur", "founder", "business"],
            PersonaCategory::Salesperson => &["salesperson", "sales"],
            PersonaCategory::General => &[],
        }
    }
}

/// Known job-to-be-done categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobCategory {
    /// Surveying prior work
    LiteratureReview,
    /// Financial statement or investment analysis
    FinancialAnalysis,
    /// Studying for an examination
    ExamPreparation,
    /// Competitive or market research
    MarketAnalysis,
    /// Reviewing a technical design or implementation
    TechnicalReview,
    /// Fallback for unrecognized jobs
    General,
}

impl JobCategory {
    /// All known categories, in resolution order.
    pub const ALL: [JobCategory; 6] = [
        JobCategory::LiteratureReview,
        JobCategory::FinancialAnalysis,
        JobCategory::ExamPreparation,
        JobCategory::MarketAnalysis,
        JobCategory::TechnicalReview,
        JobCategory::General,
    ];

    /// Resolve a free-text job description to a category.
    pub fn resolve(job: &str) -> Self {
        let text = job.to_lowercase();
        for category in Self::ALL {
            if category
                .synonyms()
                .iter()
                .any(|syn| text.contains(syn))
            {
                return category;
            }
        }
        JobCategory::General
    }

    /// Category name used in logs and debug output.
    pub fn name(&self) -> &'static str {
        match self {
            JobCategory::LiteratureReview => "literature_review",
            JobCategory::FinancialAnalysis => "financial_analysis",
            JobCategory::ExamPreparation => "exam_preparation",
            JobCategory::MarketAnalysis => "market_analysis",
            JobCategory::TechnicalReview => "technical_review",
            JobCategory::General => "general",
        }
    }

    fn synonyms(&self) -> &'static [&'static str] {
        match self {
            JobCategory::LiteratureReview => &["literature review", "literature", "survey"],
            JobCategory::FinancialAnalysis => &["financial", "revenue", "investment"],
            JobCategory::ExamPreparation => &["exam", "study", "preparation"],
            JobCategory::MarketAnalysis => &["market", "competition"],
            JobCategory::TechnicalReview => &["technical", "algorithm", "method"],
            JobCategory::General => &[],
        }
    }
}

/// Immutable keyword sets for every persona and job category.
///
/// Built once at process start and passed by reference wherever profiles are
/// resolved; there are no hidden global lookups in the scoring path.
#[derive(Debug)]
pub struct KeywordCatalog {
    persona: HashMap<PersonaCategory, HashSet<&'static str>>,
    job: HashMap<JobCategory, HashSet<&'static str>>,
}

impl KeywordCatalog {
    /// The built-in catalog.
    pub fn builtin() -> &'static KeywordCatalog {
        static CATALOG: Lazy<KeywordCatalog> = Lazy::new(KeywordCatalog::default);
        &CATALOG
    }

    /// Keywords for a persona category.
    pub fn persona_keywords(&self, category: PersonaCategory) -> &HashSet<&'static str> {
        &self.persona[&category]
    }

    /// Keywords for a job category.
    pub fn job_keywords(&self, category: JobCategory) -> &HashSet<&'static str> {
        &self.job[&category]
    }
}

impl Default for KeywordCatalog {
    fn default() -> Self {
        let mut persona = HashMap::new();
        persona.insert(
            PersonaCategory::Researcher,
            set(&[
                "research",
                "methodology",
                "analysis",
                "study",
                "experiment",
                "data",
                "results",
                "conclusion",
            ]),
        );
        persona.insert(
            PersonaCategory::Student,
            set(&[
                "learn",
                "understand",
                "concept",
                "definition",
                "example",
                "practice",
                "exam",
                "study",
            ]),
        );
        persona.insert(
            PersonaCategory::Analyst,
            set(&[
                "analysis",
                "trend",
                "performance",
                "metrics",
                "revenue",
                "growth",
                "market",
                "financial",
            ]),
        );
        persona.insert(
            PersonaCategory::Journalist,
            set(&[
                "news",
                "event",
                "report",
                "source",
                "fact",
                "interview",
                "story",
                "investigation",
            ]),
        );
        persona.insert(
            PersonaCategory::Entrepreneur,
            set(&[
                "business",
                "opportunity",
                "market",
                "strategy",
                "innovation",
                "profit",
                "customer",
            ]),
        );
        persona.insert(
            PersonaCategory::Salesperson,
            set(&[
                "sales", "customer", "product", "benefit", "price", "deal", "revenue", "target",
            ]),
        );
        persona.insert(
            PersonaCategory::General,
            set(&[
                "overview",
                "summary",
                "introduction",
                "background",
                "key",
                "important",
                "information",
            ]),
        );

        let mut job = HashMap::new();
        job.insert(
            JobCategory::LiteratureReview,
            set(&[
                "literature",
                "review",
                "survey",
                "overview",
                "comparison",
                "methodology",
            ]),
        );
        job.insert(
            JobCategory::FinancialAnalysis,
            set(&[
                "financial",
                "revenue",
                "profit",
                "cost",
                "investment",
                "roi",
                "budget",
            ]),
        );
        job.insert(
            JobCategory::ExamPreparation,
            set(&[
                "key",
                "important",
                "concept",
                "definition",
                "formula",
                "example",
                "practice",
            ]),
        );
        job.insert(
            JobCategory::MarketAnalysis,
            set(&[
                "market",
                "competition",
                "trend",
                "analysis",
                "share",
                "position",
                "strategy",
            ]),
        );
        job.insert(
            JobCategory::TechnicalReview,
            set(&[
                "technical",
                "implementation",
                "algorithm",
                "method",
                "approach",
                "performance",
            ]),
        );
        job.insert(
            JobCategory::General,
            set(&["summary", "overview", "key", "main", "important", "relevant"]),
        );

        Self { persona, job }
    }
}

fn set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

/// Stopwords excluded from raw job-term extraction.
pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "that", "this", "with", "from", "will", "your", "have", "into", "over", "than", "then",
        "them", "they", "their", "been", "were", "what", "when", "where", "which", "would",
        "could", "should", "about",
    ]
    .into_iter()
    .collect()
});
