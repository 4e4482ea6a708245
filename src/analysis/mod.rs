//! End-to-end resume analysis.
//!
//! An [`Analyzer`] wires the pipeline stages together: normalize both texts,
//! extract ranked keywords from the job description, attach a category and
//! synonyms to each, classify them against the resume, and derive
//! suggestions. It holds only read-only state and can be reused for any
//! number of runs, including from several threads.
//!
//! # Example
//!
//! ```
//! use matcher_core::analysis::analyze;
//!
//! let analysis = analyze(
//!     "Rust and SQL developer",
//!     "We need Rust and SQL experience",
//! ).unwrap();
//! assert!(analysis.report.score() > 0.0);
//! assert!(!analysis.suggestions.is_empty());
//! ```

mod error;

pub use error::{AnalysisError, AnalyzerBuildError, DocumentRole};

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::category::{Categorizer, CategoryRules};
use crate::keywords::{ExtractorConfig, KeywordExtractor, KeywordInfo};
use crate::matching::{MatchMode, MatchReport, MatchScorer, ScoreRating};
use crate::suggestions::generate_suggestions;
use crate::synonyms::{SynonymResolver, SynonymSource};
use crate::text::normalize;

/// Settings for one [`Analyzer`].
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    pub extractor: ExtractorConfig,
    pub categories: CategoryRules,
    pub match_mode: MatchMode,
}

/// Full result of analyzing one resume against one job description.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Job keywords in ranking order, with category and synonyms.
    pub keywords: Vec<KeywordInfo>,
    pub report: MatchReport,
    /// Category suggestions followed by one severity suggestion.
    pub suggestions: Vec<String>,
    pub rating: ScoreRating,
    /// False when no synonym dictionary was loaded.
    pub synonyms_available: bool,
}

/// Reusable, configured analysis pipeline.
#[derive(Debug, Clone)]
pub struct Analyzer {
    extractor: KeywordExtractor,
    categorizer: Categorizer,
    resolver: SynonymResolver,
    scorer: MatchScorer,
}

impl Analyzer {
    /// Builds the pipeline for `config`, looking synonyms up in `source`.
    ///
    /// # Errors
    /// Returns error if the extractor settings are invalid or a category rule
    /// does not compile.
    pub fn new(
        config: AnalyzerConfig,
        source: Arc<dyn SynonymSource>,
    ) -> Result<Self, AnalyzerBuildError> {
        Ok(Self {
            extractor: KeywordExtractor::new(config.extractor)?,
            categorizer: Categorizer::new(&config.categories)?,
            resolver: SynonymResolver::new(source),
            scorer: MatchScorer::new(config.match_mode),
        })
    }

    /// Default settings with synonyms looked up in `source`.
    #[must_use]
    pub fn with_source(source: Arc<dyn SynonymSource>) -> Self {
        Self {
            resolver: SynonymResolver::new(source),
            ..Self::default()
        }
    }

    /// Whether synonym matching is active for this analyzer.
    #[must_use]
    pub fn synonyms_available(&self) -> bool {
        self.resolver.is_available()
    }

    /// Runs the full pipeline.
    ///
    /// # Errors
    /// Returns [`AnalysisError::EmptyInput`] when either text is empty after
    /// normalization (the resume is checked first) and
    /// [`AnalysisError::NoKeywordsFound`] when the job text yields no
    /// keywords.
    #[instrument(
        skip(self, resume_text, job_text),
        fields(resume_len = resume_text.len(), job_len = job_text.len(), synonyms = self.resolver.source_name())
    )]
    pub fn analyze(&self, resume_text: &str, job_text: &str) -> Result<Analysis, AnalysisError> {
        if normalize(resume_text).is_empty() {
            return Err(AnalysisError::EmptyInput {
                document: DocumentRole::Resume,
            });
        }
        if normalize(job_text).is_empty() {
            return Err(AnalysisError::EmptyInput {
                document: DocumentRole::JobDescription,
            });
        }

        let ranked = self.extractor.extract(job_text);
        if ranked.is_empty() {
            return Err(AnalysisError::NoKeywordsFound);
        }

        let keywords: Vec<KeywordInfo> = ranked
            .into_iter()
            .map(|ranked| {
                let category = self.categorizer.categorize(&ranked.word);
                let synonyms = self.resolver.resolve(&ranked.word);
                KeywordInfo::new(ranked, category, synonyms)
            })
            .collect();
        debug!(keywords = keywords.len(), "Keywords enriched");

        let report = self.scorer.score(resume_text, &keywords);
        let suggestions = generate_suggestions(report.missing());
        let rating = report.rating();

        info!(
            score = report.score(),
            exact = report.exact_count(),
            synonym = report.synonym_count(),
            missing = report.missing_count(),
            "Analysis complete"
        );

        Ok(Analysis {
            keywords,
            report,
            suggestions,
            rating,
            synonyms_available: self.resolver.is_available(),
        })
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            extractor: KeywordExtractor::default(),
            categorizer: Categorizer::default(),
            resolver: SynonymResolver::unavailable(),
            scorer: MatchScorer::default(),
        }
    }
}

/// Analyzes with the built-in settings and no synonym dictionary.
///
/// # Errors
/// See [`Analyzer::analyze`].
pub fn analyze(resume_text: &str, job_text: &str) -> Result<Analysis, AnalysisError> {
    Analyzer::default().analyze(resume_text, job_text)
}
