//! Keyword Matcher Core Library
//!
//! Compares a resume against a job description by keyword coverage. Keywords
//! are the most frequent significant words of the job description; each one
//! is categorized, expanded with dictionary synonyms, and looked up in the
//! resume. The result is a weighted match percentage plus improvement
//! suggestions.
//!
//! # Architecture
//!
//! The pipeline runs leaves first:
//! - [`text`] - Whitespace and case normalization
//! - [`keywords`] - Stop-word filtering and frequency ranking
//! - [`synonyms`] - Synonym lookup behind the [`SynonymSource`] capability
//! - [`category`] - Pattern-based keyword categories
//! - [`matching`] - Exact / synonym / missing classification and scoring
//! - [`suggestions`] - Category and severity suggestions
//! - [`analysis`] - The [`Analyzer`] wiring every stage together
//!
//! [`document`] turns `.txt`, `.docx`, and `.pdf` files into input text.

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod analysis;
pub mod category;
pub mod document;
pub mod keywords;
pub mod matching;
pub mod suggestions;
pub mod synonyms;
pub mod text;

// Re-export commonly used types
pub use analysis::{Analysis, AnalysisError, Analyzer, AnalyzerConfig, DocumentRole, analyze};
pub use category::{Categorizer, Category, CategoryRules, categorize};
pub use document::{DocumentError, DocumentKind, extract_text};
pub use keywords::{ExtractorConfig, KeywordExtractor, KeywordInfo, StopWordSet, StopWords};
pub use matching::{MatchMode, MatchRecord, MatchReport, MatchScorer, MatchStatus, ScoreRating};
pub use suggestions::{SeverityTier, generate_suggestions};
pub use synonyms::{
    NullSynonymSource, SynonymResolver, SynonymSource, WordNetSource, load_synonym_source,
};
