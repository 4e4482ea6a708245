//! Enriched keyword records produced for one job description.

use serde::Serialize;

use super::extractor::RankedKeyword;
use crate::category::Category;

/// One ranked job keyword with its category and synonyms.
///
/// Built once per analysis and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordInfo {
    /// Normalized keyword text.
    pub text: String,
    pub category: Category,
    /// Up to three single-word alternates, never containing `text` itself.
    pub synonyms: Vec<String>,
    /// Occurrences in the job text. Used for ranking only.
    pub frequency: usize,
}

impl KeywordInfo {
    #[must_use]
    pub fn new(ranked: RankedKeyword, category: Category, synonyms: Vec<String>) -> Self {
        Self {
            text: ranked.word,
            category,
            synonyms,
            frequency: ranked.frequency,
        }
    }
}
