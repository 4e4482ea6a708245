//! Error types for running and configuring an analysis.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::keywords::ExtractorError;

/// Which input document an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentRole {
    Resume,
    JobDescription,
}

impl DocumentRole {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Resume => "resume",
            Self::JobDescription => "job description",
        }
    }
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reasons an analysis produced no report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Input text is empty once whitespace is collapsed.
    #[error("{document} text is empty\n  Suggestion: Provide a {document} file that contains readable text")]
    EmptyInput {
        /// The empty document
        document: DocumentRole,
    },

    /// Job text has no word that survives tokenization and stop-word removal.
    #[error(
        "no significant keywords found in the job description\n  Suggestion: Check that the job description has real content beyond common words"
    )]
    NoKeywordsFound,
}

impl AnalysisError {
    /// True for conditions reported as a warning rather than a failure.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::NoKeywordsFound)
    }
}

/// Errors raised when building an [`super::Analyzer`] from invalid settings.
#[derive(Debug, Error)]
pub enum AnalyzerBuildError {
    #[error(transparent)]
    Extractor(#[from] ExtractorError),

    /// A category rule failed to compile.
    #[error("invalid category rule: {0}\n  Suggestion: Check the extra category terms in your config")]
    CategoryRules(#[from] regex::Error),
}
