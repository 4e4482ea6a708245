//! Resume-versus-keyword classification.

use serde::Serialize;
use tracing::{debug, instrument};

use super::report::{MatchRecord, MatchReport, MatchStatus};
use crate::keywords::KeywordInfo;
use crate::text::{contains_whole_word, normalize};

/// How a keyword or synonym must appear in the resume to count as present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Literal substring of the normalized resume. `"art"` is found in `"smart"`.
    #[default]
    Substring,
    /// Occurrence not touching other letters or digits. Stricter, so scores
    /// are lower or equal compared to [`MatchMode::Substring`].
    WholeWord,
}

impl MatchMode {
    /// Returns the stable label used in config files and `--show-config`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Substring => "substring",
            Self::WholeWord => "whole_word",
        }
    }

    fn is_present(self, haystack: &str, needle: &str) -> bool {
        match self {
            Self::Substring => !needle.is_empty() && haystack.contains(needle),
            Self::WholeWord => contains_whole_word(haystack, needle),
        }
    }
}

/// Classifies job keywords against resume text.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchScorer {
    mode: MatchMode,
}

impl MatchScorer {
    #[must_use]
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Classifies each keyword, in order, and builds the weighted report.
    ///
    /// The resume is normalized once. A keyword present in it is an exact
    /// match; otherwise the first of its synonyms present makes a synonym
    /// match; otherwise it is missing.
    #[must_use]
    #[instrument(skip_all, fields(resume_len = resume_text.len(), keywords = keywords.len(), mode = self.mode.as_str()))]
    pub fn score(&self, resume_text: &str, keywords: &[KeywordInfo]) -> MatchReport {
        let resume = normalize(resume_text);

        let records = keywords
            .iter()
            .map(|keyword| MatchRecord {
                keyword: keyword.clone(),
                status: self.classify(&resume, keyword),
            })
            .collect();

        let report = MatchReport::from_records(records);
        debug!(
            exact = report.exact_count(),
            synonym = report.synonym_count(),
            missing = report.missing_count(),
            score = report.score(),
            "Scored resume"
        );
        report
    }

    fn classify(&self, resume: &str, keyword: &KeywordInfo) -> MatchStatus {
        if self.mode.is_present(resume, &keyword.text) {
            return MatchStatus::ExactMatch;
        }
        keyword
            .synonyms
            .iter()
            .find(|synonym| self.mode.is_present(resume, synonym))
            .map_or(MatchStatus::Missing, |synonym| MatchStatus::SynonymMatch {
                synonym: synonym.clone(),
            })
    }
}

/// Scores `keywords` against `resume_text` with substring matching.
#[must_use]
pub fn score_match(resume_text: &str, keywords: &[KeywordInfo]) -> MatchReport {
    MatchScorer::default().score(resume_text, keywords)
}
