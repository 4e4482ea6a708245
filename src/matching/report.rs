//! Match classification records and the aggregate report.

use serde::Serialize;

use crate::category::Category;
use crate::keywords::KeywordInfo;

/// Score weight of an exact keyword hit.
pub const EXACT_WEIGHT: f64 = 1.0;

/// Score weight of a hit through a synonym.
pub const SYNONYM_WEIGHT: f64 = 0.7;

/// How one job keyword was found in the resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchStatus {
    /// Keyword text occurs in the resume.
    ExactMatch,
    /// Keyword absent, but `synonym` (the first one found, in list order) occurs.
    SynonymMatch { synonym: String },
    /// Neither the keyword nor any synonym occurs.
    Missing,
}

impl MatchStatus {
    /// Stable label for display output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExactMatch => "exact",
            Self::SynonymMatch { .. } => "synonym",
            Self::Missing => "missing",
        }
    }
}

/// Classification of one job keyword against a resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub keyword: KeywordInfo,
    pub status: MatchStatus,
}

impl MatchRecord {
    /// The synonym that produced a [`MatchStatus::SynonymMatch`], if any.
    #[must_use]
    pub fn matched_synonym(&self) -> Option<&str> {
        match &self.status {
            MatchStatus::SynonymMatch { synonym } => Some(synonym),
            MatchStatus::ExactMatch | MatchStatus::Missing => None,
        }
    }

    /// True for exact and synonym matches.
    #[must_use]
    pub fn is_found(&self) -> bool {
        !self.is_missing()
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.status == MatchStatus::Missing
    }
}

/// Result of scoring one resume against one keyword list.
///
/// Counts and score are derived from `records` at construction; the report
/// cannot be modified afterwards, so they always agree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    records: Vec<MatchRecord>,
    exact_count: usize,
    synonym_count: usize,
    missing_count: usize,
    score: f64,
}

impl MatchReport {
    /// Builds a report, tallying statuses and computing the weighted score.
    ///
    /// `score = (exact * 1.0 + synonym * 0.7) / total * 100`, or `0` for an
    /// empty record list.
    #[must_use]
    pub fn from_records(records: Vec<MatchRecord>) -> Self {
        let mut exact_count = 0_usize;
        let mut synonym_count = 0_usize;
        let mut missing_count = 0_usize;
        for record in &records {
            match record.status {
                MatchStatus::ExactMatch => exact_count += 1,
                MatchStatus::SynonymMatch { .. } => synonym_count += 1,
                MatchStatus::Missing => missing_count += 1,
            }
        }

        let total = records.len();
        #[allow(clippy::cast_precision_loss)] // keyword counts are tiny
        let score = if total > 0 {
            (exact_count as f64 * EXACT_WEIGHT + synonym_count as f64 * SYNONYM_WEIGHT)
                / total as f64
                * 100.0
        } else {
            0.0
        };

        Self {
            records,
            exact_count,
            synonym_count,
            missing_count,
            score,
        }
    }

    /// Records in keyword ranking order.
    #[must_use]
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    #[must_use]
    pub fn exact_count(&self) -> usize {
        self.exact_count
    }

    #[must_use]
    pub fn synonym_count(&self) -> usize {
        self.synonym_count
    }

    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.missing_count
    }

    /// Number of keywords scored.
    #[must_use]
    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// Weighted percentage in `[0, 100]`.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    #[must_use]
    pub fn rating(&self) -> ScoreRating {
        ScoreRating::from_score(self.score)
    }

    /// Records with status [`MatchStatus::Missing`], in ranking order.
    pub fn missing(&self) -> impl Iterator<Item = &MatchRecord> {
        self.records.iter().filter(|record| record.is_missing())
    }

    /// Exact and synonym matches, in ranking order.
    pub fn found(&self) -> impl Iterator<Item = &MatchRecord> {
        self.records.iter().filter(|record| record.is_found())
    }

    /// Found records grouped by category, categories in first-appearance order.
    #[must_use]
    pub fn found_by_category(&self) -> Vec<(Category, Vec<&MatchRecord>)> {
        group_by_category(self.found())
    }

    /// Missing records grouped by category, categories in first-appearance order.
    #[must_use]
    pub fn missing_by_category(&self) -> Vec<(Category, Vec<&MatchRecord>)> {
        group_by_category(self.missing())
    }

    /// Number of missing keywords per category, categories in first-appearance order.
    #[must_use]
    pub fn missing_category_counts(&self) -> Vec<(Category, usize)> {
        self.missing_by_category()
            .into_iter()
            .map(|(category, records)| (category, records.len()))
            .collect()
    }
}

/// Groups records by keyword category, preserving the order in which each
/// category first appears and the record order inside each group.
pub fn group_by_category<'a>(
    records: impl IntoIterator<Item = &'a MatchRecord>,
) -> Vec<(Category, Vec<&'a MatchRecord>)> {
    let mut groups: Vec<(Category, Vec<&'a MatchRecord>)> = Vec::new();
    for record in records {
        let category = record.keyword.category;
        match groups.iter_mut().find(|(existing, _)| *existing == category) {
            Some((_, members)) => members.push(record),
            None => groups.push((category, vec![record])),
        }
    }
    groups
}

/// Plain-language reading of a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRating {
    /// 80 and above.
    Excellent,
    /// 60 up to 80.
    Good,
    /// 40 up to 60.
    NeedsImprovement,
    /// Below 40.
    MajorImprovementsNeeded,
}

impl ScoreRating {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::NeedsImprovement
        } else {
            Self::MajorImprovementsNeeded
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent match!",
            Self::Good => "Good match",
            Self::NeedsImprovement => "Needs improvement",
            Self::MajorImprovementsNeeded => "Major improvements needed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword(text: &str, category: Category) -> KeywordInfo {
        KeywordInfo {
            text: text.to_string(),
            category,
            synonyms: Vec::new(),
            frequency: 1,
        }
    }

    fn record(text: &str, category: Category, status: MatchStatus) -> MatchRecord {
        MatchRecord {
            keyword: keyword(text, category),
            status,
        }
    }

    fn synonym(word: &str) -> MatchStatus {
        MatchStatus::SynonymMatch {
            synonym: word.to_string(),
        }
    }

    #[test]
    fn test_empty_report_scores_zero() {
        let report = MatchReport::from_records(Vec::new());
        assert!(report.score().abs() < f64::EPSILON);
        assert_eq!(report.exact_count(), 0);
        assert_eq!(report.synonym_count(), 0);
        assert_eq!(report.missing_count(), 0);
        assert_eq!(report.total(), 0);
    }

    #[test]
    fn test_weighted_score_formula() {
        let report = MatchReport::from_records(vec![
            record("sql", Category::TechnicalSkills, MatchStatus::ExactMatch),
            record("programming", Category::TechnicalSkills, synonym("coding")),
            record("python", Category::TechnicalSkills, MatchStatus::Missing),
            record("teamwork", Category::SoftSkills, MatchStatus::Missing),
        ]);

        // (1 * 1.0 + 1 * 0.7) / 4 * 100 = 42.5
        assert!((report.score() - 42.5).abs() < 1e-9, "{}", report.score());
        assert_eq!(report.exact_count(), 1);
        assert_eq!(report.synonym_count(), 1);
        assert_eq!(report.missing_count(), 2);
    }

    #[test]
    fn test_counts_match_record_tallies() {
        let report = MatchReport::from_records(vec![
            record("a", Category::Other, MatchStatus::ExactMatch),
            record("b", Category::Other, MatchStatus::ExactMatch),
            record("c", Category::Other, synonym("x")),
            record("d", Category::Other, MatchStatus::Missing),
        ]);
        assert_eq!(
            report.exact_count() + report.synonym_count() + report.missing_count(),
            report.total()
        );
        assert_eq!(report.found().count(), 3);
        assert_eq!(report.missing().count(), 1);
    }

    #[test]
    fn test_upgrading_status_strictly_increases_score() {
        let base = vec![
            record("a", Category::Other, MatchStatus::ExactMatch),
            record("b", Category::Other, MatchStatus::Missing),
        ];
        let mut upgraded_to_synonym = base.clone();
        upgraded_to_synonym[1].status = synonym("bee");
        let mut upgraded_to_exact = base.clone();
        upgraded_to_exact[1].status = MatchStatus::ExactMatch;

        let missing_score = MatchReport::from_records(base).score();
        let synonym_score = MatchReport::from_records(upgraded_to_synonym).score();
        let exact_score = MatchReport::from_records(upgraded_to_exact).score();

        assert!(synonym_score > missing_score);
        assert!(exact_score > synonym_score);
    }

    #[test]
    fn test_matched_synonym_only_for_synonym_status() {
        let exact = record("a", Category::Other, MatchStatus::ExactMatch);
        let via = record("b", Category::Other, synonym("bee"));
        let missing = record("c", Category::Other, MatchStatus::Missing);

        assert_eq!(exact.matched_synonym(), None);
        assert_eq!(via.matched_synonym(), Some("bee"));
        assert_eq!(missing.matched_synonym(), None);
    }

    #[test]
    fn test_grouping_preserves_first_appearance_order() {
        let report = MatchReport::from_records(vec![
            record("teamwork", Category::SoftSkills, MatchStatus::Missing),
            record("python", Category::TechnicalSkills, MatchStatus::Missing),
            record("jira", Category::ToolsAndTechnologies, MatchStatus::ExactMatch),
            record("leadership", Category::SoftSkills, MatchStatus::Missing),
        ]);

        let missing = report.missing_by_category();
        assert_eq!(missing.len(), 2);
        assert_eq!(missing[0].0, Category::SoftSkills);
        assert_eq!(missing[0].1.len(), 2);
        assert_eq!(missing[0].1[1].keyword.text, "leadership");
        assert_eq!(missing[1].0, Category::TechnicalSkills);

        assert_eq!(
            report.missing_category_counts(),
            vec![(Category::SoftSkills, 2), (Category::TechnicalSkills, 1)]
        );

        let found = report.found_by_category();
        assert_eq!(found, vec![(Category::ToolsAndTechnologies, vec![&report.records()[2]])]);
    }

    #[test]
    fn test_score_rating_thresholds() {
        assert_eq!(ScoreRating::from_score(100.0), ScoreRating::Excellent);
        assert_eq!(ScoreRating::from_score(80.0), ScoreRating::Excellent);
        assert_eq!(ScoreRating::from_score(79.9), ScoreRating::Good);
        assert_eq!(ScoreRating::from_score(60.0), ScoreRating::Good);
        assert_eq!(ScoreRating::from_score(40.0), ScoreRating::NeedsImprovement);
        assert_eq!(
            ScoreRating::from_score(0.0),
            ScoreRating::MajorImprovementsNeeded
        );
    }

    #[test]
    fn test_status_serializes_with_kind_tag() {
        let json = serde_json::to_value(synonym("coding")).unwrap_or_default();
        assert_eq!(json["kind"], "synonym_match");
        assert_eq!(json["synonym"], "coding");
    }
}
