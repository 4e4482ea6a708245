//! Improvement suggestions derived from missing keywords.

use serde::Serialize;
use tracing::instrument;

use crate::category::Category;
use crate::matching::{MatchRecord, group_by_category};

/// More missing keywords than this calls for a major revision.
pub const MAJOR_REVISION_THRESHOLD: usize = 10;

/// More missing keywords than this (up to the major threshold) calls for moderate work.
pub const MODERATE_IMPROVEMENT_THRESHOLD: usize = 5;

/// Overall gap size, chosen from the number of missing keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    MajorRevision,
    ModerateImprovement,
    GoodMatch,
}

impl SeverityTier {
    #[must_use]
    pub fn from_missing_count(missing: usize) -> Self {
        if missing > MAJOR_REVISION_THRESHOLD {
            Self::MajorRevision
        } else if missing > MODERATE_IMPROVEMENT_THRESHOLD {
            Self::ModerateImprovement
        } else {
            Self::GoodMatch
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::MajorRevision => {
                "Major revision needed: Consider significantly restructuring your resume to better match the job requirements"
            }
            Self::ModerateImprovement => {
                "Moderate improvements: Focus on adding the top missing keywords to your resume"
            }
            Self::GoodMatch => "Good match: Minor tweaks suggested for optimal alignment",
        }
    }
}

/// Builds suggestions from the missing records of a report.
///
/// One suggestion per category with missing keywords (technical and tools
/// cite up to three keywords, soft skills up to two, other categories none),
/// in first-appearance order, followed by exactly one severity suggestion.
/// Records that are not missing are ignored.
#[must_use]
#[instrument(skip_all)]
pub fn generate_suggestions<'a>(
    missing: impl IntoIterator<Item = &'a MatchRecord>,
) -> Vec<String> {
    let missing: Vec<&MatchRecord> = missing
        .into_iter()
        .filter(|record| record.is_missing())
        .collect();

    let mut suggestions: Vec<String> = group_by_category(missing.iter().copied())
        .into_iter()
        .filter_map(|(category, records)| category_suggestion(category, &records))
        .collect();

    suggestions.push(
        SeverityTier::from_missing_count(missing.len())
            .message()
            .to_string(),
    );
    suggestions
}

fn category_suggestion(category: Category, records: &[&MatchRecord]) -> Option<String> {
    let cite = |limit: usize| {
        records
            .iter()
            .take(limit)
            .map(|record| record.keyword.text.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    match category {
        Category::TechnicalSkills => Some(format!(
            "Add technical skills: Consider including {} in your skills section",
            cite(3)
        )),
        Category::ToolsAndTechnologies => Some(format!(
            "Learn tools: Gain experience with {} through online courses or projects",
            cite(3)
        )),
        Category::SoftSkills => Some(format!(
            "Highlight soft skills: Add examples demonstrating {} in your experience section",
            cite(2)
        )),
        Category::Other => None,
    }
}
