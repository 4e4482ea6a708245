//! Skill categorization by priority-ordered pattern rules.
//!
//! A keyword is tested against the technical rules first, then tools, then
//! soft skills. The first list with a matching rule decides the category;
//! a keyword matching nothing is [`Category::Other`].

use std::fmt;
use std::sync::LazyLock;

use regex::{RegexSet, RegexSetBuilder};
use serde::Serialize;
use tracing::instrument;

/// Fixed skill categories, in rule priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    TechnicalSkills,
    ToolsAndTechnologies,
    SoftSkills,
    Other,
}

impl Category {
    /// Human-readable label for reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TechnicalSkills => "Technical Skills",
            Self::ToolsAndTechnologies => "Tools & Technologies",
            Self::SoftSkills => "Soft Skills",
            Self::Other => "Other Skills",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Built-in technical rules. `.` stands for any one character, `.*` for any run.
pub const TECHNICAL_PATTERNS: &[&str] = &[
    "programming",
    "development",
    "engineering",
    "coding",
    "algorithm",
    "data.*structure",
    "database",
    "sql",
    "python",
    "java",
    "javascript",
    "react",
    "node",
    "machine.learning",
    "ai",
    "cloud",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "devops",
    "api",
    "web",
    "mobile",
    "software",
    "system",
    "network",
    "security",
];

/// Built-in tool and technology rules.
pub const TOOL_PATTERNS: &[&str] = &[
    "tool",
    "framework",
    "library",
    "platform",
    "git",
    "jenkins",
    "jira",
    "excel",
    "tableau",
    "photoshop",
    "figma",
    "word",
    "powerpoint",
];

/// Built-in soft-skill rules.
pub const SOFT_PATTERNS: &[&str] = &[
    "communication",
    "teamwork",
    "leadership",
    "problem.solving",
    "critical.thinking",
    "adaptability",
    "creativity",
    "time.management",
    "collaboration",
    "negotiation",
    "presentation",
    "analytical",
    "strategic",
    "innovative",
    "proactive",
    "organized",
];

/// The three ordered rule lists used by a [`Categorizer`].
///
/// Entries are regex fragments matched anywhere in the word. Use
/// [`CategoryRules::add_terms`] for plain terms from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRules {
    pub technical: Vec<String>,
    pub tools: Vec<String>,
    pub soft: Vec<String>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        let owned = |patterns: &[&str]| patterns.iter().map(|p| (*p).to_string()).collect();
        Self {
            technical: owned(TECHNICAL_PATTERNS),
            tools: owned(TOOL_PATTERNS),
            soft: owned(SOFT_PATTERNS),
        }
    }
}

impl CategoryRules {
    /// Appends literal terms to the rule list of `category`.
    ///
    /// Terms are lowercased and escaped, so they match as plain substrings.
    /// Terms for [`Category::Other`] are ignored since it has no rules.
    #[must_use]
    pub fn add_terms(mut self, category: Category, terms: &[String]) -> Self {
        let target = match category {
            Category::TechnicalSkills => &mut self.technical,
            Category::ToolsAndTechnologies => &mut self.tools,
            Category::SoftSkills => &mut self.soft,
            Category::Other => return self,
        };
        target.extend(
            terms
                .iter()
                .map(|term| term.trim().to_lowercase())
                .filter(|term| !term.is_empty())
                .map(|term| regex::escape(&term)),
        );
        self
    }
}

/// Compiled, immutable categorizer.
#[derive(Debug, Clone)]
pub struct Categorizer {
    /// Checked in order; paired with the category each set assigns.
    tiers: Vec<(Category, RegexSet)>,
}

impl Categorizer {
    /// Compiles the given rules.
    ///
    /// # Errors
    /// Returns error if a rule is not a valid regex fragment.
    pub fn new(rules: &CategoryRules) -> Result<Self, regex::Error> {
        let compile = |patterns: &[String]| {
            RegexSetBuilder::new(patterns)
                .case_insensitive(true)
                .build()
        };
        Ok(Self {
            tiers: vec![
                (Category::TechnicalSkills, compile(&rules.technical)?),
                (Category::ToolsAndTechnologies, compile(&rules.tools)?),
                (Category::SoftSkills, compile(&rules.soft)?),
            ],
        })
    }

    /// Assigns a category to `word`. Depends on nothing but the word itself.
    #[must_use]
    pub fn categorize(&self, word: &str) -> Category {
        self.tiers
            .iter()
            .find(|(_, set)| set.is_match(word))
            .map_or(Category::Other, |(category, _)| *category)
    }
}

impl Default for Categorizer {
    fn default() -> Self {
        DEFAULT_CATEGORIZER.clone()
    }
}

#[allow(clippy::expect_used)]
static DEFAULT_CATEGORIZER: LazyLock<Categorizer> = LazyLock::new(|| {
    Categorizer::new(&CategoryRules::default()).expect("built-in category rules are valid") // Static patterns, safe to panic
});

/// Categorizes `word` with the built-in rules.
#[must_use]
#[instrument(level = "trace")]
pub fn categorize(word: &str) -> Category {
    DEFAULT_CATEGORIZER.categorize(word)
}
