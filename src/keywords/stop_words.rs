//! Stop-word sets used to drop function words before ranking.

use std::collections::HashSet;

use stop_words::{LANGUAGE, get};

/// Closed list of common English function words excluded from keyword candidacy.
pub const BUILTIN_STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "your", "has", "had", "her",
    "his", "how", "out", "see", "now", "one", "may", "get", "its", "who", "than", "been", "any",
    "our", "from", "with", "this", "that", "have", "will", "would", "should", "could", "what",
    "when", "where", "which", "there", "their", "they", "them", "these", "those", "then", "such",
    "some", "also", "more", "most", "just", "like", "only", "other", "about", "into", "over",
    "under", "after", "before", "between", "through", "during", "without", "being", "both",
    "each", "while", "until", "upon", "within", "using", "based", "including", "according",
    "following", "various", "provide", "provided",
];

/// Which base vocabulary a [`StopWords`] set starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopWordSet {
    /// Only [`BUILTIN_STOP_WORDS`].
    #[default]
    Basic,
    /// The built-in list plus the full English list from the `stop-words` crate.
    Extended,
}

impl StopWordSet {
    /// Returns the stable label used in config files and `--show-config`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Extended => "extended",
        }
    }
}

/// Immutable lowercase stop-word lookup set.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Builds a set from the chosen base vocabulary plus caller-supplied extras.
    ///
    /// Extras are trimmed and lowercased; blank entries are ignored.
    #[must_use]
    pub fn new(set: StopWordSet, extra: &[String]) -> Self {
        let mut words: HashSet<String> = BUILTIN_STOP_WORDS
            .iter()
            .map(|word| (*word).to_string())
            .collect();

        if set == StopWordSet::Extended {
            for word in get(LANGUAGE::English) {
                words.insert(word.to_string().to_lowercase());
            }
        }

        for word in extra {
            let word = word.trim().to_lowercase();
            if !word.is_empty() {
                words.insert(word);
            }
        }

        Self { words }
    }

    /// Returns true if `word` (already lowercase) is a stop word.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stop words in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new(StopWordSet::Basic, &[])
    }
}
