//! Frequency-ranked keyword extraction from job-description text.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument};

use super::stop_words::StopWords;
use crate::text::normalize;

/// Default number of keywords kept after ranking.
pub const DEFAULT_TOP_N: usize = 30;

/// Default minimum keyword length in characters.
pub const DEFAULT_MIN_WORD_LEN: usize = 3;

#[allow(clippy::expect_used)]
static DEFAULT_TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[a-zA-Z]{3,}\b").expect("valid regex") // Static pattern, safe to panic
});

/// Errors raised when building an extractor from invalid settings.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// A minimum word length of zero would match empty tokens.
    #[error(
        "invalid minimum word length {0}\n  Suggestion: Use a minimum word length of at least 1"
    )]
    InvalidMinWordLen(usize),

    /// A keyword limit of zero would discard every keyword.
    #[error("invalid keyword limit {0}\n  Suggestion: Keep at least 1 keyword (top_n >= 1)")]
    InvalidTopN(usize),

    /// The tokenizer pattern failed to compile.
    #[error("failed to build tokenizer pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Settings for one keyword extractor.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Maximum number of keywords returned.
    pub top_n: usize,
    /// Shortest alphabetic run accepted as a token.
    pub min_word_len: usize,
    /// Words dropped before counting.
    pub stop_words: StopWords,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            min_word_len: DEFAULT_MIN_WORD_LEN,
            stop_words: StopWords::default(),
        }
    }
}

/// One candidate keyword with its occurrence count in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedKeyword {
    pub word: String,
    pub frequency: usize,
}

/// Tokenizes, filters, counts, and ranks words from a job description.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    config: ExtractorConfig,
    /// Compiled once per extractor; depends on `min_word_len`.
    token_pattern: Regex,
}

impl KeywordExtractor {
    /// Creates an extractor for the given settings.
    ///
    /// # Errors
    /// Returns [`ExtractorError::InvalidTopN`] when `top_n` is zero and
    /// [`ExtractorError::InvalidMinWordLen`] when `min_word_len` is zero.
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        if config.top_n == 0 {
            return Err(ExtractorError::InvalidTopN(0));
        }
        if config.min_word_len == 0 {
            return Err(ExtractorError::InvalidMinWordLen(0));
        }
        let token_pattern = Regex::new(&format!(r"\b[a-zA-Z]{{{},}}\b", config.min_word_len))?;
        Ok(Self {
            config,
            token_pattern,
        })
    }

    /// Returns the settings this extractor was built with.
    #[must_use]
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extracts up to `top_n` keywords ranked by descending frequency.
    ///
    /// Words with equal frequency keep the order of their first occurrence in
    /// the text, so output is reproducible for a given input. Empty or
    /// all-stop-word input yields an empty list.
    #[must_use]
    #[instrument(skip(self, job_text), fields(len = job_text.len(), top_n = self.config.top_n))]
    pub fn extract(&self, job_text: &str) -> Vec<RankedKeyword> {
        let text = normalize(job_text);
        if text.is_empty() {
            return Vec::new();
        }

        // word -> (frequency, index of first occurrence in the token stream)
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
        let mut token_count = 0_usize;
        for (index, token) in self
            .token_pattern
            .find_iter(&text)
            .map(|m| m.as_str())
            .filter(|token| !self.config.stop_words.contains(token))
            .enumerate()
        {
            token_count += 1;
            counts.entry(token).or_insert((0, index)).0 += 1;
        }

        let mut ranked: Vec<(&str, usize, usize)> = counts
            .into_iter()
            .map(|(word, (frequency, first_index))| (word, frequency, first_index))
            .collect();
        ranked.sort_by_key(|&(_, frequency, first_index)| (Reverse(frequency), first_index));
        ranked.truncate(self.config.top_n);

        debug!(
            tokens = token_count,
            keywords = ranked.len(),
            "Keyword extraction complete"
        );

        ranked
            .into_iter()
            .map(|(word, frequency, _)| RankedKeyword {
                word: word.to_string(),
                frequency,
            })
            .collect()
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self {
            config: ExtractorConfig::default(),
            token_pattern: DEFAULT_TOKEN_PATTERN.clone(),
        }
    }
}

/// Convenience function to extract keywords with the built-in stop words.
///
/// For repeated extractions, create a [`KeywordExtractor`] instead.
///
/// # Errors
/// Returns error if `top_n` or `min_word_len` is zero.
pub fn extract_keywords(
    job_text: &str,
    top_n: usize,
    min_word_len: usize,
) -> Result<Vec<RankedKeyword>, ExtractorError> {
    let extractor = KeywordExtractor::new(ExtractorConfig {
        top_n,
        min_word_len,
        ..ExtractorConfig::default()
    })?;
    Ok(extractor.extract(job_text))
}
