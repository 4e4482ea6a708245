//! Keyword extraction from job descriptions.
//!
//! Words are tokenized on alphabetic runs, filtered against a stop-word set,
//! and ranked by how often they appear. Ranking ties fall back to first
//! occurrence so the same text always yields the same list.

mod extractor;
mod info;
mod stop_words;

pub use extractor::{
    DEFAULT_MIN_WORD_LEN, DEFAULT_TOP_N, ExtractorConfig, ExtractorError, KeywordExtractor,
    RankedKeyword, extract_keywords,
};
pub use info::KeywordInfo;
pub use stop_words::{BUILTIN_STOP_WORDS, StopWordSet, StopWords};
