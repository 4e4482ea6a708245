//! Synonym lookup for keyword matching.
//!
//! A [`SynonymSource`] is the lexical database capability. It is chosen once
//! at startup by [`load_synonym_source`]: either a [`WordNetSource`] or, when
//! no dictionary can be loaded, a [`NullSynonymSource`] that knows no
//! synonyms. The [`SynonymResolver`] applies the filtering rules on top of
//! whatever the source returns.

mod error;
mod wordnet;

pub use error::SynonymError;
pub use wordnet::{WORDNET_DATA_FILES, WordNetSource};

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::{instrument, trace, warn};

/// Maximum synonyms kept per keyword.
pub const MAX_SYNONYMS: usize = 3;

/// A lexical database returning words related to a given word.
///
/// Implementations are shared read-only across analyses, so lookups must not
/// mutate state.
pub trait SynonymSource: Send + Sync + fmt::Debug {
    /// Returns related words for `word`, in the source's own order.
    ///
    /// May include the word itself, duplicates, or multi-word phrases; the
    /// [`SynonymResolver`] filters those out.
    fn lookup(&self, word: &str) -> Vec<String>;

    /// Short backend label for logs and reports.
    fn name(&self) -> &'static str;

    /// False for the degraded source that never returns anything.
    fn is_available(&self) -> bool {
        true
    }
}

/// Source used when no dictionary could be loaded. Always returns nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSynonymSource;

impl SynonymSource for NullSynonymSource {
    fn lookup(&self, _word: &str) -> Vec<String> {
        Vec::new()
    }

    fn name(&self) -> &'static str {
        "none"
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// In-memory source built from groups of interchangeable words.
///
/// Every member of a group is a synonym of every other member.
#[derive(Debug, Clone, Default)]
pub struct StaticSynonymSource {
    related: HashMap<String, Vec<String>>,
}

impl StaticSynonymSource {
    #[must_use]
    pub fn from_groups(groups: &[&[&str]]) -> Self {
        let mut related: HashMap<String, Vec<String>> = HashMap::new();
        for group in groups {
            for word in *group {
                let entry = related.entry(word.to_lowercase()).or_default();
                entry.extend(group.iter().map(|other| other.to_lowercase()));
            }
        }
        Self { related }
    }
}

impl SynonymSource for StaticSynonymSource {
    fn lookup(&self, word: &str) -> Vec<String> {
        self.related
            .get(&word.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Applies the synonym rules on top of a shared [`SynonymSource`].
#[derive(Debug, Clone)]
pub struct SynonymResolver {
    source: Arc<dyn SynonymSource>,
}

impl SynonymResolver {
    #[must_use]
    pub fn new(source: Arc<dyn SynonymSource>) -> Self {
        Self { source }
    }

    /// Resolver backed by [`NullSynonymSource`].
    #[must_use]
    pub fn unavailable() -> Self {
        Self::new(Arc::new(NullSynonymSource))
    }

    /// Whether the underlying source can return synonyms at all.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.source.is_available()
    }

    /// Label of the underlying source.
    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Returns up to [`MAX_SYNONYMS`] distinct single-word synonyms of `word`.
    ///
    /// Drops the word itself and any multi-word candidate, then keeps the
    /// first three in the source's order.
    #[must_use]
    #[instrument(level = "trace", skip(self))]
    pub fn resolve(&self, word: &str) -> Vec<String> {
        let word = word.trim();
        let mut seen = HashSet::new();
        let synonyms: Vec<String> = self
            .source
            .lookup(word)
            .into_iter()
            .map(|candidate| candidate.trim().to_string())
            .filter(|candidate| {
                !candidate.is_empty()
                    && candidate != word
                    && candidate.split_whitespace().count() == 1
            })
            .filter(|candidate| seen.insert(candidate.clone()))
            .take(MAX_SYNONYMS)
            .collect();
        trace!(word, count = synonyms.len(), "Resolved synonyms");
        synonyms
    }
}

impl Default for SynonymResolver {
    fn default() -> Self {
        Self::unavailable()
    }
}

/// Selects the process-wide synonym source.
///
/// With no directory, or when loading fails, logs a single warning and
/// returns [`NullSynonymSource`]; analysis then proceeds without synonyms.
#[must_use]
pub fn load_synonym_source(dir: Option<&Path>) -> Arc<dyn SynonymSource> {
    let Some(dir) = dir else {
        warn!("No synonym dictionary configured; synonym matching is disabled");
        return Arc::new(NullSynonymSource);
    };

    match WordNetSource::load(dir) {
        Ok(source) => Arc::new(source),
        Err(error) => {
            warn!(
                error = %error,
                "Synonym dictionary unavailable; synonym matching is disabled"
            );
            Arc::new(NullSynonymSource)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FixedSource(Vec<&'static str>);

    impl SynonymSource for FixedSource {
        fn lookup(&self, _word: &str) -> Vec<String> {
            self.0.iter().map(|s| (*s).to_string()).collect()
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    fn resolver(candidates: Vec<&'static str>) -> SynonymResolver {
        SynonymResolver::new(Arc::new(FixedSource(candidates)))
    }

    #[test]
    fn test_resolve_drops_word_itself() {
        let synonyms = resolver(vec!["coding", "programming"]).resolve("programming");
        assert_eq!(synonyms, vec!["coding"]);
    }

    #[test]
    fn test_resolve_drops_multi_word_candidates() {
        let synonyms =
            resolver(vec!["computer programming", "coding"]).resolve("programming");
        assert_eq!(synonyms, vec!["coding"]);
    }

    #[test]
    fn test_resolve_deduplicates_and_caps_at_three() {
        let synonyms =
            resolver(vec!["a1", "a1", "b2", "c3", "d4", "e5"]).resolve("word");
        assert_eq!(synonyms.len(), MAX_SYNONYMS);
        let unique: HashSet<_> = synonyms.iter().collect();
        assert_eq!(unique.len(), synonyms.len());
        assert!(synonyms.contains(&"a1".to_string()));
    }

    #[test]
    fn test_resolve_ignores_blank_candidates() {
        let synonyms = resolver(vec!["", "  ", "coding"]).resolve("programming");
        assert_eq!(synonyms, vec!["coding"]);
    }

    #[test]
    fn test_null_source_returns_nothing() {
        let resolver = SynonymResolver::unavailable();
        assert!(resolver.resolve("programming").is_empty());
        assert!(!resolver.is_available());
        assert_eq!(resolver.source_name(), "none");
    }

    #[test]
    fn test_static_source_links_group_members() {
        let source = StaticSynonymSource::from_groups(&[&["programming", "coding", "scheduling"]]);
        let resolver = SynonymResolver::new(Arc::new(source));

        let synonyms = resolver.resolve("coding");
        assert_eq!(synonyms.len(), 2);
        assert!(synonyms.contains(&"programming".to_string()));
        assert!(synonyms.contains(&"scheduling".to_string()));
        assert!(resolver.resolve("teamwork").is_empty());
    }

    #[test]
    fn test_load_without_dir_degrades_to_null() {
        let source = load_synonym_source(None);
        assert!(!source.is_available());
    }

    #[test]
    fn test_load_bad_dir_degrades_to_null() {
        let source = load_synonym_source(Some(Path::new("/nonexistent/wordnet")));
        assert!(!source.is_available());
        assert!(source.lookup("programming").is_empty());
    }

    #[test]
    fn test_resolver_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SynonymResolver>();
    }
}
