//! WordNet-backed synonym source.
//!
//! Reads the Princeton WordNet `data.*` files from a dictionary directory and
//! keeps an in-memory index from each lemma to the synsets it belongs to.
//! Only the word list of each synset is kept; pointers and glosses are
//! ignored.
//!
//! Inflected words are reduced to their dictionary base form before lookup,
//! the way WordNet's own `morphy` does it: the `*.exc` exception lists are
//! consulted first, then the suffix detachment rules of each part of speech.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use tracing::{debug, info, instrument};

use super::SynonymSource;
use super::error::SynonymError;

/// Data files read, in lookup order (noun, verb, adjective, adverb).
pub const WORDNET_DATA_FILES: &[&str] = &["data.noun", "data.verb", "data.adj", "data.adv"];

/// Part of speech of a synset, in lookup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    const ALL: [Self; 4] = [Self::Noun, Self::Verb, Self::Adjective, Self::Adverb];

    /// Maps the `ss_type` field of a data record. Satellites count as adjectives.
    fn from_synset_type(ss_type: &str) -> Option<Self> {
        match ss_type {
            "n" => Some(Self::Noun),
            "v" => Some(Self::Verb),
            "a" | "s" => Some(Self::Adjective),
            "r" => Some(Self::Adverb),
            _ => None,
        }
    }

    fn slot(self) -> usize {
        self as usize
    }

    fn exception_file(self) -> &'static str {
        match self {
            Self::Noun => "noun.exc",
            Self::Verb => "verb.exc",
            Self::Adjective => "adj.exc",
            Self::Adverb => "adv.exc",
        }
    }

    /// Suffix detachment rules as `(suffix, replacement)`.
    fn detachment_rules(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Noun => &[
                ("s", ""),
                ("ses", "s"),
                ("xes", "x"),
                ("zes", "z"),
                ("ches", "ch"),
                ("shes", "sh"),
                ("men", "man"),
                ("ies", "y"),
            ],
            Self::Verb => &[
                ("s", ""),
                ("ies", "y"),
                ("es", "e"),
                ("es", ""),
                ("ed", "e"),
                ("ed", ""),
                ("ing", "e"),
                ("ing", ""),
            ],
            Self::Adjective => &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")],
            Self::Adverb => &[],
        }
    }

    /// Applies every matching rule to every form, keeping first-seen order.
    fn detach(self, forms: &[String]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut detached = Vec::new();
        for form in forms {
            for (suffix, replacement) in self.detachment_rules() {
                if let Some(stem) = form.strip_suffix(suffix) {
                    let candidate = format!("{stem}{replacement}");
                    if !candidate.is_empty() && seen.insert(candidate.clone()) {
                        detached.push(candidate);
                    }
                }
            }
        }
        detached
    }
}

/// Lemma and exception tables of one part of speech.
#[derive(Debug, Default)]
struct PosIndex {
    /// Lemma -> indices into `WordNetSource::synsets`, in load order.
    lemmas: HashMap<String, Vec<usize>>,
    /// Irregular inflection -> base forms, from the `*.exc` file.
    exceptions: HashMap<String, Vec<String>>,
}

impl PosIndex {
    /// Keeps the forms that are lemmas of this part of speech, deduplicated.
    fn known<'a>(&self, forms: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut seen = HashSet::new();
        forms
            .into_iter()
            .filter(|form| self.lemmas.contains_key(*form) && seen.insert(*form))
            .map(str::to_string)
            .collect()
    }
}

/// In-memory WordNet synset index. Read-only after [`WordNetSource::load`].
#[derive(Debug, Default)]
pub struct WordNetSource {
    /// Lemmas of each synset, lowercased, `_` replaced by a space.
    synsets: Vec<Vec<String>>,
    by_pos: [PosIndex; 4],
}

impl WordNetSource {
    /// Loads every available `data.*` file from `dir`, plus the matching
    /// `*.exc` exception lists when present.
    ///
    /// Missing part-of-speech files are skipped; lines that do not parse as
    /// synset records (license header, truncated lines) are ignored.
    ///
    /// # Errors
    /// Returns error if `dir` does not exist, contains no data files, or a
    /// data file cannot be read.
    #[instrument(fields(dir = %dir.display()))]
    pub fn load(dir: &Path) -> Result<Self, SynonymError> {
        if !dir.is_dir() {
            return Err(SynonymError::DictionaryNotFound {
                path: dir.to_path_buf(),
            });
        }

        let mut source = Self::default();
        let mut files_read = 0_usize;
        for file_name in WORDNET_DATA_FILES {
            let path = dir.join(file_name);
            if !path.is_file() {
                debug!(file = %path.display(), "WordNet data file missing, skipping");
                continue;
            }
            let content = read_dictionary_file(&path)?;
            let before = source.synsets.len();
            source.ingest(&content);
            files_read += 1;
            debug!(
                file = %file_name,
                synsets = source.synsets.len() - before,
                "Loaded WordNet data file"
            );
        }

        if files_read == 0 {
            return Err(SynonymError::NoDataFiles {
                path: dir.to_path_buf(),
            });
        }

        let mut exceptions = 0_usize;
        for pos in PartOfSpeech::ALL {
            let path = dir.join(pos.exception_file());
            if path.is_file() {
                let content = read_dictionary_file(&path)?;
                exceptions += source.ingest_exceptions(pos, &content);
            }
        }

        info!(
            files = files_read,
            synsets = source.synsets.len(),
            exceptions,
            "WordNet dictionary loaded"
        );
        Ok(source)
    }

    /// Builds a source from the text of one or more data files.
    #[must_use]
    pub fn from_data(contents: &[&str]) -> Self {
        let mut source = Self::default();
        for content in contents {
            source.ingest(content);
        }
        source
    }

    /// Number of synsets held.
    #[must_use]
    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    fn ingest(&mut self, content: &str) {
        for line in content.lines() {
            // License header lines start with two spaces.
            if line.starts_with(' ') {
                continue;
            }
            let Some((pos, lemmas)) = parse_synset_record(line) else {
                continue;
            };
            let id = self.synsets.len();
            let index = &mut self.by_pos[pos.slot()];
            for lemma in &lemmas {
                let entry = index.lemmas.entry(lemma.clone()).or_default();
                if entry.last() != Some(&id) {
                    entry.push(id);
                }
            }
            self.synsets.push(lemmas);
        }
    }

    /// Reads `inflected base [base...]` lines; returns the number of entries.
    fn ingest_exceptions(&mut self, pos: PartOfSpeech, content: &str) -> usize {
        let exceptions = &mut self.by_pos[pos.slot()].exceptions;
        let before = exceptions.len();
        for line in content.lines() {
            let mut words = line.split_whitespace().map(dictionary_word);
            let Some(inflected) = words.next() else {
                continue;
            };
            let bases: Vec<String> = words.collect();
            if !bases.is_empty() {
                exceptions.entry(inflected).or_default().extend(bases);
            }
        }
        exceptions.len() - before
    }

    /// Dictionary forms of `word` for one part of speech.
    ///
    /// An exception entry wins outright; otherwise the word itself and its
    /// detached forms are tried, repeating detachment until something known
    /// turns up or no rule applies.
    fn base_forms(&self, pos: PartOfSpeech, word: &str) -> Vec<String> {
        let index = &self.by_pos[pos.slot()];

        if let Some(bases) = index.exceptions.get(word) {
            return index.known(std::iter::once(word).chain(bases.iter().map(String::as_str)));
        }

        let mut forms = pos.detach(&[word.to_string()]);
        let found = index.known(std::iter::once(word).chain(forms.iter().map(String::as_str)));
        if !found.is_empty() {
            return found;
        }

        while !forms.is_empty() {
            forms = pos.detach(&forms);
            let found = index.known(forms.iter().map(String::as_str));
            if !found.is_empty() {
                return found;
            }
        }
        Vec::new()
    }
}

impl SynonymSource for WordNetSource {
    fn lookup(&self, word: &str) -> Vec<String> {
        let key = dictionary_word(word.trim());
        let mut lemmas = Vec::new();
        for pos in PartOfSpeech::ALL {
            let index = &self.by_pos[pos.slot()];
            let mut visited = HashSet::new();
            for base in self.base_forms(pos, &key) {
                let ids = index.lemmas.get(&base).into_iter().flatten();
                for id in ids.filter(|id| visited.insert(**id)) {
                    if let Some(synset) = self.synsets.get(*id) {
                        lemmas.extend(synset.iter().cloned());
                    }
                }
            }
        }
        lemmas
    }

    fn name(&self) -> &'static str {
        "wordnet"
    }
}

fn read_dictionary_file(path: &Path) -> Result<String, SynonymError> {
    fs::read_to_string(path).map_err(|source| SynonymError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Lowercases a dictionary token and turns `_` joins into spaces.
fn dictionary_word(raw: &str) -> String {
    raw.replace('_', " ").to_lowercase()
}

/// Extracts the part of speech and word list from one `data.*` record.
///
/// Record layout: `offset lex_filenum ss_type w_cnt word lex_id [word lex_id...] p_cnt ...`
/// where `w_cnt` is two hex digits.
fn parse_synset_record(line: &str) -> Option<(PartOfSpeech, Vec<String>)> {
    let mut fields = line.split_whitespace();
    let offset = fields.next()?;
    if !offset.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let _lex_filenum = fields.next()?;
    let pos = PartOfSpeech::from_synset_type(fields.next()?)?;
    let word_count = usize::from_str_radix(fields.next()?, 16).ok()?;

    let mut words = Vec::with_capacity(word_count);
    for _ in 0..word_count {
        let raw = fields.next()?;
        let _lex_id = fields.next()?;
        // Adjective syntactic markers: "galore(ip)"
        let raw = raw.split_once('(').map_or(raw, |(word, _)| word);
        let word = dictionary_word(raw);
        if !word.is_empty() {
            words.push(word);
        }
    }
    (!words.is_empty()).then_some((pos, words))
}
