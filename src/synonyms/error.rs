//! Error types for loading a synonym dictionary.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a lexical database.
///
/// These never reach analysis callers: a failed load selects the null
/// source instead (see [`super::load_synonym_source`]).
#[derive(Debug, Error)]
pub enum SynonymError {
    /// Configured dictionary directory does not exist.
    #[error(
        "synonym dictionary not found at '{path}'\n  Suggestion: Point --wordnet-dir or WORDNET_DIR at a WordNet 'dict' directory"
    )]
    DictionaryNotFound {
        /// The directory that was looked up
        path: PathBuf,
    },

    /// Directory exists but holds none of the `data.*` files.
    #[error(
        "no WordNet data files in '{path}'\n  Suggestion: The directory should contain data.noun, data.verb, data.adj, data.adv"
    )]
    NoDataFiles {
        /// The directory that was scanned
        path: PathBuf,
    },

    /// A data file could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },
}
