//! Error types for reading input documents.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while turning a file into plain text.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Extension is not one of the supported document kinds.
    #[error(
        "unsupported file type '{extension}' for '{path}'\n  Suggestion: Use a .txt, .docx, or .pdf file"
    )]
    UnsupportedFileType {
        /// The offending file
        path: PathBuf,
        /// Extension as found, empty when there is none
        extension: String,
    },

    /// File could not be opened or read.
    #[error("failed to read '{path}': {source}")]
    Io {
        /// The file being read
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// File was read but its content could not be decoded as the expected kind.
    #[error("failed to decode '{path}': {reason}\n  Suggestion: Check that the file is not corrupt or save it again as plain text")]
    Decode {
        /// The file being decoded
        path: PathBuf,
        /// What went wrong
        reason: String,
    },
}

impl DocumentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn decode(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Decode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
