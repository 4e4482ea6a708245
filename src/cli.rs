//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Match a resume against a job description by keyword coverage.
///
/// Extracts the most frequent significant words of the job description,
/// looks each one up in the resume (directly or through a synonym), and
/// reports a weighted match score with suggestions for improvement.
#[derive(Parser, Debug)]
#[command(name = "keyword-matcher")]
#[command(author, version, about)]
pub struct Args {
    /// Resume file (.txt, .docx, or .pdf)
    #[arg(required_unless_present = "show_config")]
    pub resume: Option<PathBuf>,

    /// Job description file (.txt, .docx, or .pdf)
    #[arg(required_unless_present = "show_config")]
    pub job: Option<PathBuf>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Number of job keywords to compare (1-200)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u16).range(1..=200))]
    pub top_n: Option<u16>,

    /// Shortest word treated as a keyword (1-20)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=20))]
    pub min_word_len: Option<u8>,

    /// WordNet dictionary directory holding the data.* files
    #[arg(long, value_name = "DIR")]
    pub wordnet_dir: Option<PathBuf>,

    /// Also drop the full English stop-word list, not just the built-in one
    #[arg(long)]
    pub extended_stop_words: bool,

    /// Require keywords to appear as whole words in the resume
    #[arg(long)]
    pub whole_word: bool,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the effective settings and exit
    #[arg(long)]
    pub show_config: bool,

    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Returns the stable string label for display output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}
