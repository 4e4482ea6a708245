//! Effective run settings: command-line flags over config file over defaults.

use std::path::PathBuf;

use matcher_core::keywords::{DEFAULT_MIN_WORD_LEN, DEFAULT_TOP_N};
use matcher_core::{
    AnalyzerConfig, Category, CategoryRules, ExtractorConfig, MatchMode, StopWordSet, StopWords,
};

use crate::app_config::{FileConfig, VerbositySetting};
use crate::cli::{Args, OutputFormat};

/// Environment variable naming a WordNet directory when neither flag nor file does.
pub const WORDNET_DIR_ENV: &str = "WORDNET_DIR";

/// Where the dictionary directory setting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingSource {
    Flag,
    ConfigFile,
    Environment,
    Unset,
}

impl SettingSource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flag => "flag",
            Self::ConfigFile => "config",
            Self::Environment => "env",
            Self::Unset => "unset",
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub top_n: usize,
    pub min_word_len: usize,
    pub stop_words: StopWordSet,
    pub extra_stop_words: Vec<String>,
    pub wordnet_dir: Option<PathBuf>,
    pub wordnet_dir_source: SettingSource,
    pub match_mode: MatchMode,
    pub format: OutputFormat,
    pub verbosity: VerbositySetting,
    pub extra_technical_terms: Vec<String>,
    pub extra_tool_terms: Vec<String>,
    pub extra_soft_terms: Vec<String>,
}

impl Settings {
    /// Merges `args` over `file` over built-in defaults.
    ///
    /// `env_wordnet_dir` is the value of [`WORDNET_DIR_ENV`], passed in so the
    /// merge stays a pure function.
    #[must_use]
    pub fn resolve(args: &Args, file: Option<&FileConfig>, env_wordnet_dir: Option<PathBuf>) -> Self {
        let file = file.cloned().unwrap_or_default();

        let (wordnet_dir, wordnet_dir_source) = if let Some(dir) = &args.wordnet_dir {
            (Some(dir.clone()), SettingSource::Flag)
        } else if let Some(dir) = file.wordnet_dir {
            (Some(dir), SettingSource::ConfigFile)
        } else if let Some(dir) = env_wordnet_dir.filter(|dir| !dir.as_os_str().is_empty()) {
            (Some(dir), SettingSource::Environment)
        } else {
            (None, SettingSource::Unset)
        };

        let stop_words = if args.extended_stop_words {
            StopWordSet::Extended
        } else {
            file.stop_words.unwrap_or_default()
        };

        let match_mode = if args.whole_word {
            MatchMode::WholeWord
        } else {
            file.match_mode.unwrap_or_default()
        };

        let verbosity = if args.quiet {
            VerbositySetting::Quiet
        } else {
            match args.verbose {
                0 => file.verbosity.unwrap_or_default(),
                1 => VerbositySetting::Verbose,
                _ => VerbositySetting::Debug,
            }
        };

        Self {
            top_n: args
                .top_n
                .or(file.top_n)
                .map_or(DEFAULT_TOP_N, usize::from),
            min_word_len: args
                .min_word_len
                .or(file.min_word_len)
                .map_or(DEFAULT_MIN_WORD_LEN, usize::from),
            stop_words,
            extra_stop_words: file.extra_stop_words.unwrap_or_default(),
            wordnet_dir,
            wordnet_dir_source,
            match_mode,
            format: args.format.or(file.format).unwrap_or_default(),
            verbosity,
            extra_technical_terms: file.extra_technical_terms.unwrap_or_default(),
            extra_tool_terms: file.extra_tool_terms.unwrap_or_default(),
            extra_soft_terms: file.extra_soft_terms.unwrap_or_default(),
        }
    }

    /// Builds the analyzer configuration these settings describe.
    #[must_use]
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            extractor: ExtractorConfig {
                top_n: self.top_n,
                min_word_len: self.min_word_len,
                stop_words: StopWords::new(self.stop_words, &self.extra_stop_words),
            },
            categories: CategoryRules::default()
                .add_terms(Category::TechnicalSkills, &self.extra_technical_terms)
                .add_terms(Category::ToolsAndTechnologies, &self.extra_tool_terms)
                .add_terms(Category::SoftSkills, &self.extra_soft_terms),
            match_mode: self.match_mode,
        }
    }

    /// True when only errors are logged.
    #[must_use]
    pub fn quiet(&self) -> bool {
        self.verbosity == VerbositySetting::Quiet
    }
}
