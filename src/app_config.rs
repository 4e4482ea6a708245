//! Application configuration loading for CLI defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use matcher_core::{MatchMode, StopWordSet};

use crate::cli::OutputFormat;

/// Directory name under the user config root.
const APP_DIR: &str = "keyword-matcher";

/// TOML-backed file configuration for matcher defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    /// Number of job keywords compared (1..=200).
    pub top_n: Option<u16>,
    /// Shortest word treated as a keyword (1..=20).
    pub min_word_len: Option<u8>,
    /// Base stop-word vocabulary.
    pub stop_words: Option<StopWordSet>,
    /// Additional words never treated as keywords.
    pub extra_stop_words: Option<Vec<String>>,
    /// WordNet dictionary directory.
    pub wordnet_dir: Option<PathBuf>,
    pub match_mode: Option<MatchMode>,
    pub format: Option<OutputFormat>,
    /// Default verbosity mode.
    pub verbosity: Option<VerbositySetting>,
    /// Extra terms categorized as technical skills.
    pub extra_technical_terms: Option<Vec<String>>,
    /// Extra terms categorized as tools and technologies.
    pub extra_tool_terms: Option<Vec<String>>,
    /// Extra terms categorized as soft skills.
    pub extra_soft_terms: Option<Vec<String>>,
}

impl FileConfig {
    /// Validates config values against CLI constraints.
    pub fn validate(&self) -> Result<()> {
        if let Some(top_n) = self.top_n
            && !(1..=200).contains(&top_n)
        {
            bail!("Invalid config value for `top_n`: {top_n}. Expected range: 1..=200");
        }

        if let Some(min_word_len) = self.min_word_len
            && !(1..=20).contains(&min_word_len)
        {
            bail!(
                "Invalid config value for `min_word_len`: {min_word_len}. Expected range: 1..=20"
            );
        }

        validate_term_list("extra_stop_words", self.extra_stop_words.as_deref())?;
        validate_term_list("extra_technical_terms", self.extra_technical_terms.as_deref())?;
        validate_term_list("extra_tool_terms", self.extra_tool_terms.as_deref())?;
        validate_term_list("extra_soft_terms", self.extra_soft_terms.as_deref())?;

        Ok(())
    }
}

fn validate_term_list(field: &str, terms: Option<&[String]>) -> Result<()> {
    let Some(terms) = terms else {
        return Ok(());
    };
    if terms.iter().any(|term| term.trim().is_empty()) {
        bail!("Invalid config value for `{field}`: entries must not be empty");
    }
    Ok(())
}

/// Supported config verbosity labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerbositySetting {
    #[default]
    Default,
    Verbose,
    Quiet,
    Debug,
}

impl VerbositySetting {
    /// Returns the stable string label for display output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Verbose => "verbose",
            Self::Quiet => "quiet",
            Self::Debug => "debug",
        }
    }

    /// Tracing filter directive for this verbosity.
    #[must_use]
    pub fn log_level(self) -> &'static str {
        match self {
            Self::Default => "info",
            Self::Verbose => "debug",
            Self::Quiet => "error",
            Self::Debug => "trace",
        }
    }
}

/// Loaded config metadata.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Resolved config path if a base directory is known.
    pub path: Option<PathBuf>,
    /// Parsed file config when a config file exists and was valid.
    pub config: Option<FileConfig>,
    /// Indicates whether configuration was loaded from disk.
    pub loaded_from_file: bool,
}

/// Resolves default config path.
///
/// Priority:
/// 1. `$XDG_CONFIG_HOME/keyword-matcher/config.toml`
/// 2. `$HOME/.config/keyword-matcher/config.toml`
#[must_use]
pub fn resolve_default_config_path() -> Option<PathBuf> {
    if let Some(xdg_config_home) = env_var_non_empty_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config_home).join(APP_DIR).join("config.toml"));
    }

    let home = env_var_non_empty_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join(APP_DIR)
            .join("config.toml"),
    )
}

fn env_var_non_empty_os(name: &str) -> Option<std::ffi::OsString> {
    let value = env::var_os(name)?;
    if value.is_empty() { None } else { Some(value) }
}

/// Loads config from `explicit` when given, otherwise from the default path
/// if a file exists there.
///
/// An explicit path that does not exist is an error; a missing default file
/// is not.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("Config file '{}' does not exist", path.display());
        }
        let config = load_file_config(path)?;
        return Ok(LoadedConfig {
            path: Some(path.to_path_buf()),
            config: Some(config),
            loaded_from_file: true,
        });
    }

    let path = resolve_default_config_path();
    let Some(path_ref) = path.as_deref() else {
        return Ok(LoadedConfig {
            path,
            config: None,
            loaded_from_file: false,
        });
    };

    if !path_ref.exists() {
        return Ok(LoadedConfig {
            path,
            config: None,
            loaded_from_file: false,
        });
    }

    let config = load_file_config(path_ref)?;
    Ok(LoadedConfig {
        path,
        config: Some(config),
        loaded_from_file: true,
    })
}

fn load_file_config(path: &Path) -> Result<FileConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    parse_config_str(&raw)
        .with_context(|| format!("Failed to parse config file '{}'", path.display()))
}

fn parse_config_str(raw: &str) -> Result<FileConfig> {
    let mut cfg = FileConfig::default();
    for (line_index, raw_line) in raw.lines().enumerate() {
        let line_no = line_index + 1;
        let line = strip_inline_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        let Some((raw_key, raw_value)) = line.split_once('=') else {
            bail!("Invalid config syntax on line {line_no}: expected key = value");
        };

        let key = raw_key.trim();
        let value = raw_value.trim();
        let invalid = || format!("Invalid `{key}` value on line {line_no}");

        match key {
            "top_n" => {
                let parsed = parse_integer_u64(value).with_context(invalid)?;
                let n = u16::try_from(parsed)
                    .map_err(|_| anyhow::anyhow!("top_n out of range for u16"))
                    .with_context(invalid)?;
                cfg.top_n = Some(n);
            }
            "min_word_len" => {
                let parsed = parse_integer_u64(value).with_context(invalid)?;
                let n = u8::try_from(parsed)
                    .map_err(|_| anyhow::anyhow!("min_word_len out of range for u8"))
                    .with_context(invalid)?;
                cfg.min_word_len = Some(n);
            }
            "stop_words" => {
                let parsed = parse_string_literal(value).with_context(invalid)?;
                cfg.stop_words = Some(parse_stop_word_set(&parsed).with_context(|| {
                    format!("Invalid `stop_words` value '{parsed}' on line {line_no}")
                })?);
            }
            "extra_stop_words" => {
                cfg.extra_stop_words = Some(parse_string_list(value).with_context(invalid)?);
            }
            "wordnet_dir" => {
                let parsed = parse_string_literal(value).with_context(invalid)?;
                cfg.wordnet_dir = Some(PathBuf::from(parsed));
            }
            "match_mode" => {
                let parsed = parse_string_literal(value).with_context(invalid)?;
                cfg.match_mode = Some(parse_match_mode(&parsed).with_context(|| {
                    format!("Invalid `match_mode` value '{parsed}' on line {line_no}")
                })?);
            }
            "format" => {
                let parsed = parse_string_literal(value).with_context(invalid)?;
                cfg.format = Some(parse_format(&parsed).with_context(|| {
                    format!("Invalid `format` value '{parsed}' on line {line_no}")
                })?);
            }
            "verbosity" => {
                let parsed = parse_string_literal(value).with_context(invalid)?;
                cfg.verbosity = Some(parse_verbosity(&parsed).with_context(|| {
                    format!("Invalid `verbosity` value '{parsed}' on line {line_no}")
                })?);
            }
            "extra_technical_terms" => {
                cfg.extra_technical_terms = Some(parse_string_list(value).with_context(invalid)?);
            }
            "extra_tool_terms" => {
                cfg.extra_tool_terms = Some(parse_string_list(value).with_context(invalid)?);
            }
            "extra_soft_terms" => {
                cfg.extra_soft_terms = Some(parse_string_list(value).with_context(invalid)?);
            }
            unknown => {
                bail!("Unknown configuration key: '{unknown}' on line {line_no}");
            }
        }
        // Earlier lines already passed, so a failure here belongs to this key.
        cfg.validate().with_context(invalid)?;
    }
    Ok(cfg)
}

fn strip_inline_comment(line: &str) -> &str {
    let mut in_string = false;
    for (index, ch) in line.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..index],
            _ => {}
        }
    }
    line
}

fn parse_string_literal(raw_value: &str) -> Result<String> {
    if raw_value.len() < 2 || !raw_value.starts_with('"') || !raw_value.ends_with('"') {
        bail!("Expected double-quoted string");
    }
    Ok(raw_value[1..raw_value.len() - 1].to_string())
}

/// Parses `["a", "b"]`. Commas inside quotes belong to the item.
fn parse_string_list(raw_value: &str) -> Result<Vec<String>> {
    let Some(inner) = raw_value
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        bail!("Expected a list of double-quoted strings, e.g. [\"a\", \"b\"]");
    };

    let mut items = Vec::new();
    let mut in_string = false;
    let mut start = 0;
    for (index, ch) in inner.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            ',' if !in_string => {
                items.push(&inner[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    if in_string {
        bail!("Unterminated string in list");
    }
    items.push(&inner[start..]);

    let mut parsed = Vec::new();
    for (position, item) in items.into_iter().enumerate() {
        let item = item.trim();
        // Allow an empty list and a trailing comma.
        if item.is_empty() && (position > 0 || inner.trim().is_empty()) {
            continue;
        }
        parsed.push(parse_string_literal(item)?);
    }
    Ok(parsed)
}

fn parse_integer_u64(raw_value: &str) -> Result<u64> {
    let token = raw_value.trim();
    if token.is_empty() {
        bail!("Expected integer value");
    }
    let value = token.parse::<i128>()?;
    if value < 0 {
        bail!("Expected non-negative integer");
    }
    u64::try_from(value).map_err(|_| anyhow::anyhow!("Integer value out of range for u64"))
}

fn parse_stop_word_set(value: &str) -> Result<StopWordSet> {
    match value {
        "basic" => Ok(StopWordSet::Basic),
        "extended" => Ok(StopWordSet::Extended),
        _ => bail!("Expected one of: basic, extended"),
    }
}

fn parse_match_mode(value: &str) -> Result<MatchMode> {
    match value {
        "substring" => Ok(MatchMode::Substring),
        "whole_word" => Ok(MatchMode::WholeWord),
        _ => bail!("Expected one of: substring, whole_word"),
    }
}

fn parse_format(value: &str) -> Result<OutputFormat> {
    match value {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => bail!("Expected one of: text, json"),
    }
}

fn parse_verbosity(value: &str) -> Result<VerbositySetting> {
    match value {
        "default" => Ok(VerbositySetting::Default),
        "verbose" => Ok(VerbositySetting::Verbose),
        "quiet" => Ok(VerbositySetting::Quiet),
        "debug" => Ok(VerbositySetting::Debug),
        _ => bail!("Expected one of: default, verbose, quiet, debug"),
    }
}
