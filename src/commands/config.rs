//! Config command handler: show effective configuration.

use crate::app::Settings;
use crate::app_config::LoadedConfig;

pub fn run_config_show_command(loaded_config: &LoadedConfig, settings: &Settings) {
    for line in config_show_lines(loaded_config, settings) {
        println!("{line}");
    }
}

pub(crate) fn config_show_lines(loaded_config: &LoadedConfig, settings: &Settings) -> Vec<String> {
    let resolved_path = loaded_config.path.as_ref().map_or_else(
        || "<unresolved>".to_string(),
        |path| path.display().to_string(),
    );
    let wordnet_dir = settings.wordnet_dir.as_ref().map_or_else(
        || "<unset>".to_string(),
        |dir| format!("{} ({})", dir.display(), settings.wordnet_dir_source.as_str()),
    );

    vec![
        format!("config_path = {resolved_path}"),
        format!(
            "config_file = {}",
            if loaded_config.loaded_from_file {
                "loaded"
            } else {
                "not found (using defaults)"
            }
        ),
        format!("top_n = {}", settings.top_n),
        format!("min_word_len = {}", settings.min_word_len),
        format!("stop_words = {}", settings.stop_words.as_str()),
        format!("extra_stop_words = {}", format_list(&settings.extra_stop_words)),
        format!("wordnet_dir = {wordnet_dir}"),
        format!("match_mode = {}", settings.match_mode.as_str()),
        format!("format = {}", settings.format.as_str()),
        format!("verbosity = {}", settings.verbosity.as_str()),
        format!(
            "extra_technical_terms = {}",
            format_list(&settings.extra_technical_terms)
        ),
        format!("extra_tool_terms = {}", format_list(&settings.extra_tool_terms)),
        format!("extra_soft_terms = {}", format_list(&settings.extra_soft_terms)),
    ]
}

fn format_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("\"{item}\"")).collect();
    format!("[{}]", quoted.join(", "))
}
