//! CLI output formatting and display helpers.

use anyhow::{Context, Result};
use matcher_core::{Analysis, Category, MatchRecord, MatchStatus};

use crate::cli::OutputFormat;

/// Shown when no dictionary was loaded.
pub const SYNONYMS_DISABLED_NOTE: &str =
    "Note: synonym matching is disabled (no synonym dictionary loaded)";

/// Returns terminal width from COLUMNS, or 80 if unset/invalid.
pub fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 20)
        .unwrap_or(80)
}

/// Truncates text to at most `width` chars, appending ellipsis if truncated.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let text_len = text.chars().count();
    if text_len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    if width == 1 {
        return "…".to_string();
    }

    let mut output: String = text.chars().take(width - 1).collect();
    output.push('…');
    output
}

/// Writes the report to stdout in the requested format.
pub(crate) fn print_report(analysis: &Analysis, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for line in render_text(analysis, terminal_width()) {
                println!("{line}");
            }
        }
        OutputFormat::Json => println!("{}", render_json(analysis)?),
    }
    Ok(())
}

/// Pretty-printed JSON of the full analysis.
pub(crate) fn render_json(analysis: &Analysis) -> Result<String> {
    serde_json::to_string_pretty(analysis).context("Failed to serialize analysis report")
}

/// Human-readable report lines. Keyword listings are truncated to `width`.
pub(crate) fn render_text(analysis: &Analysis, width: usize) -> Vec<String> {
    let report = &analysis.report;
    let mut lines = vec![
        format!(
            "Match score: {:.1}% ({})",
            report.score(),
            analysis.rating.label()
        ),
        format!(
            "Keywords: {} total, {} exact, {} via synonym, {} missing",
            report.total(),
            report.exact_count(),
            report.synonym_count(),
            report.missing_count()
        ),
    ];
    if !analysis.synonyms_available {
        lines.push(SYNONYMS_DISABLED_NOTE.to_string());
    }

    lines.push(String::new());
    lines.push("Found keywords:".to_string());
    push_grouped(&mut lines, &report.found_by_category(), width, found_label);

    lines.push(String::new());
    lines.push("Missing keywords:".to_string());
    push_grouped(&mut lines, &report.missing_by_category(), width, missing_label);

    lines.push(String::new());
    lines.push("Suggestions:".to_string());
    for (index, suggestion) in analysis.suggestions.iter().enumerate() {
        lines.push(format!("  {}. {suggestion}", index + 1));
    }

    let counts = report.missing_category_counts();
    if !counts.is_empty() {
        lines.push(String::new());
        lines.push("Missing by category:".to_string());
        for (category, count) in counts {
            let line = format!("  {:<22}{count:>3}  {}", category.label(), "#".repeat(count));
            lines.push(truncate_to_width(&line, width));
        }
    }

    lines
}

fn push_grouped(
    lines: &mut Vec<String>,
    groups: &[(Category, Vec<&MatchRecord>)],
    width: usize,
    label: fn(&MatchRecord) -> String,
) {
    if groups.is_empty() {
        lines.push("  none".to_string());
        return;
    }
    for (category, records) in groups {
        let entries: Vec<String> = records.iter().map(|record| label(record)).collect();
        let line = format!("  {}: {}", category.label(), entries.join(", "));
        lines.push(truncate_to_width(&line, width));
    }
}

fn found_label(record: &MatchRecord) -> String {
    match &record.status {
        MatchStatus::SynonymMatch { synonym } => {
            format!("{} (via {synonym})", record.keyword.text)
        }
        MatchStatus::ExactMatch | MatchStatus::Missing => record.keyword.text.clone(),
    }
}

fn missing_label(record: &MatchRecord) -> String {
    if record.keyword.synonyms.is_empty() {
        record.keyword.text.clone()
    } else {
        format!(
            "{} (similar: {})",
            record.keyword.text,
            record.keyword.synonyms.join(", ")
        )
    }
}
