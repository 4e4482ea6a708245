//! Analysis run orchestration for the CLI.

mod exit_handler;
mod progress_manager;
mod settings;

pub(crate) use exit_handler::{ProcessExit, determine_exit_outcome};
pub(crate) use progress_manager::{Spinner, should_show_spinner};
pub use settings::{Settings, WORDNET_DIR_ENV};

use std::path::Path;

use anyhow::{Context, Result};
use matcher_core::{Analyzer, DocumentRole, extract_text, load_synonym_source};
use tracing::{debug, error, info, warn};

use crate::output;

/// Runs one resume/job comparison and prints the report.
///
/// Document read failures are logged and treated as empty text, so they
/// surface as an empty-input error from the analysis.
pub(crate) fn run_analysis(
    resume: &Path,
    job: &Path,
    settings: &Settings,
    use_spinner: bool,
) -> Result<ProcessExit> {
    let spinner = Spinner::start(use_spinner, "Loading synonym dictionary...");
    let source = load_synonym_source(settings.wordnet_dir.as_deref());
    info!(
        source = source.name(),
        from = settings.wordnet_dir_source.as_str(),
        "Synonym source ready"
    );

    let analyzer = Analyzer::new(settings.analyzer_config(), source)
        .context("Failed to configure analyzer")?;

    spinner.set_message("Reading documents...");
    let resume_text = read_document(resume, DocumentRole::Resume);
    let job_text = read_document(job, DocumentRole::JobDescription);

    spinner.set_message("Analyzing...");
    let result = analyzer.analyze(&resume_text, &job_text);
    drop(spinner);

    match result {
        Ok(analysis) => {
            output::print_report(&analysis, settings.format)?;
            Ok(ProcessExit::Success)
        }
        Err(analysis_error) => {
            if analysis_error.is_warning() {
                warn!("{analysis_error}");
            } else {
                error!("{analysis_error}");
            }
            Ok(determine_exit_outcome(&analysis_error))
        }
    }
}

fn read_document(path: &Path, role: DocumentRole) -> String {
    match extract_text(path) {
        Ok(text) => {
            debug!(document = %role, chars = text.len(), "Document read");
            text
        }
        Err(document_error) => {
            error!(document = %role, "{document_error}");
            String::new()
        }
    }
}
