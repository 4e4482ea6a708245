//! Progress UI (spinner) for dictionary loading and analysis.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Decides whether the spinner is drawn: only on a terminal, and never in
/// quiet mode or with `--no-progress`.
pub(crate) fn should_show_spinner(no_progress: bool, quiet: bool, stderr_is_terminal: bool) -> bool {
    !no_progress && !quiet && stderr_is_terminal
}

/// Spinner handle. Inert when disabled; cleared when dropped.
pub(crate) struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    pub(crate) fn start(enabled: bool, message: &str) -> Self {
        if !enabled {
            return Self { bar: None };
        }
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    pub(crate) fn set_message(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(message.to_string());
        }
    }

    #[cfg(test)]
    pub(crate) fn is_active(&self) -> bool {
        self.bar.is_some()
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
