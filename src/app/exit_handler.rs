//! Exit code logic for the matcher process.
//!
//! Single responsibility: map an analysis outcome to the process exit status.

use std::process::ExitCode;

use matcher_core::AnalysisError;

/// Process outcome; converted to the exit status at the end of `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProcessExit {
    Success,
    Failure,
}

impl From<ProcessExit> for ExitCode {
    fn from(exit: ProcessExit) -> Self {
        match exit {
            ProcessExit::Success => ExitCode::SUCCESS,
            ProcessExit::Failure => ExitCode::FAILURE,
        }
    }
}

/// Warnings (no keywords found) still exit successfully; anything else fails.
pub(crate) fn determine_exit_outcome(error: &AnalysisError) -> ProcessExit {
    if error.is_warning() {
        ProcessExit::Success
    } else {
        ProcessExit::Failure
    }
}
