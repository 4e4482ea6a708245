//! CLI entry point for the keyword matcher.

use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::Parser;
use tracing::{debug, info};

mod app;
mod app_config;
mod cli;
mod commands;
mod output;

use app::{Settings, WORDNET_DIR_ENV};
use cli::Args;

fn main() -> Result<ExitCode> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Config file feeds the log level, so it is read before tracing starts
    let loaded_config = app_config::load_config(args.config.as_deref())?;
    let settings = Settings::resolve(
        &args,
        loaded_config.config.as_ref(),
        env::var_os(WORDNET_DIR_ENV).map(PathBuf::from),
    );

    // Priority: RUST_LOG env var > quiet flag > verbose flag > config verbosity > default (info)
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(settings.verbosity.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    debug!(?args, "CLI arguments parsed");

    if args.show_config {
        commands::run_config_show_command(&loaded_config, &settings);
        return Ok(ExitCode::SUCCESS);
    }

    let (Some(resume), Some(job)) = (args.resume.as_deref(), args.job.as_deref()) else {
        bail!("Both RESUME and JOB files are required");
    };

    info!(resume = %resume.display(), job = %job.display(), "Keyword matcher starting");

    let use_spinner =
        app::should_show_spinner(args.no_progress, settings.quiet(), io::stderr().is_terminal());
    let exit = app::run_analysis(resume, job, &settings, use_spinner)?;
    Ok(exit.into())
}
