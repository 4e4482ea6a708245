//! CLI command handlers.

mod config;

pub use config::run_config_show_command;
