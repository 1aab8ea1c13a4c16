//! rShiftCheck library root.
//! Exposes the compliance checker, the CLI parser and the high-level run()
//! function used by main.rs.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::compliance::{ComplianceChecker, evaluate};
pub use models::{Finding, FindingCode, Level, RuleThresholds, TimeSpan};

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

/// Central command dispatcher.
/// Returns `true` when a BLOCK finding must fail the process.
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<bool> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli, config_path).map(|_| false),
        Commands::Config { .. } => {
            cli::commands::config::handle(&cli.command, cfg, config_path).map(|_| false)
        }
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Batch { .. } => cli::commands::batch::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<bool> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    // `init` must work even when the existing file is broken
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load_from(&config_path)?,
    };

    dispatch(&cli, &cfg, &config_path)
}
