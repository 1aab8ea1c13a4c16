use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli, config_path: &Path) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });

    info(format!("Config file : {}", config_path.display()));

    if cli.test {
        info("Test mode: configuration file not written");
        return Ok(());
    }

    if config_path.exists() && !force {
        warning("Configuration file already exists (use --force to overwrite)");
        return Ok(());
    }

    Config::default().save_to(config_path)?;
    success("rShiftCheck initialization completed!");
    Ok(())
}
