//! `kitgen config`: write, show and locate the configuration file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<&Path>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = AppConfig::active_path(config_file);

    match cmd {
        ConfigCommands::Init { force } => {
            write_default(&path, force)?;
            info!(path = %path.display(), "Configuration written");
            output.success(&format!("Wrote {}", path.display()))?;
        }

        ConfigCommands::List => {
            output.header(&format!("# {}", path.display()))?;
            output.print(config.to_toml().map_err(CliError::config)?.trim_end())?;
        }

        ConfigCommands::Path => {
            // Printed even with --quiet so scripts can capture it.
            println!("{}", path.display());
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn write_default(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::ConfigExists {
            path: path.to_path_buf(),
        });
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_cli_context(|| format!("Could not create {}", parent.display()))?;
    }
    let content = AppConfig::default().to_toml().map_err(CliError::config)?;
    fs::write(path, content).with_cli_context(|| format!("Could not write {}", path.display()))
}

// ── tests ─────────────────────────────────────────────────────────────────────
