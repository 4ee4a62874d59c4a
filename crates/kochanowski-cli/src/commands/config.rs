//! `create-kochanowski config`: inspect or create the configuration file.

use std::path::{Path, PathBuf};

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: &GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show => {
            output.header("Current Configuration:")?;
            output.print(&render(&config)?)?;
            output.json(&config)?;
        }

        ConfigCommands::Path => {
            let path = target_path(global);
            output.print(&path.display().to_string())?;
            output.json(&serde_json::json!({ "path": path }))?;
        }

        ConfigCommands::Init { force } => {
            let path = target_path(global);
            if write_default(&path, force)? {
                output.success(&format!("Configuration created at {}", path.display()))?;
            } else {
                output.warning(&format!(
                    "Config already exists at {}  (use --force to overwrite)",
                    path.display(),
                ))?;
            }
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// `--config` when given, otherwise the per-user default.
fn target_path(global: &GlobalArgs) -> PathBuf {
    global.config.clone().unwrap_or_else(AppConfig::config_path)
}

fn render(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        path: None,
        source: Some(Box::new(e)),
    })
}

/// Write the defaults to `path`.  Returns `false` when the file exists and
/// `force` is not set.
fn write_default(path: &Path, force: bool) -> CliResult<bool> {
    if path.exists() && !force {
        return Ok(false);
    }

    let toml = render(&AppConfig::default())?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

    Ok(true)
}

// ── tests ─────────────────────────────────────────────────────────────────────
