//! # create-kochanowski
//!
//! Scaffolds a runnable Kochanowski language project.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! |  0   | Success                                  |
//! |  1   | Any reported failure                     |
//! |  2   | Invalid command-line usage (from clap)   |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod prompt;

fn main() -> ExitCode {
    // Missing .env is fine; real deployments use the environment.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let (global, command) = match Cli::try_parse().and_then(Cli::into_command) {
        Ok(parsed) => parsed,
        Err(e) => {
            // --help and --version arrive here too and exit 0.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    let _log_guard = match init_logging(&global) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    debug!(
        verbose = global.verbose,
        quiet = global.quiet,
        no_color = global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            return handle_error(
                CliError::ConfigError {
                    message: format!("{e:#}"),
                    path: global.config.clone(),
                    source: Some(e.into()),
                },
                &global,
            );
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&global, &config);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(command, &global, config, output) {
        Ok(()) => {
            info!("create-kochanowski completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, &global),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(
    command: Commands,
    global: &GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match command {
        Commands::New(args) => commands::new::execute(args, config, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, global, config, output),
    }
}

/// Translate a `CliError` into a user message and an exit code.
fn handle_error(err: CliError, global: &GlobalArgs) -> ExitCode {
    err.log();

    // stderr, so the message survives a redirected stdout.
    let colored = !global.no_color && std::io::IsTerminal::is_terminal(&std::io::stderr());
    let verbose = global.verbose > 0;
    let msg = if colored {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
