//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use kochanowski_core::prelude::{CommandStep, Progress, SAMPLE_FILE_NAME, ScaffoldEvent};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
#[derive(Debug, Clone)]
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            // JSON consumers read stdout; keep human lines out of it.
            quiet: args.quiet || resolved_format == OutputFormat::Json,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// One compact JSON line; only written in JSON mode.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        if self.resolved_format != OutputFormat::Json {
            return Ok(());
        }
        let line = serde_json::to_string(value).map_err(io::Error::other)?;
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[cfg(test)]
    fn supports_color(&self) -> bool {
        !self.no_color
    }

    #[cfg(test)]
    fn is_quiet(&self) -> bool {
        self.quiet
    }

    #[cfg(test)]
    fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

/// Human-facing progress lines for a running scaffold.
///
/// A failed write to the terminal must not abort the scaffold, so write
/// errors are dropped here.
impl Progress for OutputManager {
    fn on_event(&self, event: &ScaffoldEvent) {
        let _ = match event {
            ScaffoldEvent::DirectoryCreated { path } => self.info(&format!(
                "Initializing a new Kochanowski project in {}",
                path.display()
            )),
            ScaffoldEvent::CommandStarted {
                step: CommandStep::InitManifest,
                command,
            } => self.info(&format!("Running {command}")),
            ScaffoldEvent::CommandStarted {
                step: CommandStep::InstallDependency,
                ..
            } => self.info("Installing Kochanowski package..."),
            ScaffoldEvent::SampleWritten { .. } => {
                self.success(&format!("Created {SAMPLE_FILE_NAME} with sample content."))
            }
            ScaffoldEvent::ScriptRegistered { manifest, .. } => {
                let file = manifest
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| manifest.display().to_string());
                self.success(&format!("Added start script to {file}."))
            }
        };
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
