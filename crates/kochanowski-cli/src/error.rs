//! Error handling for the create-kochanowski CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use kochanowski_core::domain::DomainError;
use kochanowski_core::error::ScaffoldError;

pub use kochanowski_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Comprehensive CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `kochanowski-core`.
    ///
    /// Displayed unchanged: the core messages are already the ones users
    /// should see (e.g. "Directory demo already exists. ...").
    #[error(transparent)]
    Core(#[from] ScaffoldError),

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        CliError::Core(err.into())
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core_err) => core_err.suggestions(),

            Self::ConfigError { path, .. } => {
                let path = path
                    .clone()
                    .unwrap_or_else(crate::config::AppConfig::config_path);
                vec![
                    format!("Check the configuration file at {}", path.display()),
                    "Environment overrides look like KOCHANOWSKI_SCAFFOLD__PACKAGE_MANAGER".into(),
                    "Use 'create-kochanowski config init --force' to reset it".into(),
                ]
            }

            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get the error category for styling and logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Precondition => ErrorCategory::UserError,
                CoreCategory::ExternalCommand => ErrorCategory::External,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// Every reported failure exits with `1`; argument errors never reach
    /// here because clap exits with `2` first.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::External => tracing::error!("External command failed: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error or a precondition the user can fix.
    UserError,
    /// `npm` (or the configured package manager) failed.
    External,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use kochanowski_core::application::{ApplicationError, CommandFailure};
    use kochanowski_core::domain::CommandStep;

    fn project_exists() -> CliError {
        ScaffoldError::from(ApplicationError::ProjectExists {
            name: "demo".into(),
            path: PathBuf::from("/tmp/demo"),
        })
        .into()
    }

    // ── display ───────────────────────────────────────────────────────────

    #[test]
    fn core_messages_pass_through_unchanged() {
        assert_eq!(
            project_exists().to_string(),
            "Directory demo already exists. Please choose a different name."
        );

        let empty: CliError = DomainError::EmptyProjectName.into();
        assert_eq!(empty.to_string(), "Project name cannot be empty");
    }

    #[test]
    fn install_failure_keeps_headline() {
        let err: CliError = ScaffoldError::from(ApplicationError::CommandFailed {
            step: CommandStep::InstallDependency,
            source: CommandFailure::Exit {
                command: "npm install --silent kochanowski".into(),
                code: Some(1),
            },
        })
        .into();
        assert!(
            err.to_string()
                .starts_with("Failed to install Kochanowski package: ")
        );
        assert_eq!(err.category(), ErrorCategory::External);
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn every_failure_exits_with_one() {
        let errors = [
            project_exists(),
            DomainError::EmptyProjectName.into(),
            CliError::ConfigError {
                message: "x".into(),
                path: None,
                source: None,
            },
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            },
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }

    // ── categories ────────────────────────────────────────────────────────

    #[test]
    fn existing_directory_is_a_user_error() {
        assert_eq!(project_exists().category(), ErrorCategory::UserError);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let s = project_exists().format_plain(false);
        assert!(s.contains("Error: Directory demo already exists"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause_and_omits_hint() {
        let err = CliError::IoError {
            message: "Failed to determine the current directory".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: gone"));
        assert!(!s.contains("--verbose"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
