//! Application layer errors.
//!
//! These errors represent failures in orchestration, not domain rules.
//! Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::CommandStep;
use crate::error::ErrorCategory;

/// Why a single external command did not succeed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandFailure {
    /// The program could not be started at all (not installed, not
    /// executable, bad working directory).
    #[error("could not start `{program}`: {reason}")]
    Spawn { program: String, reason: String },

    /// The program ran and exited unsuccessfully.
    #[error("`{command}` exited with {}", exit_detail(.code))]
    Exit { command: String, code: Option<i32> },
}

fn exit_detail(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by a signal)".into(),
    }
}

/// Errors that occur during scaffold orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Target directory is already there; nothing was touched.
    #[error("Directory {name} already exists. Please choose a different name.")]
    ProjectExists { name: String, path: PathBuf },

    /// `npm init` or `npm install` failed.
    #[error("{}: {source}", .step.failure_message())]
    CommandFailed {
        step: CommandStep,
        #[source]
        source: CommandFailure,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The interactive prompt could not be shown or was aborted.
    #[error("Could not read the project name: {reason}")]
    PromptFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectExists { path, .. } => vec![
                format!("'{}' is already on disk", path.display()),
                "Choose a different project name".into(),
            ],
            Self::CommandFailed { source, .. } => match source {
                CommandFailure::Spawn { program, .. } => vec![
                    format!("Ensure `{}` is installed and in your PATH", program),
                    "Node.js ships npm: https://nodejs.org".into(),
                ],
                CommandFailure::Exit { .. } => vec![
                    "Check the npm output above for details".into(),
                    "The project directory was left in place for inspection".into(),
                ],
            },
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Pass the project name as an argument to skip the prompt".into(),
                "Example: create-kochanowski my-poem".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } => ErrorCategory::Precondition,
            Self::CommandFailed { .. } => ErrorCategory::ExternalCommand,
            Self::FilesystemError { .. } | Self::PromptFailed { .. } => ErrorCategory::Internal,
        }
    }
}
