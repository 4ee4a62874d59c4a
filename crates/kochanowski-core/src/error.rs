//! Unified error handling for Kochanowski Core.
//!
//! Wraps domain and application errors behind one type so adapters and the
//! CLI only ever match on [`ScaffoldError`].

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum ScaffoldError {
    /// Errors from the domain layer (rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ScaffoldError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in create-kochanowski".into(),
                "Please report it with the output of a -vv run".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input; recoverable by asking again.
    Validation,
    /// The world is not in the state the workflow needs (directory exists).
    Precondition,
    /// `npm` or another child process failed.
    ExternalCommand,
    Internal,
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn wrapped_errors_display_unchanged() {
        let err: ScaffoldError = ApplicationError::ProjectExists {
            name: "demo".into(),
            path: PathBuf::from("/tmp/demo"),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Directory demo already exists. Please choose a different name."
        );
    }

    #[test]
    fn categories_follow_the_wrapped_error() {
        let validation: ScaffoldError = DomainError::EmptyProjectName.into();
        assert_eq!(validation.category(), ErrorCategory::Validation);

        let manifest: ScaffoldError = DomainError::InvalidManifest {
            reason: "x".into(),
        }
        .into();
        assert_eq!(manifest.category(), ErrorCategory::Internal);
    }
}
