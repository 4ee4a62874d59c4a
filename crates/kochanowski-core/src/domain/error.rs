// ============================================================================
// domain/error.rs - DOMAIN RULE VIOLATIONS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the prompt re-checks the same input on every keystroke)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Project name cannot be empty")]
    EmptyProjectName,

    #[error("Invalid project name '{name}': {reason}")]
    UnsafeProjectName { name: String, reason: String },

    // ========================================================================
    // Manifest Errors
    // ========================================================================
    #[error("Invalid package manifest: {reason}")]
    InvalidManifest { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyProjectName => vec![
                "Type a name for the project directory".into(),
                "Example: create-kochanowski my-poem".into(),
            ],
            Self::UnsafeProjectName { name, reason } => vec![
                format!("'{}' was rejected: {}", name, reason),
                "Use letters, digits, hyphens, and underscores".into(),
                "Drop --strict-names to accept any non-empty name".into(),
            ],
            Self::InvalidManifest { reason } => vec![
                format!("package.json could not be updated: {}", reason),
                "Check that the package manager wrote a valid package.json".into(),
                "Add \"start\": \"kochanowski indeks.kpl\" to its scripts by hand".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyProjectName | Self::UnsafeProjectName { .. } => ErrorCategory::Validation,
            Self::InvalidManifest { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
