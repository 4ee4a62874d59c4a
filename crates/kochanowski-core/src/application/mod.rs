//! Application layer for create-kochanowski.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService) and its steps
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences the domain layer but holds no rules of
//! its own. Name and manifest rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ManifestEditor, PROJECT_NAME_QUESTION, ScaffoldEvent, ScaffoldReport, ScaffoldService,
    ScaffoldSettings, TemplateWriter,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, Filesystem, NamePrompt, NoProgress, Progress};

pub use error::{ApplicationError, CommandFailure};
