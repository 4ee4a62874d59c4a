//! Core domain layer for create-kochanowski.
//!
//! Pure values and rules: no filesystem, no processes, no prompts. All I/O
//! goes through the ports in `crate::application::ports`.

pub mod error;
pub mod manifest;
pub mod plan;
pub mod project_name;
pub mod sample;

pub use error::{DomainError, ErrorCategory};
pub use manifest::{MANIFEST_FILE_NAME, Manifest};
pub use plan::{CommandInvocation, CommandStep, ScaffoldPlan};
pub use project_name::{NamePolicy, ProjectName};
pub use sample::{SAMPLE_FILE_NAME, SAMPLE_SOURCE};
