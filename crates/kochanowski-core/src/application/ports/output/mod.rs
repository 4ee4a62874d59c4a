//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the scaffold workflow needs from the outside
//! world. The `kochanowski-adapters` crate provides implementations; the CLI
//! provides the interactive prompt and progress display.

use std::path::Path;

use crate::application::error::CommandFailure;
use crate::application::services::ScaffoldEvent;
use crate::domain::{CommandInvocation, NamePolicy, ProjectName};
use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `kochanowski_adapters::filesystem::LocalFilesystem` (production)
/// - `kochanowski_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Every path is explicit; implementations never consult the process
/// working directory on their own.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a single directory. The parent must already exist and the
    /// directory itself must not.
    fn create_dir(&self, path: &Path) -> ScaffoldResult<()>;

    /// Read a UTF-8 file.
    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String>;

    /// Write content to a file, replacing anything already there.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;
}

/// Port for running external programs.
///
/// Implemented by:
/// - `kochanowski_adapters::runner::ProcessRunner` (production)
/// - `kochanowski_adapters::runner::RecordingRunner` (testing)
///
/// One attempt, no timeout, streams inherited. Anything other than a
/// successful exit is a [`CommandFailure`].
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    fn run(&self, invocation: &CommandInvocation) -> Result<(), CommandFailure>;
}

/// Port for asking the user for a project name.
///
/// Implementations re-ask on invalid input and only return once the answer
/// passes `policy`.
pub trait NamePrompt {
    fn ask(&self, question: &str, policy: NamePolicy) -> ScaffoldResult<ProjectName>;
}

/// Port for reporting progress while a scaffold runs.
pub trait Progress {
    fn on_event(&self, event: &ScaffoldEvent);
}

/// Progress sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn on_event(&self, _event: &ScaffoldEvent) {}
}
