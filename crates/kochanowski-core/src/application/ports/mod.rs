//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `kochanowski-adapters` and the
//! CLI implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory and file operations
//!   - `CommandRunner`: `npm` and friends
//!   - `NamePrompt`: interactive project-name question
//!   - `Progress`: step-by-step reporting

pub mod output;

pub use output::{CommandRunner, Filesystem, NamePrompt, NoProgress, Progress};

#[cfg(test)]
pub use output::{MockCommandRunner, MockFilesystem};
