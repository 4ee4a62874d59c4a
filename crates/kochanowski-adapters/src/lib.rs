//! Infrastructure adapters for create-kochanowski.
//!
//! This crate implements the ports defined in
//! `kochanowski_core::application::ports`. It contains every filesystem,
//! process, and terminal operation the core delegates.

pub mod filesystem;
pub mod prompt;
pub mod runner;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompt::LinePrompt;
pub use runner::{CommandHandle, ProcessRunner, RecordingRunner};
