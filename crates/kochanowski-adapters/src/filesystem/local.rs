//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use kochanowski_core::{application::ports::Filesystem, error::ScaffoldResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir(&self, path: &Path) -> ScaffoldResult<()> {
        std::fs::create_dir(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> kochanowski_core::error::ScaffoldError {
    use kochanowski_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
