//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use kochanowski_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ScaffoldResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle while the service owns
/// another.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Create a filesystem where `root` and all its ancestors exist.
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        let fs = Self::new();
        if let Ok(mut inner) = fs.inner.write() {
            let mut current = PathBuf::new();
            for component in root.as_ref().components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        fs
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// List all directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn lock_error(path: &Path) -> ApplicationError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: "memory filesystem lock poisoned".into(),
        }
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn create_dir(&self, path: &Path) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error(path))?;

        if inner.directories.contains(path) || inner.files.contains_key(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to create directory: already exists".into(),
            }
            .into());
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Failed to create directory: parent does not exist".into(),
                }
                .into());
            }
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String> {
        let inner = self.inner.read().map_err(|_| Self::lock_error(path))?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to read file: not found".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error(path))?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
