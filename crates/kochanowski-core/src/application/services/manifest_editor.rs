//! Read-modify-write of `package.json` scripts.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::Manifest,
    error::ScaffoldResult,
};

const START_SCRIPT: &str = "start";

/// Edits the `scripts` section of a package manifest.
pub struct ManifestEditor<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> ManifestEditor<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Set `scripts.start` to `command`. Last write wins.
    pub fn register_start_command(&self, manifest_path: &Path, command: &str) -> ScaffoldResult<()> {
        self.register_script(manifest_path, START_SCRIPT, command)
    }

    /// Set `scripts.<name>` to `command`, creating `scripts` if needed.
    #[instrument(skip_all, fields(manifest = %manifest_path.display(), script = name))]
    pub fn register_script(
        &self,
        manifest_path: &Path,
        name: &str,
        command: &str,
    ) -> ScaffoldResult<()> {
        let text = self.filesystem.read_to_string(manifest_path)?;
        let mut manifest = Manifest::parse(&text)?;

        if let Some(previous) = manifest.set_script(name, command)? {
            debug!(%previous, "Replacing existing script");
        }

        let updated = manifest.to_pretty_string()?;
        self.filesystem.write_file(manifest_path, &updated)?;

        info!(command, "Script registered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::DomainError;
    use crate::error::ScaffoldError;

    /// Mock filesystem backed by a single in-memory manifest.
    fn filesystem_with(initial: &str) -> (MockFilesystem, Arc<Mutex<String>>) {
        let stored = Arc::new(Mutex::new(initial.to_owned()));
        let mut fs = MockFilesystem::new();

        let read = Arc::clone(&stored);
        fs.expect_read_to_string()
            .returning(move |_| Ok(read.lock().unwrap().clone()));

        let write = Arc::clone(&stored);
        fs.expect_write_file().returning(move |_, content| {
            *write.lock().unwrap() = content.to_owned();
            Ok(())
        });

        (fs, stored)
    }

    #[test]
    fn registers_start_script() {
        let (fs, stored) = filesystem_with(r#"{"name":"demo","scripts":{"test":"exit 1"}}"#);

        ManifestEditor::new(&fs)
            .register_start_command(Path::new("package.json"), "kochanowski indeks.kpl")
            .unwrap();

        let manifest = Manifest::parse(&stored.lock().unwrap()).unwrap();
        assert_eq!(manifest.script("start"), Some("kochanowski indeks.kpl"));
        assert_eq!(manifest.script("test"), Some("exit 1"));
    }

    #[test]
    fn registering_twice_matches_registering_once() {
        let (fs, stored) = filesystem_with(r#"{"name":"demo"}"#);
        let editor = ManifestEditor::new(&fs);
        let path = Path::new("package.json");

        editor.register_start_command(path, "kochanowski indeks.kpl").unwrap();
        let once = stored.lock().unwrap().clone();

        editor.register_start_command(path, "kochanowski indeks.kpl").unwrap();
        let twice = stored.lock().unwrap().clone();

        assert_eq!(once, twice);
    }

    #[test]
    fn unparseable_manifest_is_not_rewritten() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .returning(|_| Ok("{ not json".into()));
        fs.expect_write_file().never();

        let err = ManifestEditor::new(&fs)
            .register_start_command(Path::new("package.json"), "kochanowski indeks.kpl")
            .unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::Domain(DomainError::InvalidManifest { .. })
        ));
    }
}
