//! Writes the sample program into a project directory.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{SAMPLE_FILE_NAME, SAMPLE_SOURCE},
    error::ScaffoldResult,
};

/// Materializes `indeks.kpl`.
pub struct TemplateWriter<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> TemplateWriter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Write the sample program to `<target_dir>/indeks.kpl`, replacing any
    /// existing file. Returns the path written.
    #[instrument(skip_all, fields(target_dir = %target_dir.display()))]
    pub fn write(&self, target_dir: &Path) -> ScaffoldResult<PathBuf> {
        let path = target_dir.join(SAMPLE_FILE_NAME);
        self.filesystem.write_file(&path, SAMPLE_SOURCE)?;
        debug!(bytes = SAMPLE_SOURCE.len(), "Sample program written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use mockall::predicate::eq;

    #[test]
    fn writes_fixed_content_to_fixed_name() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file()
            .with(eq(PathBuf::from("/work/demo/indeks.kpl")), eq(SAMPLE_SOURCE))
            .times(1)
            .returning(|_, _| Ok(()));

        let written = TemplateWriter::new(&fs).write(Path::new("/work/demo")).unwrap();
        assert_eq!(written, PathBuf::from("/work/demo/indeks.kpl"));
    }
}
