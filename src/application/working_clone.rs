use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;
use std::path::Path;
use tempfile::TempDir;

const CLONE_DIR_PREFIX: &str = "sbom-clone-";

/// WorkingClone - the scoped temporary directory holding one checkout
///
/// The directory is removed by `release`, or by the `TempDir` destructor
/// if the owner unwinds before getting there.
#[derive(Debug)]
pub struct WorkingClone {
    dir: TempDir,
}

impl WorkingClone {
    /// Creates a fresh empty directory under `parent` (or the system temp dir)
    pub fn create(parent: Option<&Path>) -> Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(CLONE_DIR_PREFIX);
        let dir = match parent {
            Some(parent) => builder.tempdir_in(parent),
            None => builder.tempdir(),
        }
        .map_err(|e| anyhow::anyhow!("Failed to create temporary clone directory: {}", e))?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Removes the directory, reporting (not propagating) removal failures
    pub fn release<PR: ProgressReporter>(self, reporter: &PR) {
        let path = self.dir.path().to_path_buf();
        if let Err(e) = self.dir.close() {
            reporter.report_error(&format!(
                "⚠️  Warning: Failed to remove temporary clone directory {}: {}",
                path.display(),
                e
            ));
        }
    }
}
