use crate::sbom_harvest::domain::{ArtifactKind, ArtifactTimestamp, RepositoryName};
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ArtifactStore port for the output directory holding SBOM and NOTICE files
pub trait ArtifactStore {
    /// Makes sure the output directory exists and is usable
    fn prepare(&self) -> Result<()>;

    /// Path of the artifact of `kind` for `repository` at `at`
    fn artifact_path(
        &self,
        kind: ArtifactKind,
        repository: &RepositoryName,
        at: &ArtifactTimestamp,
    ) -> PathBuf;

    /// Latest existing SBOM for `repository`, if any
    fn find_latest_sbom(&self, repository: &RepositoryName) -> Result<Option<PathBuf>>;

    /// Reads a document from the output directory
    fn read_document(&self, path: &Path) -> Result<String>;

    /// Writes (or replaces) a document in the output directory
    fn write_document(&self, path: &Path, content: &str) -> Result<()>;
}

impl<T: ArtifactStore + ?Sized> ArtifactStore for &T {
    fn prepare(&self) -> Result<()> {
        (**self).prepare()
    }

    fn artifact_path(
        &self,
        kind: ArtifactKind,
        repository: &RepositoryName,
        at: &ArtifactTimestamp,
    ) -> PathBuf {
        (**self).artifact_path(kind, repository, at)
    }

    fn find_latest_sbom(&self, repository: &RepositoryName) -> Result<Option<PathBuf>> {
        (**self).find_latest_sbom(repository)
    }

    fn read_document(&self, path: &Path) -> Result<String> {
        (**self).read_document(path)
    }

    fn write_document(&self, path: &Path, content: &str) -> Result<()> {
        (**self).write_document(path, content)
    }
}
