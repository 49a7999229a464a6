use crate::sbom_harvest::domain::RepositoryName;
use crate::sbom_harvest::services::CloneUrl;
use crate::shared::Result;
use std::path::Path;

/// Console output of a successful clone, with credentials already redacted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloneOutput {
    pub stdout: String,
    pub stderr: String,
}

/// SourceCloner port for fetching a full working copy of a repository
pub trait SourceCloner {
    /// Clones `url` into `destination`, which exists and is empty
    ///
    /// # Errors
    /// Returns an error if the clone command cannot be started or exits
    /// with a non-zero status
    fn clone_repository(
        &self,
        repository: &RepositoryName,
        url: &CloneUrl,
        destination: &Path,
    ) -> Result<CloneOutput>;
}
