use crate::sbom_harvest::domain::RepositoryName;
use crate::shared::Result;
use std::path::Path;

/// Parameters of one cataloger invocation
#[derive(Debug, Clone, Copy)]
pub struct CatalogRequest<'a> {
    /// Directory to analyze
    pub source_dir: &'a Path,
    /// Where the CycloneDX JSON document is written
    pub output_path: &'a Path,
    /// Comma-separated catalogers to restrict the run to; `None` runs unscoped
    pub selection: Option<&'a str>,
}

/// Captured console output of a successful cataloger run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogOutput {
    pub stdout: String,
    pub stderr: String,
}

/// SbomCataloger port for the external software-composition-analysis tool
///
/// The SBOM itself is written to `output_path` as a side effect; stdout
/// is only diagnostic.
pub trait SbomCataloger {
    /// # Errors
    /// Returns `HarvestError::CatalogerFailed` (with exit code, stdout and
    /// stderr) on a non-zero exit, or an error if the tool cannot be started
    fn catalog(&self, repository: &RepositoryName, request: CatalogRequest<'_>)
        -> Result<CatalogOutput>;
}
