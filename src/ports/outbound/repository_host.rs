use crate::sbom_harvest::domain::RepositoryDescriptor;
use crate::shared::Result;

/// RepositoryHost port for listing the repositories of a workspace
///
/// This port abstracts the source-control hosting API.
pub trait RepositoryHost {
    /// Lists the repositories of `workspace`
    ///
    /// Only the first page returned by the API is listed.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The request fails
    /// - The API answers with a non-success status
    /// - The response body cannot be parsed
    fn list_repositories(&self, workspace: &str) -> Result<Vec<RepositoryDescriptor>>;
}
