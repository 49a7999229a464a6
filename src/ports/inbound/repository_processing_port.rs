use crate::application::dto::RepositoryOutcome;
use crate::sbom_harvest::domain::RepositoryDescriptor;
use crate::shared::Result;

/// RepositoryProcessingPort - Inbound port for processing one repository
///
/// The workspace scan drives this port once per listed repository.
pub trait RepositoryProcessingPort {
    /// Produces the configured artifacts for `repository`
    ///
    /// # Errors
    /// Returns an error when the repository has to be abandoned: invalid
    /// name or clone URL, clone failure, cataloger failure, or an unusable
    /// output directory. Formatting and NOTICE failures are not errors.
    fn process(&self, repository: &RepositoryDescriptor) -> Result<RepositoryOutcome>;
}

impl<T: RepositoryProcessingPort + ?Sized> RepositoryProcessingPort for &T {
    fn process(&self, repository: &RepositoryDescriptor) -> Result<RepositoryOutcome> {
        (**self).process(repository)
    }
}
