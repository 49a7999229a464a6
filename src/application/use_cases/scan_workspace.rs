use crate::application::dto::{RepositoryFailure, WorkspaceReport};
use crate::ports::inbound::RepositoryProcessingPort;
use crate::ports::outbound::{ProgressReporter, RepositoryHost};
use crate::shared::Result;

/// ScanWorkspaceUseCase - drives repository processing across a workspace
///
/// Repositories are processed sequentially in API order. A failure is
/// reported and recorded, and the scan moves on; only a failed listing
/// aborts the run.
pub struct ScanWorkspaceUseCase<H, P, PR> {
    repository_host: H,
    processor: P,
    progress_reporter: PR,
    workspace: String,
}

impl<H, P, PR> ScanWorkspaceUseCase<H, P, PR>
where
    H: RepositoryHost,
    P: RepositoryProcessingPort,
    PR: ProgressReporter,
{
    pub fn new(
        repository_host: H,
        processor: P,
        progress_reporter: PR,
        workspace: impl Into<String>,
    ) -> Self {
        Self {
            repository_host,
            processor,
            progress_reporter,
            workspace: workspace.into(),
        }
    }

    /// Lists the workspace and processes every repository
    ///
    /// # Errors
    /// Returns an error only if the repository listing fails
    pub fn execute(&self) -> Result<WorkspaceReport> {
        let repositories = self.repository_host.list_repositories(&self.workspace)?;
        let total = repositories.len();

        self.progress_reporter.report(&format!(
            "📦 Analyzing all {} repositories in workspace {}",
            total, self.workspace
        ));

        let mut report = WorkspaceReport::default();
        for (index, repository) in repositories.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(repository.name()));

            match self.processor.process(repository) {
                Ok(outcome) => report.succeeded.push(outcome),
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "❌ Error while processing repository {}:\n{:#}",
                        repository.name(),
                        e
                    ));
                    report.failed.push(RepositoryFailure {
                        repository: repository.name().to_string(),
                        error: format!("{:#}", e),
                    });
                }
            }
        }

        self.progress_reporter.report_completion(&report.summary());
        Ok(report)
    }
}
