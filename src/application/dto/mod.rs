/// Data Transfer Objects for application layer
///
/// DTOs carry configuration into the use cases and results back out to
/// the CLI, keeping the domain layer isolated.
mod harvest_config;
mod repository_outcome;
mod workspace_report;

pub use harvest_config::{
    HarvestConfig, DEFAULT_API_BASE_URL, DEFAULT_CATALOGER_PROGRAM, DEFAULT_CATALOGER_SCOPE,
    DEFAULT_GIT_PROGRAM, DEFAULT_MAX_SCAN_DEPTH, DEFAULT_OUTPUT_DIR,
};
pub use repository_outcome::{RepositoryOutcome, StepOutcome};
pub use workspace_report::{RepositoryFailure, WorkspaceReport};
