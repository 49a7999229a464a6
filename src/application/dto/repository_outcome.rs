use crate::sbom_harvest::domain::EcosystemTag;
use std::path::PathBuf;

/// Result of a best-effort step (formatting, NOTICE synthesis)
///
/// Failures carry a diagnostic and never abort the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome<T> {
    Completed(T),
    Failed { diagnostic: String },
}

impl<T> StepOutcome<T> {
    pub fn failed(diagnostic: impl Into<String>) -> Self {
        StepOutcome::Failed {
            diagnostic: diagnostic.into(),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, StepOutcome::Completed(_))
    }

    pub fn completed(self) -> Option<T> {
        match self {
            StepOutcome::Completed(value) => Some(value),
            StepOutcome::Failed { .. } => None,
        }
    }
}

/// RepositoryOutcome - what processing one repository produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOutcome {
    pub repository: String,
    /// SBOM written in this run, or the existing one that was reused
    pub sbom_path: Option<PathBuf>,
    pub reused_sbom: bool,
    /// Whether the SBOM was rewritten in canonical form
    pub sbom_formatted: bool,
    pub notice_path: Option<PathBuf>,
    /// Ecosystems the cataloger was scoped to (empty for unscoped or reused runs)
    pub ecosystems: Vec<EcosystemTag>,
}

impl RepositoryOutcome {
    pub fn new(repository: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            sbom_path: None,
            reused_sbom: false,
            sbom_formatted: false,
            notice_path: None,
            ecosystems: Vec::new(),
        }
    }
}
