use super::RepositoryOutcome;

/// A repository that had to be abandoned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryFailure {
    pub repository: String,
    pub error: String,
}

/// WorkspaceReport - summary of one workspace scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceReport {
    pub succeeded: Vec<RepositoryOutcome>,
    pub failed: Vec<RepositoryFailure>,
}

impl WorkspaceReport {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Processed {} repositories: {} succeeded, {} failed",
            self.total(),
            self.succeeded.len(),
            self.failed.len()
        );
        for failure in &self.failed {
            summary.push_str(&format!("\n   - {}", failure.repository));
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_failures() {
        let report = WorkspaceReport {
            succeeded: vec![RepositoryOutcome::new("api")],
            failed: vec![RepositoryFailure {
                repository: "web".to_string(),
                error: "clone failed".to_string(),
            }],
        };
        assert_eq!(report.total(), 2);
        assert_eq!(
            report.summary(),
            "Processed 2 repositories: 1 succeeded, 1 failed\n   - web"
        );
    }

    #[test]
    fn test_empty_report() {
        let report = WorkspaceReport::default();
        assert_eq!(report.summary(), "Processed 0 repositories: 0 succeeded, 0 failed");
    }
}
