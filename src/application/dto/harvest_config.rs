use crate::sbom_harvest::domain::{Credentials, GenerationMode};
use crate::shared::error::HarvestError;
use crate::shared::Result;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "/output";
pub const DEFAULT_API_BASE_URL: &str = "https://api.bitbucket.org/2.0";
pub const DEFAULT_GIT_PROGRAM: &str = "git";
pub const DEFAULT_CATALOGER_PROGRAM: &str = "syft";
pub const DEFAULT_CATALOGER_SCOPE: &str = "all-layers";
pub const DEFAULT_MAX_SCAN_DEPTH: usize = 64;

/// HarvestConfig - immutable run configuration
///
/// Built once at startup from CLI arguments, environment and the optional
/// config file, then handed to every adapter and use case constructor.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    pub credentials: Credentials,
    pub workspace: String,
    pub mode: GenerationMode,
    /// Directory receiving `sbom_*.json` and `NOTICE_*.txt`
    pub output_dir: PathBuf,
    /// Parent for temporary clones; `None` uses the system temp directory
    pub work_dir: Option<PathBuf>,
    pub api_base_url: String,
    pub git_program: String,
    pub cataloger_program: String,
    /// Value passed to the cataloger's `--scope` flag
    pub cataloger_scope: String,
    /// Depth bound for the language detection walk
    pub max_scan_depth: usize,
}

impl HarvestConfig {
    /// Creates a configuration with defaults for everything but identity
    pub fn new(credentials: Credentials, workspace: impl Into<String>) -> Self {
        Self {
            credentials,
            workspace: workspace.into(),
            mode: GenerationMode::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            work_dir: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            git_program: DEFAULT_GIT_PROGRAM.to_string(),
            cataloger_program: DEFAULT_CATALOGER_PROGRAM.to_string(),
            cataloger_scope: DEFAULT_CATALOGER_SCOPE.to_string(),
            max_scan_depth: DEFAULT_MAX_SCAN_DEPTH,
        }
    }

    /// Checks values that would otherwise only fail deep inside a run
    pub fn validate(&self) -> Result<()> {
        let checks = [
            (self.workspace.trim().is_empty(), "workspace must not be empty"),
            (
                self.api_base_url.trim().is_empty(),
                "API base URL must not be empty",
            ),
            (self.git_program.trim().is_empty(), "git program must not be empty"),
            (
                self.cataloger_program.trim().is_empty(),
                "cataloger program must not be empty",
            ),
            (
                self.cataloger_scope.trim().is_empty(),
                "cataloger scope must not be empty",
            ),
            (self.max_scan_depth == 0, "max scan depth must be at least 1"),
        ];

        if let Some((_, message)) = checks.iter().find(|(failed, _)| *failed) {
            return Err(HarvestError::Validation {
                message: message.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> HarvestConfig {
        HarvestConfig::new(Credentials::new("ci-bot", "secret"), "acme")
    }

    #[test]
    fn test_defaults() {
        let config = config();
        assert_eq!(config.mode, GenerationMode::SbomOnly);
        assert_eq!(config.output_dir, PathBuf::from("/output"));
        assert_eq!(config.api_base_url, "https://api.bitbucket.org/2.0");
        assert_eq!(config.git_program, "git");
        assert_eq!(config.cataloger_program, "syft");
        assert_eq!(config.cataloger_scope, "all-layers");
        assert!(config.work_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_workspace() {
        let mut config = config();
        config.workspace = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("workspace must not be empty"));
    }

    #[test]
    fn test_validate_rejects_zero_depth() {
        let mut config = config();
        config.max_scan_depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let debug = format!("{:?}", config());
        assert!(!debug.contains("secret\""));
        assert!(debug.contains("<redacted>"));
    }
}
