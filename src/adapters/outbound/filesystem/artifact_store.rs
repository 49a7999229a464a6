use crate::ports::outbound::ArtifactStore;
use crate::sbom_harvest::domain::{ArtifactKind, ArtifactTimestamp, RepositoryName};
use crate::sbom_harvest::policies::SbomReusePolicy;
use crate::shared::error::HarvestError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemArtifactStore adapter keeping SBOM and NOTICE files in one flat directory
///
/// Artifacts are never deleted; every run adds timestamped files.
pub struct FileSystemArtifactStore {
    output_dir: PathBuf,
}

impl FileSystemArtifactStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Security validation before writing:
    /// - Reject if the target exists and is a symlink
    fn validate_output_security(path: &Path) -> Result<()> {
        if let Ok(metadata) = fs::symlink_metadata(path) {
            if metadata.is_symlink() {
                return Err(HarvestError::FileWriteError {
                    path: path.to_path_buf(),
                    details: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl ArtifactStore for FileSystemArtifactStore {
    fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).map_err(|e| HarvestError::FileWriteError {
            path: self.output_dir.clone(),
            details: format!("Failed to create output directory: {}", e),
        })?;
        Ok(())
    }

    fn artifact_path(
        &self,
        kind: ArtifactKind,
        repository: &RepositoryName,
        at: &ArtifactTimestamp,
    ) -> PathBuf {
        self.output_dir.join(kind.file_name(repository, at))
    }

    fn find_latest_sbom(&self, repository: &RepositoryName) -> Result<Option<PathBuf>> {
        let entries = fs::read_dir(&self.output_dir).map_err(|e| HarvestError::FileReadError {
            path: self.output_dir.clone(),
            details: format!("Failed to list output directory: {}", e),
        })?;

        let file_names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();

        Ok(
            SbomReusePolicy::latest_sbom(repository, file_names.iter().map(String::as_str))
                .map(|name| self.output_dir.join(name)),
        )
    }

    fn read_document(&self, path: &Path) -> Result<String> {
        validate_regular_file(path, "SBOM document")?;
        let content = fs::read_to_string(path).map_err(|e| HarvestError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(content)
    }

    fn write_document(&self, path: &Path, content: &str) -> Result<()> {
        Self::validate_output_security(path)?;
        fs::write(path, content).map_err(|e| HarvestError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}
