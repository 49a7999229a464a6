use crate::shared::error::HarvestError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum SBOM document size accepted for formatting and NOTICE derivation (256 MB).
/// Catalogers emit large documents for monorepos, so this is well above typical output.
pub const MAX_DOCUMENT_SIZE: u64 = 256 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so a symlink planted in the output directory
/// is rejected instead of followed.
///
/// # Errors
/// Returns an error if the path doesn't exist, is a symbolic link,
/// or is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| HarvestError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(HarvestError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Remove the link from the output directory".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_DOCUMENT_SIZE)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(HarvestError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Check that the cataloger produced the expected document".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Validates that a value can be embedded in a single file name component.
///
/// Repository names end up in `sbom_<name>_<ts>.json`, so anything that
/// could escape the output directory is rejected.
pub fn validate_file_name_component(value: &str, description: &str) -> Result<()> {
    if value.is_empty() {
        anyhow::bail!("{} cannot be empty", description);
    }

    if value.len() > 255 {
        anyhow::bail!(
            "{} is too long ({} bytes). Maximum allowed: 255 bytes",
            description,
            value.len()
        );
    }

    if value.contains('/') || value.contains('\\') {
        anyhow::bail!(
            "Security: {} contains path separators which are not allowed",
            description
        );
    }

    if value == "." || value == ".." {
        anyhow::bail!("Security: {} cannot be '{}'", description, value);
    }

    if value.chars().any(|c| c.is_control()) {
        anyhow::bail!("Security: {} contains control characters", description);
    }

    Ok(())
}
