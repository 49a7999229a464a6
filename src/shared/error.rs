use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Individual repository failures never change the exit code; only
/// problems that prevent the run from starting do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The workspace was processed (some repositories may have been skipped)
    Success = 0,
    /// Missing configuration or the repository listing failed
    Failure = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Failure => write!(f, "Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for workspace SBOM harvesting.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Missing required configuration: {}\n\n💡 Hint: Set BITBUCKET_USERNAME, BITBUCKET_APP_PASSWORD and BITBUCKET_WORKSPACE (or pass --username, --app-password and --workspace)", .missing.join(", "))]
    MissingConfiguration { missing: Vec<String> },

    #[error("Failed to list repositories for workspace '{workspace}'{}\nDetails: {details}\n\n💡 Hint: Check the workspace name and that the app password has repository read access", .status.map(|s| format!(" (HTTP {})", s)).unwrap_or_default())]
    RepositoryListing {
        workspace: String,
        status: Option<u16>,
        details: String,
    },

    #[error("Invalid repository '{name}'\nReason: {reason}")]
    InvalidRepository { name: String, reason: String },

    #[error("Invalid clone URL: {url}\nReason: {reason}")]
    InvalidCloneUrl { url: String, reason: String },

    #[error("Failed to clone repository '{repository}'\nDetails: {details}\n\n💡 Hint: Make sure the app password has repository read access")]
    GitClone { repository: String, details: String },

    #[error("Cataloger failed for repository '{repository}'\nExit code: {}\nOutput: {stdout}\nError: {stderr}", .exit_code.map(|c| c.to_string()).unwrap_or_else(|| "N/A".to_string()))]
    CatalogerFailed {
        repository: String,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
