use crate::ports::outbound::{CloneOutput, SourceCloner};
use crate::sbom_harvest::domain::RepositoryName;
use crate::sbom_harvest::services::CloneUrl;
use crate::shared::error::HarvestError;
use crate::shared::Result;
use std::path::Path;
use std::process::Command;

/// GitCliCloner adapter running `git clone <url> <destination>`
///
/// Interactive credential prompts are disabled so a rejected password
/// fails the clone instead of hanging the run.
pub struct GitCliCloner {
    program: String,
}

impl GitCliCloner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

/// Replaces the authenticated URL in tool output with its redacted form
fn scrub(output: &str, url: &CloneUrl) -> String {
    output.replace(url.expose(), url.redacted())
}

impl SourceCloner for GitCliCloner {
    fn clone_repository(
        &self,
        repository: &RepositoryName,
        url: &CloneUrl,
        destination: &Path,
    ) -> Result<CloneOutput> {
        let output = Command::new(&self.program)
            .arg("clone")
            .arg(url.expose())
            .arg(destination)
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|e| HarvestError::GitClone {
                repository: repository.to_string(),
                details: format!("Failed to run '{}': {}", self.program, e),
            })?;

        if !output.status.success() {
            let stderr = scrub(&String::from_utf8_lossy(&output.stderr), url);
            let details = match output.status.code() {
                Some(code) => format!("git exited with status {}: {}", code, stderr.trim()),
                None => format!("git was terminated by a signal: {}", stderr.trim()),
            };
            return Err(HarvestError::GitClone {
                repository: repository.to_string(),
                details,
            }
            .into());
        }

        Ok(CloneOutput {
            stdout: scrub(&String::from_utf8_lossy(&output.stdout), url),
            stderr: scrub(&String::from_utf8_lossy(&output.stderr), url),
        })
    }
}
