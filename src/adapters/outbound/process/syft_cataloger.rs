use crate::ports::outbound::{CatalogOutput, CatalogRequest, SbomCataloger};
use crate::sbom_harvest::domain::RepositoryName;
use crate::shared::error::HarvestError;
use crate::shared::Result;
use std::ffi::OsString;
use std::process::Command;

/// SyftCataloger adapter invoking the Syft command line
///
/// The CycloneDX JSON document is written by Syft itself through
/// `--output cyclonedx-json=<path>`.
pub struct SyftCataloger {
    program: String,
    scope: String,
}

impl SyftCataloger {
    pub fn new(program: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            scope: scope.into(),
        }
    }

    /// Arguments for one invocation, in the order Syft expects them
    fn build_args(&self, request: CatalogRequest<'_>) -> Vec<OsString> {
        let mut output_spec = OsString::from("cyclonedx-json=");
        output_spec.push(request.output_path);

        let mut args = vec![
            request.source_dir.as_os_str().to_os_string(),
            OsString::from("--output"),
            output_spec,
        ];
        if let Some(selection) = request.selection {
            args.push(OsString::from("--select-catalogers"));
            args.push(OsString::from(selection));
        }
        args.push(OsString::from("--scope"));
        args.push(OsString::from(&self.scope));
        args
    }
}

impl SbomCataloger for SyftCataloger {
    fn catalog(
        &self,
        repository: &RepositoryName,
        request: CatalogRequest<'_>,
    ) -> Result<CatalogOutput> {
        let output = Command::new(&self.program)
            .args(self.build_args(request))
            .output()
            .map_err(|e| {
                anyhow::anyhow!(
                    "Failed to run cataloger '{}' for repository {}: {}",
                    self.program,
                    repository,
                    e
                )
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(HarvestError::CatalogerFailed {
                repository: repository.to_string(),
                exit_code: output.status.code(),
                stdout,
                stderr,
            }
            .into());
        }

        Ok(CatalogOutput { stdout, stderr })
    }
}
