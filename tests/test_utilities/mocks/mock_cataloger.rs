use bitbucket_sbom::prelude::*;
use bitbucket_sbom::shared::error::HarvestError;
use std::collections::HashSet;
use std::fs;
use std::sync::{Arc, Mutex};

/// One recorded cataloger call
#[derive(Debug, Clone)]
pub struct CatalogCall {
    pub repository: String,
    pub selection: Option<String>,
    pub source_existed: bool,
}

/// Mock SbomCataloger writing a canned CycloneDX document
#[derive(Clone)]
pub struct MockCataloger {
    document: String,
    failing: HashSet<String>,
    pub calls: Arc<Mutex<Vec<CatalogCall>>>,
}

impl MockCataloger {
    pub fn new(document: &str) -> Self {
        Self {
            document: document.to_string(),
            failing: HashSet::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Makes the cataloger exit with status 1 for `repository`
    pub fn failing_for(mut self, repository: &str) -> Self {
        self.failing.insert(repository.to_string());
        self
    }

    pub fn get_calls(&self) -> Vec<CatalogCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl SbomCataloger for MockCataloger {
    fn catalog(
        &self,
        repository: &RepositoryName,
        request: CatalogRequest<'_>,
    ) -> Result<CatalogOutput> {
        self.calls.lock().unwrap().push(CatalogCall {
            repository: repository.to_string(),
            selection: request.selection.map(str::to_string),
            source_existed: request.source_dir.is_dir(),
        });

        if self.failing.contains(repository.as_str()) {
            return Err(HarvestError::CatalogerFailed {
                repository: repository.to_string(),
                exit_code: Some(1),
                stdout: String::new(),
                stderr: "could not determine source".to_string(),
            }
            .into());
        }

        fs::write(request.output_path, &self.document)?;
        Ok(CatalogOutput {
            stdout: " ✔ Cataloged contents".to_string(),
            stderr: String::new(),
        })
    }
}
