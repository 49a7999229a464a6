use bitbucket_sbom::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// One recorded clone call
#[derive(Debug, Clone)]
pub struct CloneCall {
    pub repository: String,
    pub url: String,
    pub destination: PathBuf,
}

/// Mock SourceCloner that materializes a fixed file tree and reports
/// git's usual progress line on stderr
#[derive(Default, Clone)]
pub struct MockSourceCloner {
    files: Vec<(String, String)>,
    failing: HashSet<String>,
    pub calls: Arc<Mutex<Vec<CloneCall>>>,
}

impl MockSourceCloner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file (relative path, content) to every checkout
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.push((path.to_string(), content.to_string()));
        self
    }

    /// Makes the clone of `repository` fail after partially writing the tree
    pub fn failing_for(mut self, repository: &str) -> Self {
        self.failing.insert(repository.to_string());
        self
    }

    pub fn get_calls(&self) -> Vec<CloneCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl SourceCloner for MockSourceCloner {
    fn clone_repository(
        &self,
        repository: &RepositoryName,
        url: &CloneUrl,
        destination: &Path,
    ) -> Result<CloneOutput> {
        self.calls.lock().unwrap().push(CloneCall {
            repository: repository.to_string(),
            url: url.expose().to_string(),
            destination: destination.to_path_buf(),
        });

        for (path, content) in &self.files {
            let target = destination.join(path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(target, content)?;
        }

        if self.failing.contains(repository.as_str()) {
            anyhow::bail!("Failed to clone repository '{}': remote hung up", repository);
        }
        Ok(CloneOutput {
            stdout: String::new(),
            stderr: format!("Cloning into '{}'...", destination.display()),
        })
    }
}
