use bitbucket_sbom::prelude::*;

/// Mock RepositoryHost serving a fixed repository list
pub struct MockRepositoryHost {
    repositories: Vec<RepositoryDescriptor>,
}

impl MockRepositoryHost {
    pub fn new() -> Self {
        Self {
            repositories: Vec::new(),
        }
    }

    /// Adds a repository with a single https clone link in workspace `acme`
    pub fn with_repository(self, name: &str) -> Self {
        let href = format!("https://someone@bitbucket.org/acme/{}.git", name);
        self.with_links(name, vec![CloneLink::new("https", href)])
    }

    pub fn with_links(mut self, name: &str, links: Vec<CloneLink>) -> Self {
        self.repositories
            .push(RepositoryDescriptor::new(name, links));
        self
    }
}

impl RepositoryHost for MockRepositoryHost {
    fn list_repositories(&self, _workspace: &str) -> Result<Vec<RepositoryDescriptor>> {
        Ok(self.repositories.clone())
    }
}
