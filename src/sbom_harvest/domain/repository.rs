use crate::shared::security::validate_file_name_component;
use crate::shared::Result;

/// Longest artifact decoration: `NOTICE_` + `_YYYYMMDD_HHMMSS` + `.txt`
const ARTIFACT_NAME_OVERHEAD: usize = 27;

/// Longest repository name whose artifact names still fit in 255 bytes
pub const MAX_REPOSITORY_NAME_LEN: usize = 255 - ARTIFACT_NAME_OVERHEAD;

/// NewType wrapper for a repository name with validation
///
/// The name is embedded in artifact file names, so it must be a single
/// safe path component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub fn new(name: String) -> Result<Self> {
        validate_file_name_component(&name, "Repository name")?;
        if name.len() > MAX_REPOSITORY_NAME_LEN {
            anyhow::bail!(
                "Repository name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_REPOSITORY_NAME_LEN
            );
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named clone endpoint as exposed by the hosting API (`https`, `ssh`, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneLink {
    pub name: String,
    pub href: String,
}

impl CloneLink {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }
}

/// RepositoryDescriptor - one repository of the workspace listing
///
/// The name is kept raw here; it is validated when processing starts so a
/// single bad name fails only its own repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryDescriptor {
    name: String,
    clone_links: Vec<CloneLink>,
}

impl RepositoryDescriptor {
    pub fn new(name: impl Into<String>, clone_links: Vec<CloneLink>) -> Self {
        Self {
            name: name.into(),
            clone_links,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clone_links(&self) -> &[CloneLink] {
        &self.clone_links
    }

    /// Returns the validated repository name
    pub fn validated_name(&self) -> Result<RepositoryName> {
        RepositoryName::new(self.name.clone())
    }

    /// The clone link named `https`, if the API exposed one
    pub fn https_link(&self) -> Option<&CloneLink> {
        self.clone_links.iter().find(|link| link.name == "https")
    }

    /// The first clone link in API order
    pub fn first_link(&self) -> Option<&CloneLink> {
        self.clone_links.first()
    }
}
