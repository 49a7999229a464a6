pub mod artifact;
pub mod credentials;
pub mod ecosystem;
pub mod generation_mode;
pub mod repository;

pub use artifact::{ArtifactKind, ArtifactTimestamp};
pub use credentials::Credentials;
pub use ecosystem::{EcosystemTag, ProjectHint};
pub use generation_mode::GenerationMode;
pub use repository::{CloneLink, RepositoryDescriptor, RepositoryName};
