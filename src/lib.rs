//! bitbucket-sbom - SBOM harvesting for Bitbucket workspaces
//!
//! This library lists the repositories of a Bitbucket workspace, clones each
//! one into a temporary directory, runs the Syft cataloger to produce a
//! CycloneDX JSON SBOM, and optionally derives a plain-text NOTICE file from
//! it. It follows a hexagonal (ports and adapters) layout.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_harvest`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bitbucket_sbom::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let config = HarvestConfig::new(Credentials::new("ci-bot", "app-password"), "acme");
//! let reporter = StderrProgressReporter::new();
//!
//! let host = BitbucketRepositoryHost::new(
//!     config.api_base_url.as_str(),
//!     config.credentials.clone(),
//!     &reporter,
//! )?;
//! let processor = ProcessRepositoryUseCase::new(
//!     &config,
//!     GitCliCloner::new("git"),
//!     SyftCataloger::new("syft", "all-layers"),
//!     FileTreeLanguageDetector::new(config.max_scan_depth),
//!     FileSystemArtifactStore::new(config.output_dir.clone()),
//!     SystemClock,
//!     &reporter,
//! );
//!
//! let report = ScanWorkspaceUseCase::new(host, processor, &reporter, "acme").execute()?;
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_harvest;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::clock::SystemClock;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemArtifactStore, FileTreeLanguageDetector,
    };
    pub use crate::adapters::outbound::network::BitbucketRepositoryHost;
    pub use crate::adapters::outbound::process::{GitCliCloner, SyftCataloger};
    pub use crate::application::dto::{
        HarvestConfig, RepositoryFailure, RepositoryOutcome, StepOutcome, WorkspaceReport,
    };
    pub use crate::application::use_cases::{ProcessRepositoryUseCase, ScanWorkspaceUseCase};
    pub use crate::ports::inbound::RepositoryProcessingPort;
    pub use crate::ports::outbound::{
        ArtifactStore, CatalogOutput, CatalogRequest, CloneOutput, Clock, LanguageDetector,
        ProgressReporter,
        RepositoryHost, SbomCataloger, SourceCloner,
    };
    pub use crate::sbom_harvest::domain::{
        ArtifactKind, ArtifactTimestamp, CloneLink, Credentials, EcosystemTag, GenerationMode,
        ProjectHint, RepositoryDescriptor, RepositoryName,
    };
    pub use crate::sbom_harvest::policies::{ProcessingPlan, SbomReusePolicy};
    pub use crate::sbom_harvest::services::{
        CloneUrl, CloneUrlBuilder, Detection, EcosystemClassifier, NoticeSynthesizer,
        SbomDocumentFormatter,
    };
    pub use crate::shared::Result;
}
