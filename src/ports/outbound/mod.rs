/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (hosting API, subprocesses, file system, console).
pub mod artifact_store;
pub mod clock;
pub mod language_detector;
pub mod progress_reporter;
pub mod repository_host;
pub mod sbom_cataloger;
pub mod source_cloner;

pub use artifact_store::ArtifactStore;
pub use clock::Clock;
pub use language_detector::LanguageDetector;
pub use progress_reporter::ProgressReporter;
pub use repository_host::RepositoryHost;
pub use sbom_cataloger::{CatalogOutput, CatalogRequest, SbomCataloger};
pub use source_cloner::{CloneOutput, SourceCloner};
