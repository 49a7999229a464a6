/// Filesystem adapters for file I/O operations
mod artifact_store;
mod tree_detector;

pub use artifact_store::FileSystemArtifactStore;
pub use tree_detector::FileTreeLanguageDetector;
