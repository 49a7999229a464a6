use crate::sbom_harvest::services::Detection;
use std::path::Path;

/// LanguageDetector port for inspecting a working tree
pub trait LanguageDetector {
    /// Detects ecosystems present under `root`
    ///
    /// Never fails: unreadable entries are skipped and an empty detection
    /// means "run the cataloger unscoped".
    fn detect(&self, root: &Path) -> Detection;

    /// Names of the entries directly under `root`, for diagnostics
    fn top_level_entries(&self, root: &Path) -> Vec<String>;
}
