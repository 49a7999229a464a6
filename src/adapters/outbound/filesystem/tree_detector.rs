use crate::ports::outbound::LanguageDetector;
use crate::sbom_harvest::services::{Detection, EcosystemClassifier};
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

const ROOT_MANIFEST: &str = "package.json";
const VCS_DIR: &str = ".git";

/// FileTreeLanguageDetector adapter walking a checkout with `walkdir`
///
/// Symbolic links are not followed, `.git` is not entered and the walk
/// stops at `max_depth`. Unreadable entries are skipped.
pub struct FileTreeLanguageDetector {
    max_depth: usize,
}

impl FileTreeLanguageDetector {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    fn is_vcs_dir(entry: &DirEntry) -> bool {
        entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == VCS_DIR
    }
}

impl LanguageDetector for FileTreeLanguageDetector {
    fn detect(&self, root: &Path) -> Detection {
        let mut classifier = EcosystemClassifier::new();

        WalkDir::new(root)
            .follow_links(false)
            .min_depth(1)
            .max_depth(self.max_depth)
            .into_iter()
            .filter_entry(|e| !Self::is_vcs_dir(e))
            .filter_map(|e| e.ok())
            .for_each(|entry| classifier.observe(&entry.file_name().to_string_lossy()));

        // Framework hints come from the root manifest only
        if let Ok(content) = fs::read_to_string(root.join(ROOT_MANIFEST)) {
            classifier.observe_root_manifest(&content);
        }

        classifier.finish()
    }

    fn top_level_entries(&self, root: &Path) -> Vec<String> {
        let Ok(entries) = fs::read_dir(root) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
