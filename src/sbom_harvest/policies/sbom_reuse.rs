use crate::sbom_harvest::domain::{ArtifactKind, GenerationMode, RepositoryName};
use std::path::PathBuf;

/// What the Repository Processor does for one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingPlan {
    /// Skip clone and analysis; derive the NOTICE from an existing SBOM
    ReuseSbom { sbom_path: PathBuf },
    /// Clone, analyze and format; write a NOTICE when `with_notice` is set
    Generate { with_notice: bool },
}

/// SbomReusePolicy for deciding whether an existing SBOM can be reused
///
/// Rules:
/// 1. Only NOTICE-only runs look for an existing SBOM
/// 2. The latest `sbom_<repo>_<YYYYMMDD_HHMMSS>.json` wins; timestamps sort
///    lexicographically in chronological order
/// 3. Without an existing SBOM the repository falls back to full generation,
///    NOTICE included; the fallback never leaks into other repositories
pub struct SbomReusePolicy;

impl SbomReusePolicy {
    /// Selects the latest SBOM file name for `repository` among `file_names`
    pub fn latest_sbom<'a, I>(repository: &RepositoryName, file_names: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        file_names
            .into_iter()
            .filter_map(|name| {
                ArtifactKind::Sbom
                    .match_file_name(repository, name)
                    .map(|at| (at, name))
            })
            .max()
            .map(|(_, name)| name)
    }

    /// Decides the plan for one repository
    ///
    /// `existing_sbom` is only consulted in NOTICE-only mode.
    pub fn plan(mode: GenerationMode, existing_sbom: Option<PathBuf>) -> ProcessingPlan {
        match mode {
            GenerationMode::NoticeOnly => match existing_sbom {
                Some(sbom_path) => ProcessingPlan::ReuseSbom { sbom_path },
                None => ProcessingPlan::Generate { with_notice: true },
            },
            other => ProcessingPlan::Generate {
                with_notice: other.generates_notice(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str) -> RepositoryName {
        RepositoryName::new(name.to_string()).unwrap()
    }

    #[test]
    fn test_latest_sbom_picks_newest_timestamp() {
        let files = [
            "sbom_api_20240101_120000.json",
            "sbom_api_20240315_080000.json",
            "sbom_api_20231231_235959.json",
            "NOTICE_api_20240401_000000.txt",
        ];
        assert_eq!(
            SbomReusePolicy::latest_sbom(&repo("api"), files),
            Some("sbom_api_20240315_080000.json")
        );
    }

    #[test]
    fn test_latest_sbom_ignores_other_repositories() {
        let files = [
            "sbom_api_gateway_20250101_000000.json",
            "sbom_api_20240101_120000.json",
        ];
        assert_eq!(
            SbomReusePolicy::latest_sbom(&repo("api"), files),
            Some("sbom_api_20240101_120000.json")
        );
    }

    #[test]
    fn test_latest_sbom_none_found() {
        let files = ["README.md", "sbom_web_20240101_120000.json"];
        assert_eq!(SbomReusePolicy::latest_sbom(&repo("api"), files), None);
    }

    #[test]
    fn test_plan_notice_only_with_existing_sbom() {
        let path = PathBuf::from("/output/sbom_api_20240101_120000.json");
        assert_eq!(
            SbomReusePolicy::plan(GenerationMode::NoticeOnly, Some(path.clone())),
            ProcessingPlan::ReuseSbom { sbom_path: path }
        );
    }

    #[test]
    fn test_plan_notice_only_falls_back_to_full_generation() {
        assert_eq!(
            SbomReusePolicy::plan(GenerationMode::NoticeOnly, None),
            ProcessingPlan::Generate { with_notice: true }
        );
    }

    #[test]
    fn test_plan_other_modes_never_reuse() {
        let path = PathBuf::from("/output/sbom_api_20240101_120000.json");
        assert_eq!(
            SbomReusePolicy::plan(GenerationMode::SbomOnly, Some(path.clone())),
            ProcessingPlan::Generate { with_notice: false }
        );
        assert_eq!(
            SbomReusePolicy::plan(GenerationMode::Both, Some(path)),
            ProcessingPlan::Generate { with_notice: true }
        );
    }
}
