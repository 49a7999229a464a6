use super::RepositoryName;
use chrono::NaiveDateTime;
use std::fmt;

const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local wall-clock time at second precision, as used in artifact file names
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ArtifactTimestamp(NaiveDateTime);

impl ArtifactTimestamp {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }

    /// `YYYYMMDD_HHMMSS`
    pub fn file_suffix(&self) -> String {
        self.0.format(FILE_TIMESTAMP_FORMAT).to_string()
    }

    /// `YYYY-MM-DD HH:MM:SS`
    pub fn display(&self) -> String {
        self.0.format(DISPLAY_TIMESTAMP_FORMAT).to_string()
    }

    /// Parses a `YYYYMMDD_HHMMSS` suffix; anything else is rejected
    pub fn parse_file_suffix(value: &str) -> Option<Self> {
        if value.len() != 15 {
            return None;
        }
        NaiveDateTime::parse_from_str(value, FILE_TIMESTAMP_FORMAT)
            .ok()
            .map(Self)
    }
}

impl fmt::Display for ArtifactTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_suffix())
    }
}

/// The two artifact families written to the output directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// `sbom_<repo>_<YYYYMMDD_HHMMSS>.json`
    Sbom,
    /// `NOTICE_<repo>_<YYYYMMDD_HHMMSS>.txt`
    Notice,
}

impl ArtifactKind {
    fn prefix(self) -> &'static str {
        match self {
            ArtifactKind::Sbom => "sbom_",
            ArtifactKind::Notice => "NOTICE_",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            ArtifactKind::Sbom => ".json",
            ArtifactKind::Notice => ".txt",
        }
    }

    pub fn file_name(self, repository: &RepositoryName, at: &ArtifactTimestamp) -> String {
        format!(
            "{}{}_{}{}",
            self.prefix(),
            repository,
            at.file_suffix(),
            self.extension()
        )
    }

    /// Returns the timestamp if `file_name` is an artifact of this kind for
    /// exactly this repository.
    ///
    /// `sbom_api_gateway_20240101_120000.json` does not match repository `api`
    /// because `gateway_20240101_120000` is not a timestamp.
    pub fn match_file_name(
        self,
        repository: &RepositoryName,
        file_name: &str,
    ) -> Option<ArtifactTimestamp> {
        let rest = file_name
            .strip_prefix(self.prefix())?
            .strip_prefix(repository.as_str())?
            .strip_prefix('_')?
            .strip_suffix(self.extension())?;
        ArtifactTimestamp::parse_file_suffix(rest)
    }
}
