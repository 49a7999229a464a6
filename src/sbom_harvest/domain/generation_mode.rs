use std::fmt;

/// Which artifacts a run produces
///
/// Parsed from the `GENERATE_NOTICE` setting:
/// - `only`: NOTICE only, reusing the latest existing SBOM when there is one
/// - `true`: SBOM and NOTICE
/// - anything else, or unset: SBOM only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationMode {
    #[default]
    SbomOnly,
    NoticeOnly,
    Both,
}

impl GenerationMode {
    /// Maps a raw setting to a mode; matching is case-insensitive and
    /// unrecognized values fall back to `SbomOnly`.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("only") => GenerationMode::NoticeOnly,
            Some("true") => GenerationMode::Both,
            _ => GenerationMode::SbomOnly,
        }
    }

    pub fn generates_sbom(self) -> bool {
        !matches!(self, GenerationMode::NoticeOnly)
    }

    pub fn generates_notice(self) -> bool {
        matches!(self, GenerationMode::NoticeOnly | GenerationMode::Both)
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationMode::SbomOnly => write!(f, "SBOM only"),
            GenerationMode::NoticeOnly => write!(f, "NOTICE only"),
            GenerationMode::Both => write!(f, "SBOM and NOTICE"),
        }
    }
}
