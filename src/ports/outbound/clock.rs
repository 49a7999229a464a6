use crate::sbom_harvest::domain::ArtifactTimestamp;

/// Clock port supplying the timestamps used in artifact names and NOTICE headers
pub trait Clock {
    fn now(&self) -> ArtifactTimestamp;
}
