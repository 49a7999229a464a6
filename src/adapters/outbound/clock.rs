use crate::ports::outbound::Clock;
use crate::sbom_harvest::domain::ArtifactTimestamp;

/// SystemClock adapter reading the local wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ArtifactTimestamp {
        ArtifactTimestamp::new(chrono::Local::now().naive_local())
    }
}
