use bitbucket_sbom::prelude::*;
use chrono::NaiveDate;

/// Clock frozen at 2024-05-06 07:08:09
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock;

impl FixedClock {
    pub const FILE_SUFFIX: &'static str = "20240506_070809";
}

impl Clock for FixedClock {
    fn now(&self) -> ArtifactTimestamp {
        ArtifactTimestamp::new(
            NaiveDate::from_ymd_opt(2024, 5, 6)
                .unwrap()
                .and_hms_opt(7, 8, 9)
                .unwrap(),
        )
    }
}
