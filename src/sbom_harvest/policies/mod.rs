mod sbom_reuse;

pub use sbom_reuse::{ProcessingPlan, SbomReusePolicy};
