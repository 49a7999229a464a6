/// Domain layer for workspace SBOM harvesting
///
/// Value objects, pure services and policies. Nothing in here touches the
/// network, spawns processes or writes files.
pub mod domain;
pub mod policies;
pub mod services;
