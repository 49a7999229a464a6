/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that drivers (the CLI, the workspace
/// scan) use to interact with the application core.
pub mod repository_processing_port;

pub use repository_processing_port::RepositoryProcessingPort;
