/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports are driven by the workspace scan; outbound ports are the
/// seams to the hosting API, the git and cataloger subprocesses, the output
/// directory, the clock and the console.
pub mod inbound;
pub mod outbound;
