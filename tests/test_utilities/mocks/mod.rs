/// Mock implementations for testing
mod fixed_clock;
mod mock_cataloger;
mod mock_progress_reporter;
mod mock_repository_host;
mod mock_source_cloner;

pub use fixed_clock::FixedClock;
pub use mock_cataloger::MockCataloger;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_repository_host::MockRepositoryHost;
pub use mock_source_cloner::MockSourceCloner;
