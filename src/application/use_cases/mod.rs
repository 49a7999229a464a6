/// Use cases module containing application business logic orchestration
mod process_repository;
mod scan_workspace;

pub use process_repository::ProcessRepositoryUseCase;
pub use scan_workspace::ScanWorkspaceUseCase;
