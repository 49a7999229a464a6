/// Subprocess adapters for the external git and cataloger tools
mod git_cloner;
mod syft_cataloger;

pub use git_cloner::GitCliCloner;
pub use syft_cataloger::SyftCataloger;
