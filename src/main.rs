mod cli;
mod config;

use bitbucket_sbom::adapters::outbound::clock::SystemClock;
use bitbucket_sbom::adapters::outbound::console::StderrProgressReporter;
use bitbucket_sbom::adapters::outbound::filesystem::{
    FileSystemArtifactStore, FileTreeLanguageDetector,
};
use bitbucket_sbom::adapters::outbound::network::BitbucketRepositoryHost;
use bitbucket_sbom::adapters::outbound::process::{GitCliCloner, SyftCataloger};
use bitbucket_sbom::application::dto::HarvestConfig;
use bitbucket_sbom::application::use_cases::{ProcessRepositoryUseCase, ScanWorkspaceUseCase};
use bitbucket_sbom::shared::error::ExitCode;
use bitbucket_sbom::shared::Result;
use cli::Args;
use std::path::Path;
use std::process;

fn main() {
    let args = match Args::parse_args() {
        Ok(args) => args,
        Err(e) => {
            let code = cli::exit_code_for(&e);
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::Failure.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config_file = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(Path::new("."))?.unwrap_or_default(),
    };
    let config = config::resolve(&args, config_file)?;

    eprintln!("{}", startup_banner(&config));

    // Create adapters (Dependency Injection)
    let progress_reporter = StderrProgressReporter::new();
    let repository_host = BitbucketRepositoryHost::new(
        config.api_base_url.as_str(),
        config.credentials.clone(),
        &progress_reporter,
    )?;
    let processor = ProcessRepositoryUseCase::new(
        &config,
        GitCliCloner::new(config.git_program.as_str()),
        SyftCataloger::new(
            config.cataloger_program.as_str(),
            config.cataloger_scope.as_str(),
        ),
        FileTreeLanguageDetector::new(config.max_scan_depth),
        FileSystemArtifactStore::new(config.output_dir.clone()),
        SystemClock,
        &progress_reporter,
    );

    let use_case = ScanWorkspaceUseCase::new(
        repository_host,
        processor,
        &progress_reporter,
        config.workspace.as_str(),
    );

    // Individual repository failures are already reported; only the
    // listing can fail the run
    use_case.execute()?;

    Ok(())
}

fn startup_banner(config: &HarvestConfig) -> String {
    format!(
        "🚀 Starting SBOM generation\n   Workspace: {}\n   Username: {}\n   App password: {}\n   Generate SBOM: {}\n   Generate NOTICE: {}\n   Output directory: {}",
        config.workspace,
        config.credentials.username(),
        config.credentials.masked_secret(),
        config.mode.generates_sbom(),
        config.mode.generates_notice(),
        config.output_dir.display()
    )
}
