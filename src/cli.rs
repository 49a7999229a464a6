use bitbucket_sbom::shared::error::ExitCode;
use clap::Parser;
use std::path::PathBuf;

/// Generate CycloneDX SBOMs (and optional NOTICE files) for every repository
/// in a Bitbucket workspace
#[derive(Parser, Debug)]
#[command(name = "bitbucket-sbom")]
#[command(version)]
#[command(about = "Generate SBOMs and NOTICE files for a Bitbucket workspace", long_about = None)]
pub struct Args {
    /// Bitbucket username used for the API and for cloning
    #[arg(long, env = "BITBUCKET_USERNAME")]
    pub username: Option<String>,

    /// Bitbucket app password
    #[arg(long, env = "BITBUCKET_APP_PASSWORD", hide_env_values = true)]
    pub app_password: Option<String>,

    /// Workspace whose repositories are analyzed
    #[arg(short, long, env = "BITBUCKET_WORKSPACE")]
    pub workspace: Option<String>,

    /// NOTICE generation: "only" (reuse existing SBOMs), "true" (SBOM and
    /// NOTICE); anything else generates SBOMs only
    #[arg(long, env = "GENERATE_NOTICE", value_name = "MODE")]
    pub generate_notice: Option<String>,

    /// Directory receiving the SBOM and NOTICE files [default: /output]
    #[arg(short, long, env = "SBOM_OUTPUT_DIR", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Parent directory for temporary clones [default: system temp dir]
    #[arg(long, env = "SBOM_WORK_DIR", value_name = "DIR")]
    pub work_dir: Option<PathBuf>,

    /// Base URL of the Bitbucket REST API
    #[arg(long = "api-url", env = "BITBUCKET_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Path to a config file (defaults to ./bitbucket-sbom.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Parses the process arguments, leaving the exit to the caller
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

/// `--help` and `--version` are not failures; anything else clap rejects is a usage error
pub fn exit_code_for(error: &clap::Error) -> ExitCode {
    if error.use_stderr() {
        ExitCode::InvalidArguments
    } else {
        ExitCode::Success
    }
}
