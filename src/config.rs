//! Configuration file support for bitbucket-sbom.
//!
//! Provides YAML-based configuration through `bitbucket-sbom.config.yml`
//! files and merges it with command-line and environment values into a
//! `HarvestConfig`.

use anyhow::{bail, Context};
use bitbucket_sbom::application::dto::HarvestConfig;
use bitbucket_sbom::sbom_harvest::domain::{Credentials, GenerationMode};
use bitbucket_sbom::shared::error::HarvestError;
use bitbucket_sbom::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "bitbucket-sbom.config.yml";

/// Top-level configuration file schema.
///
/// Credentials are deliberately absent: they only come from the command
/// line or the environment.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub workspace: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub work_dir: Option<PathBuf>,
    pub generate_notice: Option<NoticeSetting>,
    pub api_base_url: Option<String>,
    pub git_program: Option<String>,
    pub cataloger_program: Option<String>,
    pub cataloger_scope: Option<String>,
    pub max_scan_depth: Option<usize>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// `generate_notice` accepts both `true` and `"only"` in YAML.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum NoticeSetting {
    Flag(bool),
    Text(String),
}

impl NoticeSetting {
    fn as_setting(&self) -> String {
        match self {
            NoticeSetting::Flag(flag) => flag.to_string(),
            NoticeSetting::Text(text) => text.clone(),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.max_scan_depth == Some(0) {
        bail!(
            "Invalid config: max_scan_depth must be at least 1.\n\n\
             💡 Hint: Remove the field to use the default depth of 64."
        );
    }

    let programs = [
        ("git_program", &config.git_program),
        ("cataloger_program", &config.cataloger_program),
        ("cataloger_scope", &config.cataloger_scope),
    ];
    for (field, value) in programs {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            bail!(
                "Invalid config: {} must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default value.",
                field
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Treats blank values like absent ones
fn present(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Merges CLI/env values over the config file over the built-in defaults.
///
/// # Errors
/// `HarvestError::MissingConfiguration` naming every missing required value,
/// or `HarvestError::Validation` for unusable values.
pub fn resolve(args: &Args, file: ConfigFile) -> Result<HarvestConfig> {
    let username = present(args.username.as_deref());
    let secret = present(args.app_password.as_deref());
    let workspace = present(args.workspace.as_deref())
        .or_else(|| present(file.workspace.as_deref()));

    let (Some(username), Some(secret), Some(workspace)) = (&username, &secret, &workspace) else {
        let missing = [
            ("BITBUCKET_USERNAME", username.is_none()),
            ("BITBUCKET_APP_PASSWORD", secret.is_none()),
            ("BITBUCKET_WORKSPACE", workspace.is_none()),
        ]
        .into_iter()
        .filter(|(_, is_missing)| *is_missing)
        .map(|(name, _)| name.to_string())
        .collect();
        return Err(HarvestError::MissingConfiguration { missing }.into());
    };

    let mut config = HarvestConfig::new(Credentials::new(username, secret), workspace.as_str());

    let notice_setting = args
        .generate_notice
        .clone()
        .or_else(|| file.generate_notice.as_ref().map(NoticeSetting::as_setting));
    config.mode = GenerationMode::from_setting(notice_setting.as_deref());

    if let Some(output_dir) = args.output_dir.clone().or(file.output_dir) {
        config.output_dir = output_dir;
    }
    config.work_dir = args.work_dir.clone().or(file.work_dir);
    if let Some(api_base_url) =
        present(args.api_url.as_deref()).or_else(|| present(file.api_base_url.as_deref()))
    {
        config.api_base_url = api_base_url;
    }
    if let Some(git_program) = file.git_program {
        config.git_program = git_program;
    }
    if let Some(cataloger_program) = file.cataloger_program {
        config.cataloger_program = cataloger_program;
    }
    if let Some(cataloger_scope) = file.cataloger_scope {
        config.cataloger_scope = cataloger_scope;
    }
    if let Some(max_scan_depth) = file.max_scan_depth {
        config.max_scan_depth = max_scan_depth;
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["bitbucket-sbom"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    fn credentials() -> Vec<&'static str> {
        vec!["--username", "ci-bot", "--app-password", "secret"]
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
workspace: acme
output_dir: /srv/sbom
generate_notice: only
api_base_url: https://bitbucket.example.com/2.0
git_program: /usr/bin/git
cataloger_program: /usr/local/bin/syft
cataloger_scope: squashed
max_scan_depth: 12
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.workspace.as_deref(), Some("acme"));
        assert_eq!(config.output_dir, Some(PathBuf::from("/srv/sbom")));
        assert_eq!(
            config.generate_notice,
            Some(NoticeSetting::Text("only".to_string()))
        );
        assert_eq!(
            config.api_base_url.as_deref(),
            Some("https://bitbucket.example.com/2.0")
        );
        assert_eq!(config.git_program.as_deref(), Some("/usr/bin/git"));
        assert_eq!(config.cataloger_scope.as_deref(), Some("squashed"));
        assert_eq!(config.max_scan_depth, Some(12));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_generate_notice_accepts_boolean() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "generate_notice: true\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.generate_notice, Some(NoticeSetting::Flag(true)));

        let resolved = resolve(&args(&[&credentials()[..], &["-w", "acme"][..]].concat()), config)
            .unwrap();
        assert_eq!(resolved.mode, GenerationMode::Both);
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "workspace: acme\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert_eq!(config.unwrap().workspace.as_deref(), Some("acme"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_zero_depth_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "max_scan_depth: 0\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("max_scan_depth must be at least 1"));
    }

    #[test]
    fn test_blank_program_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "cataloger_program: \"  \"\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("cataloger_program must not be empty"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
workspace: acme
app_password: should-not-be-here
another_unknown: value
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("app_password"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_resolve_reports_every_missing_value() {
        let err = resolve(&args(&[]), ConfigFile::default()).unwrap_err();
        let display = err.to_string();
        assert!(display.contains("BITBUCKET_USERNAME, BITBUCKET_APP_PASSWORD, BITBUCKET_WORKSPACE"));
    }

    #[test]
    fn test_resolve_blank_values_count_as_missing() {
        let err = resolve(
            &args(&["--username", " ", "--app-password", "secret", "-w", "acme"]),
            ConfigFile::default(),
        )
        .unwrap_err();
        let harvest = err.downcast_ref::<HarvestError>().unwrap();
        assert!(matches!(
            harvest,
            HarvestError::MissingConfiguration { missing } if missing == &vec!["BITBUCKET_USERNAME".to_string()]
        ));
    }

    #[test]
    fn test_resolve_workspace_from_file() {
        let file = ConfigFile {
            workspace: Some("from-file".to_string()),
            ..Default::default()
        };
        let config = resolve(&args(&credentials()), file).unwrap();
        assert_eq!(config.workspace, "from-file");
        assert_eq!(config.mode, GenerationMode::SbomOnly);
        assert_eq!(config.output_dir, PathBuf::from("/output"));
    }

    #[test]
    fn test_resolve_cli_overrides_file() {
        let file = ConfigFile {
            workspace: Some("from-file".to_string()),
            output_dir: Some(PathBuf::from("/file/out")),
            generate_notice: Some(NoticeSetting::Text("true".to_string())),
            api_base_url: Some("https://file.example.com".to_string()),
            cataloger_scope: Some("squashed".to_string()),
            ..Default::default()
        };
        let config = resolve(
            &args(
                &[
                    &credentials()[..],
                    &[
                        "-w",
                        "from-cli",
                        "-o",
                        "/cli/out",
                        "--generate-notice",
                        "ONLY",
                        "--api-url",
                        "http://127.0.0.1:9000",
                    ][..],
                ]
                .concat(),
            ),
            file,
        )
        .unwrap();

        assert_eq!(config.workspace, "from-cli");
        assert_eq!(config.output_dir, PathBuf::from("/cli/out"));
        assert_eq!(config.mode, GenerationMode::NoticeOnly);
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.cataloger_scope, "squashed");
        assert_eq!(config.credentials.username(), "ci-bot");
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.workspace.is_none());
        assert!(config.output_dir.is_none());
        assert!(config.generate_notice.is_none());
        assert!(config.max_scan_depth.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
