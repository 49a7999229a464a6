use crate::application::dto::{HarvestConfig, RepositoryOutcome, StepOutcome};
use crate::application::working_clone::WorkingClone;
use crate::ports::inbound::RepositoryProcessingPort;
use crate::ports::outbound::{
    ArtifactStore, CatalogRequest, Clock, LanguageDetector, ProgressReporter, SbomCataloger,
    SourceCloner,
};
use crate::sbom_harvest::domain::{
    ArtifactKind, Credentials, GenerationMode, RepositoryDescriptor, RepositoryName,
};
use crate::sbom_harvest::policies::{ProcessingPlan, SbomReusePolicy};
use crate::sbom_harvest::services::{
    CloneUrl, CloneUrlBuilder, NoticeSynthesizer, SbomDocumentFormatter,
};
use crate::shared::error::HarvestError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

const BANNER_WIDTH: usize = 80;

/// ProcessRepositoryUseCase - clone, analyze, format and annotate one repository
///
/// States: CHECK_REUSE (NOTICE-only runs) → CLONE → ANALYZE → FORMAT →
/// NOTIFY → CLEANUP. Clone and cataloger failures abandon the repository;
/// formatting and NOTICE failures are reported and skipped. The working
/// clone is released on every path.
///
/// # Type Parameters
/// * `SC` - SourceCloner implementation
/// * `CAT` - SbomCataloger implementation
/// * `LD` - LanguageDetector implementation
/// * `AS` - ArtifactStore implementation
/// * `CLK` - Clock implementation
/// * `PR` - ProgressReporter implementation
pub struct ProcessRepositoryUseCase<SC, CAT, LD, AS, CLK, PR> {
    source_cloner: SC,
    cataloger: CAT,
    language_detector: LD,
    artifact_store: AS,
    clock: CLK,
    progress_reporter: PR,
    credentials: Credentials,
    mode: GenerationMode,
    work_dir: Option<PathBuf>,
}

impl<SC, CAT, LD, AS, CLK, PR> ProcessRepositoryUseCase<SC, CAT, LD, AS, CLK, PR>
where
    SC: SourceCloner,
    CAT: SbomCataloger,
    LD: LanguageDetector,
    AS: ArtifactStore,
    CLK: Clock,
    PR: ProgressReporter,
{
    /// Creates a new ProcessRepositoryUseCase with injected dependencies
    pub fn new(
        config: &HarvestConfig,
        source_cloner: SC,
        cataloger: CAT,
        language_detector: LD,
        artifact_store: AS,
        clock: CLK,
        progress_reporter: PR,
    ) -> Self {
        Self {
            source_cloner,
            cataloger,
            language_detector,
            artifact_store,
            clock,
            progress_reporter,
            credentials: config.credentials.clone(),
            mode: config.mode,
            work_dir: config.work_dir.clone(),
        }
    }

    /// Rewrites the SBOM at `path` in canonical form (best effort)
    pub fn format_sbom(&self, path: &Path) -> StepOutcome<()> {
        let result = self
            .artifact_store
            .read_document(path)
            .and_then(|content| SbomDocumentFormatter::format(&content))
            .and_then(|formatted| self.artifact_store.write_document(path, &formatted));

        match result {
            Ok(()) => {
                self.progress_reporter
                    .report(&format!("📝 SBOM formatted: {}", path.display()));
                StepOutcome::Completed(())
            }
            Err(e) => {
                let diagnostic = format!(
                    "Failed to format JSON file {}: {:#}",
                    path.display(),
                    e
                );
                self.progress_reporter
                    .report_error(&format!("⚠️  Warning: {}", diagnostic));
                StepOutcome::failed(diagnostic)
            }
        }
    }

    /// Derives a NOTICE file from the SBOM at `sbom_path` (best effort)
    ///
    /// Returns the NOTICE path, or `None` when reading, parsing or writing failed.
    pub fn synthesize_notice(
        &self,
        repository: &RepositoryName,
        sbom_path: &Path,
    ) -> Option<PathBuf> {
        let generated_at = self.clock.now();
        let notice_path =
            self.artifact_store
                .artifact_path(ArtifactKind::Notice, repository, &generated_at);

        let result = self
            .artifact_store
            .read_document(sbom_path)
            .and_then(|content| {
                serde_json::from_str::<serde_json::Value>(&content)
                    .map_err(|e| anyhow::anyhow!("Invalid SBOM document: {}", e))
            })
            .and_then(|document| NoticeSynthesizer::render(repository, &generated_at, &document))
            .and_then(|notice| self.artifact_store.write_document(&notice_path, &notice));

        match result {
            Ok(()) => {
                self.progress_reporter
                    .report(&format!("📄 NOTICE file generated: {}", notice_path.display()));
                Some(notice_path)
            }
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Failed to generate NOTICE file for {}: {:#}",
                    repository, e
                ));
                None
            }
        }
    }

    fn run(&self, repository: &RepositoryDescriptor, name: &RepositoryName) -> Result<RepositoryOutcome> {
        self.artifact_store.prepare()?;

        let existing_sbom = if self.mode == GenerationMode::NoticeOnly {
            self.find_existing_sbom(name)
        } else {
            None
        };

        match SbomReusePolicy::plan(self.mode, existing_sbom) {
            ProcessingPlan::ReuseSbom { sbom_path } => {
                self.progress_reporter
                    .report(&format!("♻️  Found existing SBOM: {}", sbom_path.display()));
                let notice_path = self.synthesize_notice(name, &sbom_path);
                Ok(RepositoryOutcome {
                    sbom_path: Some(sbom_path),
                    reused_sbom: true,
                    notice_path,
                    ..RepositoryOutcome::new(name.as_str())
                })
            }
            ProcessingPlan::Generate { with_notice } => {
                if self.mode == GenerationMode::NoticeOnly {
                    self.progress_reporter.report(&format!(
                        "No SBOM found for {}. Generating SBOM first.",
                        name
                    ));
                }
                let clone_url = CloneUrlBuilder::build(repository, &self.credentials)?;
                self.generate(name, &clone_url, with_notice)
            }
        }
    }

    fn report_tool_output(&self, tool: &str, stdout: &str, stderr: &str) {
        if !stdout.trim().is_empty() {
            self.progress_reporter
                .report(&format!("{} output:\n{}", tool, stdout.trim_end()));
        }
        if !stderr.trim().is_empty() {
            self.progress_reporter
                .report(&format!("{} diagnostics:\n{}", tool, stderr.trim_end()));
        }
    }

    fn find_existing_sbom(&self, name: &RepositoryName) -> Option<PathBuf> {
        match self.artifact_store.find_latest_sbom(name) {
            Ok(found) => found,
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Failed to look up the latest SBOM for {}: {:#}",
                    name, e
                ));
                None
            }
        }
    }

    /// CLONE → ANALYZE → FORMAT → NOTIFY inside a scoped working clone
    fn generate(
        &self,
        name: &RepositoryName,
        clone_url: &CloneUrl,
        with_notice: bool,
    ) -> Result<RepositoryOutcome> {
        let working_clone = WorkingClone::create(self.work_dir.as_deref())?;
        let outcome = self.analyze(name, clone_url, working_clone.path(), with_notice);
        working_clone.release(&self.progress_reporter);
        outcome
    }

    fn analyze(
        &self,
        name: &RepositoryName,
        clone_url: &CloneUrl,
        clone_dir: &Path,
        with_notice: bool,
    ) -> Result<RepositoryOutcome> {
        self.progress_reporter.report(&format!(
            "📥 Cloning repository {} from {} into {}",
            name,
            clone_url,
            clone_dir.display()
        ));
        let cloned = self
            .source_cloner
            .clone_repository(name, clone_url, clone_dir)?;
        self.report_tool_output("Git", &cloned.stdout, &cloned.stderr);

        let generated_at = self.clock.now();
        let sbom_path = self
            .artifact_store
            .artifact_path(ArtifactKind::Sbom, name, &generated_at);

        self.progress_reporter.report(&format!(
            "🔍 Analyzing repository {}\n   Directory: {}\n   Output file: {}",
            name,
            clone_dir.display(),
            sbom_path.display()
        ));
        let entries = self.language_detector.top_level_entries(clone_dir);
        self.progress_reporter.report(&format!(
            "   Directory content ({} entries): {}",
            entries.len(),
            entries.join(", ")
        ));

        let detection = self.language_detector.detect(clone_dir);
        for hint in &detection.hints {
            self.progress_reporter
                .report(&format!("   {}", hint.description()));
        }
        let selection = detection.cataloger_selection();
        match selection.as_deref() {
            Some(selection) => self
                .progress_reporter
                .report(&format!("   Detected catalogers: {}", selection)),
            None => self.progress_reporter.report(
                "   No main language detected, running unscoped analysis",
            ),
        }

        let output = self.cataloger.catalog(
            name,
            CatalogRequest {
                source_dir: clone_dir,
                output_path: &sbom_path,
                selection: selection.as_deref(),
            },
        )?;
        self.report_tool_output("Cataloger", &output.stdout, &output.stderr);

        let sbom_formatted = self.format_sbom(&sbom_path).is_completed();
        let notice_path = if with_notice {
            self.synthesize_notice(name, &sbom_path)
        } else {
            None
        };

        Ok(RepositoryOutcome {
            sbom_path: Some(sbom_path),
            sbom_formatted,
            notice_path,
            ecosystems: detection.tags,
            ..RepositoryOutcome::new(name.as_str())
        })
    }
}

impl<SC, CAT, LD, AS, CLK, PR> RepositoryProcessingPort
    for ProcessRepositoryUseCase<SC, CAT, LD, AS, CLK, PR>
where
    SC: SourceCloner,
    CAT: SbomCataloger,
    LD: LanguageDetector,
    AS: ArtifactStore,
    CLK: Clock,
    PR: ProgressReporter,
{
    fn process(&self, repository: &RepositoryDescriptor) -> Result<RepositoryOutcome> {
        let name = repository
            .validated_name()
            .map_err(|e| HarvestError::InvalidRepository {
                name: repository.name().to_string(),
                reason: e.to_string(),
            })?;

        let rule = "=".repeat(BANNER_WIDTH);
        self.progress_reporter
            .report(&format!("{}\nProcessing repository: {}\n{}", rule, name, rule));

        let outcome = self.run(repository, &name);

        self.progress_reporter
            .report(&format!("Finished repository: {}\n{}", name, rule));
        outcome
    }
}
