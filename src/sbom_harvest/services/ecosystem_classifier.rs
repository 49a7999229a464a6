use crate::sbom_harvest::domain::{EcosystemTag, ProjectHint};
use std::collections::BTreeSet;

/// Marker files and extensions recognized while walking a clone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Marker {
    ScriptSource,
    PackageJson,
    CSource,
    CMakeLists,
    Makefile,
    DotnetProject,
    Requirements,
    PomXml,
    Gemfile,
    GoMod,
    ComposerJson,
    AngularJson,
    ReactModule,
    VueSource,
    YarnLock,
    PnpmLock,
}

impl Marker {
    fn for_name(name: &str) -> Option<Marker> {
        let marker = match name {
            "package.json" => Marker::PackageJson,
            "CMakeLists.txt" => Marker::CMakeLists,
            "Makefile" => Marker::Makefile,
            "requirements.txt" => Marker::Requirements,
            "pom.xml" => Marker::PomXml,
            "Gemfile" => Marker::Gemfile,
            "go.mod" => Marker::GoMod,
            "composer.json" => Marker::ComposerJson,
            "angular.json" => Marker::AngularJson,
            "react" | "react-dom" => Marker::ReactModule,
            "vue.config.js" => Marker::VueSource,
            "yarn.lock" => Marker::YarnLock,
            "pnpm-lock.yaml" => Marker::PnpmLock,
            _ => return None,
        };
        Some(marker)
    }

    fn for_extension(name: &str) -> Option<Marker> {
        let (stem, extension) = name.rsplit_once('.')?;
        if stem.is_empty() {
            return None;
        }
        match extension {
            "js" | "ts" | "jsx" | "tsx" => Some(Marker::ScriptSource),
            "c" | "cpp" | "h" | "hpp" => Some(Marker::CSource),
            "csproj" | "sln" => Some(Marker::DotnetProject),
            "vue" => Some(Marker::VueSource),
            _ => None,
        }
    }
}

/// Result of a language detection pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detection {
    /// Ordered, duplicate-free ecosystem tags
    pub tags: Vec<EcosystemTag>,
    /// Informational hints for logging only
    pub hints: Vec<ProjectHint>,
}

impl Detection {
    /// Comma-separated tag list for `--select-catalogers`, or `None` for an
    /// unscoped run
    pub fn cataloger_selection(&self) -> Option<String> {
        if self.tags.is_empty() {
            return None;
        }
        Some(
            self.tags
                .iter()
                .map(|tag| tag.as_str())
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

/// EcosystemClassifier service turning observed file names into ecosystem tags
///
/// Detection is presence-based: a tag is emitted when at least one matching
/// path was observed. The only content inspected is the root `package.json`,
/// and only to produce framework hints.
#[derive(Debug, Default)]
pub struct EcosystemClassifier {
    seen: BTreeSet<Marker>,
    manifest_mentions_react: bool,
    manifest_mentions_vue: bool,
}

impl EcosystemClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a file or directory name found anywhere in the tree
    pub fn observe(&mut self, file_name: &str) {
        let markers = [Marker::for_name(file_name), Marker::for_extension(file_name)];
        self.seen.extend(markers.into_iter().flatten());
    }

    /// Records the content of the root `package.json`
    pub fn observe_root_manifest(&mut self, content: &str) {
        self.manifest_mentions_react |= content.contains("\"react\"");
        self.manifest_mentions_vue |= content.contains("\"vue\"");
    }

    fn has(&self, marker: Marker) -> bool {
        self.seen.contains(&marker)
    }

    pub fn finish(&self) -> Detection {
        let mut tags = Vec::new();
        let mut hints = Vec::new();

        if self.has(Marker::ScriptSource) {
            tags.push(EcosystemTag::JavaScript);
        }

        if self.has(Marker::PackageJson) {
            tags.push(EcosystemTag::Npm);

            if self.has(Marker::AngularJson) {
                hints.push(ProjectHint::Angular);
            }
            if self.has(Marker::ReactModule) || self.manifest_mentions_react {
                hints.push(ProjectHint::React);
            }
            if self.has(Marker::VueSource) || self.manifest_mentions_vue {
                hints.push(ProjectHint::Vue);
            }
        }

        if self.has(Marker::YarnLock) {
            hints.push(ProjectHint::Yarn);
        }
        if self.has(Marker::PnpmLock) {
            hints.push(ProjectHint::Pnpm);
        }

        if self.has(Marker::CSource) || self.has(Marker::CMakeLists) || self.has(Marker::Makefile)
        {
            tags.push(EcosystemTag::C);
            if self.has(Marker::CMakeLists) {
                hints.push(ProjectHint::CMake);
            }
            if self.has(Marker::Makefile) {
                hints.push(ProjectHint::Make);
            }
        }

        let single_marker_tags = [
            (Marker::DotnetProject, EcosystemTag::Dotnet),
            (Marker::Requirements, EcosystemTag::Python),
            (Marker::PomXml, EcosystemTag::Java),
            (Marker::Gemfile, EcosystemTag::Ruby),
            (Marker::GoMod, EcosystemTag::Go),
            (Marker::ComposerJson, EcosystemTag::Php),
        ];
        for (marker, tag) in single_marker_tags {
            if self.has(marker) {
                tags.push(tag);
            }
        }

        Detection { tags, hints }
    }
}
