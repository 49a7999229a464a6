use std::fmt;

/// Ecosystem tags understood by the cataloger's `--select-catalogers` flag
///
/// Declaration order is the output order of the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EcosystemTag {
    JavaScript,
    Npm,
    C,
    Dotnet,
    Python,
    Java,
    Ruby,
    Go,
    Php,
}

impl EcosystemTag {
    pub const ALL: [EcosystemTag; 9] = [
        EcosystemTag::JavaScript,
        EcosystemTag::Npm,
        EcosystemTag::C,
        EcosystemTag::Dotnet,
        EcosystemTag::Python,
        EcosystemTag::Java,
        EcosystemTag::Ruby,
        EcosystemTag::Go,
        EcosystemTag::Php,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EcosystemTag::JavaScript => "javascript",
            EcosystemTag::Npm => "npm",
            EcosystemTag::C => "c",
            EcosystemTag::Dotnet => "dotnet",
            EcosystemTag::Python => "python",
            EcosystemTag::Java => "java",
            EcosystemTag::Ruby => "ruby",
            EcosystemTag::Go => "go",
            EcosystemTag::Php => "php",
        }
    }
}

impl fmt::Display for EcosystemTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Informational findings about a project; logged, never passed to the cataloger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProjectHint {
    Angular,
    React,
    Vue,
    Yarn,
    Pnpm,
    CMake,
    Make,
}

impl ProjectHint {
    pub fn description(self) -> &'static str {
        match self {
            ProjectHint::Angular => "Angular project detected",
            ProjectHint::React => "React project detected",
            ProjectHint::Vue => "Vue.js project detected",
            ProjectHint::Yarn => "yarn.lock detected (Yarn package manager)",
            ProjectHint::Pnpm => "pnpm-lock.yaml detected (pnpm package manager)",
            ProjectHint::CMake => "CMake project detected",
            ProjectHint::Make => "Make project detected",
        }
    }
}
