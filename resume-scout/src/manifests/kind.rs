//! The fixed registry of recognised manifest kinds.

use super::error::ManifestError;
use super::parsers;
use super::DependencyMap;
use serde::Serialize;
use std::fmt;

/// A software platform detected through one or more manifest grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Ecosystem {
    #[serde(rename = "Node.js")]
    NodeJs,
    Python,
    Java,
    Go,
    Rust,
    #[serde(rename = "PHP")]
    Php,
    #[serde(rename = ".NET")]
    DotNet,
    Docker,
    #[serde(rename = "Docker Compose")]
    DockerCompose,
}

impl Ecosystem {
    /// Human-readable label used in reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NodeJs => "Node.js",
            Self::Python => "Python",
            Self::Java => "Java",
            Self::Go => "Go",
            Self::Rust => "Rust",
            Self::Php => "PHP",
            Self::DotNet => ".NET",
            Self::Docker => "Docker",
            Self::DockerCompose => "Docker Compose",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A manifest grammar, keyed by file name or (for dot-prefixed keys) suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    PackageJson,
    Requirements,
    Pyproject,
    MavenPom,
    GoMod,
    CargoToml,
    ComposerJson,
    CsProj,
    Dockerfile,
    DockerCompose,
    DockerComposeYaml,
}

impl ManifestKind {
    /// Every registered kind, in lookup order.
    pub const ALL: [ManifestKind; 11] = [
        Self::PackageJson,
        Self::Requirements,
        Self::Pyproject,
        Self::MavenPom,
        Self::GoMod,
        Self::CargoToml,
        Self::ComposerJson,
        Self::CsProj,
        Self::Dockerfile,
        Self::DockerCompose,
        Self::DockerComposeYaml,
    ];

    /// Registry key: an exact file name, or a suffix when it starts with `.`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::PackageJson => "package.json",
            Self::Requirements => "requirements.txt",
            Self::Pyproject => "pyproject.toml",
            Self::MavenPom => "pom.xml",
            Self::GoMod => "go.mod",
            Self::CargoToml => "Cargo.toml",
            Self::ComposerJson => "composer.json",
            Self::CsProj => ".csproj",
            Self::Dockerfile => "Dockerfile",
            Self::DockerCompose => "docker-compose.yml",
            Self::DockerComposeYaml => "docker-compose.yaml",
        }
    }

    /// Ecosystem signalled by the presence of this manifest.
    #[must_use]
    pub fn ecosystem(self) -> Ecosystem {
        match self {
            Self::PackageJson => Ecosystem::NodeJs,
            Self::Requirements | Self::Pyproject => Ecosystem::Python,
            Self::MavenPom => Ecosystem::Java,
            Self::GoMod => Ecosystem::Go,
            Self::CargoToml => Ecosystem::Rust,
            Self::ComposerJson => Ecosystem::Php,
            Self::CsProj => Ecosystem::DotNet,
            Self::Dockerfile => Ecosystem::Docker,
            Self::DockerCompose | Self::DockerComposeYaml => Ecosystem::DockerCompose,
        }
    }

    /// Whether the content is JSON and must be decoded before parsing.
    #[must_use]
    pub fn is_json(self) -> bool {
        matches!(self, Self::PackageJson | Self::ComposerJson)
    }

    /// Whether this kind carries a dependency grammar, as opposed to being a
    /// presence-only marker.
    #[must_use]
    pub fn has_parser(self) -> bool {
        !matches!(
            self,
            Self::Dockerfile | Self::DockerCompose | Self::DockerComposeYaml
        )
    }

    /// Returns true if `file_name` (a final path segment) matches this key.
    #[must_use]
    pub fn matches(self, file_name: &str) -> bool {
        let key = self.key();
        if key.starts_with('.') {
            file_name.ends_with(key)
        } else {
            file_name == key
        }
    }

    /// Looks up the kind for a final path segment.
    ///
    /// Exact file-name keys take priority over suffix keys.
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| !kind.key().starts_with('.') && kind.matches(file_name))
            .or_else(|| {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|kind| kind.key().starts_with('.') && kind.matches(file_name))
            })
    }

    /// Looks up the kind for a repository-relative path.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::from_file_name(file_name(path))
    }

    /// Parses raw decoded text into a dependency map.
    ///
    /// Returns `None` for presence-only kinds. JSON kinds decode `content`
    /// first; see [`ManifestKind::parse_json`] for callers that already hold
    /// a decoded value.
    pub fn parse(self, content: &str) -> Option<Result<DependencyMap, ManifestError>> {
        let result = match self {
            Self::PackageJson | Self::ComposerJson => {
                return match serde_json::from_str(content) {
                    Ok(value) => self.parse_json(&value),
                    Err(e) => Some(Err(e.into())),
                };
            }
            Self::Requirements => Ok(parsers::parse_requirements(content)),
            Self::Pyproject => parsers::parse_pyproject(content),
            Self::MavenPom => parsers::parse_pom(content),
            Self::GoMod => Ok(parsers::parse_go_mod(content)),
            Self::CargoToml => parsers::parse_cargo_toml(content),
            Self::CsProj => parsers::parse_csproj(content),
            Self::Dockerfile | Self::DockerCompose | Self::DockerComposeYaml => return None,
        };
        Some(result)
    }

    /// Parses an already decoded JSON manifest.
    ///
    /// Returns `None` for kinds that are not JSON-flavoured.
    pub fn parse_json(
        self,
        value: &serde_json::Value,
    ) -> Option<Result<DependencyMap, ManifestError>> {
        match self {
            Self::PackageJson => Some(parsers::parse_package_json(value)),
            Self::ComposerJson => Some(parsers::parse_composer_json(value)),
            Self::Requirements
            | Self::Pyproject
            | Self::MavenPom
            | Self::GoMod
            | Self::CargoToml
            | Self::CsProj
            | Self::Dockerfile
            | Self::DockerCompose
            | Self::DockerComposeYaml => None,
        }
    }
}

/// Final `/`-separated segment of a path.
#[must_use]
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
