//! Dependency-manifest registry.
//!
//! Maps manifest file names (or suffixes) to an ecosystem and a parser. The
//! registry is a closed enum, [`ManifestKind`], so adding a grammar means
//! adding a variant and handling it everywhere the compiler points.

mod error;
mod kind;
mod parsers;

pub use error::ManifestError;
pub use kind::{file_name, Ecosystem, ManifestKind};
pub use parsers::{
    parse_cargo_toml, parse_composer_json, parse_csproj, parse_go_mod, parse_package_json,
    parse_pom, parse_pyproject, parse_requirements,
};

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

/// Dependency name mapped to its declared version or requirement string.
pub type DependencyMap = BTreeMap<String, String>;

/// Value recorded for dependencies declared without an explicit version.
pub const MANAGED: &str = "managed";

/// A manifest found in a repository and the dependencies it declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestRecord {
    /// Repository-relative path of the manifest.
    pub path: String,

    /// Ecosystem the manifest belongs to.
    pub ecosystem: Ecosystem,

    /// Declared dependencies; `None` for presence-only manifests.
    pub dependencies: Option<DependencyMap>,
}

impl ManifestKind {
    /// Parses `content`, degrading any parse failure to an empty map.
    ///
    /// Returns `None` only for presence-only kinds.
    pub fn dependencies(self, path: &str, content: &str) -> Option<DependencyMap> {
        self.parse(content).map(|result| lenient(path, result))
    }
}

/// Logs a parse failure and substitutes an empty map.
pub(crate) fn lenient(path: &str, result: Result<DependencyMap, ManifestError>) -> DependencyMap {
    result.unwrap_or_else(|e| {
        warn!(path, error = %e, "Failed to parse manifest, treating as empty");
        DependencyMap::new()
    })
}
