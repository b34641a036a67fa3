//! Remote tree walking and manifest candidate filtering.

use crate::discovery::RepositorySummary;
use crate::github::{CodeHost, EntryKind, TreeEntry};
use crate::manifests::{file_name, ManifestKind};
use tracing::{debug, warn};

/// Directory names whose contents are never inspected: dependency caches,
/// VCS metadata and build outputs.
pub const EXCLUDED_DIRECTORIES: &[&str] = &[
    "node_modules",
    "bower_components",
    "vendor",
    "venv",
    ".venv",
    "env",
    "site-packages",
    ".git",
    ".svn",
    ".hg",
    "dist",
    "build",
    "out",
    "target",
    "bin",
    "obj",
    ".next",
    ".gradle",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    ".tox",
    ".cache",
];

/// Path-exclusion rules applied to tree entries.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    extra_excluded: Vec<String>,
}

impl PathFilter {
    /// Creates a filter with additional excluded directory names.
    pub fn new(extra_excluded: impl IntoIterator<Item = String>) -> Self {
        Self {
            extra_excluded: extra_excluded.into_iter().collect(),
        }
    }

    fn is_excluded(&self, segment: &str) -> bool {
        EXCLUDED_DIRECTORIES.contains(&segment) || self.extra_excluded.iter().any(|d| d == segment)
    }

    /// Returns true if no `/`-separated segment of `path` is excluded.
    #[must_use]
    pub fn is_valid_path(&self, path: &str) -> bool {
        !path.split('/').any(|segment| self.is_excluded(segment))
    }

    /// Returns the manifest kind if `entry` is a qualifying manifest file.
    #[must_use]
    pub fn manifest_kind(&self, entry: &TreeEntry) -> Option<ManifestKind> {
        if entry.kind != EntryKind::Blob || !self.is_valid_path(&entry.path) {
            return None;
        }
        ManifestKind::from_file_name(file_name(&entry.path))
    }

    /// Filters a tree listing down to manifest paths, keeping tree order.
    #[must_use]
    pub fn manifest_paths(&self, entries: &[TreeEntry]) -> Vec<String> {
        entries
            .iter()
            .filter(|entry| self.manifest_kind(entry).is_some())
            .map(|entry| entry.path.clone())
            .collect()
    }
}

/// Lists candidate manifest paths on a repository's default branch.
///
/// A branch that cannot be resolved, or a tree that cannot be fetched,
/// yields an empty list.
pub async fn find_manifest_paths<H: CodeHost + ?Sized>(
    host: &H,
    repository: &RepositorySummary,
    filter: &PathFilter,
) -> Vec<String> {
    let sha = match host
        .resolve_branch(&repository.full_name, &repository.default_branch)
        .await
    {
        Ok(sha) => sha,
        Err(e) => {
            warn!(
                branch = %repository.default_branch,
                error = %e,
                "Failed to resolve branch"
            );
            return Vec::new();
        }
    };

    let tree = match host.tree(&repository.full_name, &sha).await {
        Ok(tree) => tree,
        Err(e) => {
            warn!(sha = %sha, error = %e, "Failed to fetch tree");
            return Vec::new();
        }
    };

    if tree.truncated {
        warn!(sha = %sha, "Tree listing was truncated, results may be incomplete");
    }

    let paths = filter.manifest_paths(&tree.tree);
    debug!(entries = tree.tree.len(), candidates = paths.len(), "Filtered tree");
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excluded_segments_reject_paths() {
        let filter = PathFilter::default();
        assert!(!filter.is_valid_path("vendor/go.mod"));
        assert!(!filter.is_valid_path("web/node_modules/react/package.json"));
        assert!(filter.is_valid_path("src/go.mod"));
        assert!(filter.is_valid_path("vendored/go.mod"));
    }

    #[test]
    fn extra_exclusions_apply() {
        let filter = PathFilter::new(["fixtures".to_string()]);
        assert!(!filter.is_valid_path("tests/fixtures/package.json"));
        assert!(filter.is_valid_path("tests/package.json"));
    }

    #[test]
    fn only_manifest_blobs_qualify() {
        let filter = PathFilter::default();
        let entries = vec![
            TreeEntry::blob("package.json"),
            TreeEntry::dir("Cargo.toml"),
            TreeEntry::blob("README.md"),
            TreeEntry::blob("vendor/go.mod"),
            TreeEntry::blob("src/go.mod"),
            TreeEntry::blob("api/Api.csproj"),
            TreeEntry::blob("deploy/Dockerfile"),
        ];

        assert_eq!(
            filter.manifest_paths(&entries),
            ["package.json", "src/go.mod", "api/Api.csproj", "deploy/Dockerfile"]
        );
    }
}
