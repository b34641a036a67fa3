//! Wire types returned by the code-hosting API.

use serde::Deserialize;

/// A repository as listed for a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteRepository {
    /// Repository name.
    pub name: String,

    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Default branch name, absent for empty repositories.
    #[serde(default)]
    pub default_branch: Option<String>,

    /// ISO-8601 timestamp of the last push.
    #[serde(default)]
    pub pushed_at: Option<String>,
}

/// One page of a user's repository listing.
#[derive(Debug, Clone, Default)]
pub struct RepoPage {
    /// Repositories on this page.
    pub items: Vec<RemoteRepository>,

    /// Opaque cursor for the next page, taken from the `next` link relation.
    pub next: Option<String>,
}

/// Kind of a tree entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Blob,
    Tree,
    Commit,
    #[serde(other)]
    Other,
}

/// A single entry of a recursive git tree listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TreeEntry {
    /// Path relative to the repository root.
    pub path: String,

    /// Entry kind (`blob` for files).
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl TreeEntry {
    /// Creates a file entry.
    pub fn blob(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Blob,
        }
    }

    /// Creates a directory entry.
    pub fn dir(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Tree,
        }
    }
}

/// A recursive tree listing for one commit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tree {
    #[serde(default)]
    pub tree: Vec<TreeEntry>,

    /// Set by the API when the listing exceeded its size limit.
    #[serde(default)]
    pub truncated: bool,
}

/// Encoded file content as returned by the contents endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct FileContent {
    /// Encoded content, possibly wrapped across lines.
    #[serde(default)]
    pub content: String,

    /// Content encoding, normally `base64`.
    #[serde(default)]
    pub encoding: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GitRef {
    pub object: GitObject,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GitObject {
    pub sha: String,
}
