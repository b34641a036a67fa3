//! Boundary to the code-hosting service.
//!
//! The pipeline only talks to [`CodeHost`]; [`GitHubHost`] is the production
//! implementation and tests substitute an in-memory host.

mod client;
mod error;
mod models;

pub use client::{GitHubHost, DEFAULT_API_BASE_URL};
pub use error::HostError;
pub use models::{EntryKind, FileContent, RemoteRepository, RepoPage, Tree, TreeEntry};

use async_trait::async_trait;

/// The remote calls the pipeline needs from a code-hosting API.
///
/// Every call is independent: an error means "no data from this call" and
/// never poisons later calls.
#[async_trait]
pub trait CodeHost: Send + Sync {
    /// Fetches one page of `user`'s repositories. `cursor` is the `next`
    /// value of the previous page, or `None` for the first page.
    async fn repositories_page(
        &self,
        user: &str,
        cursor: Option<&str>,
    ) -> Result<RepoPage, HostError>;

    /// Resolves a branch name to a commit SHA.
    async fn resolve_branch(&self, full_name: &str, branch: &str) -> Result<String, HostError>;

    /// Lists the full recursive tree of a commit.
    async fn tree(&self, full_name: &str, sha: &str) -> Result<Tree, HostError>;

    /// Fetches the encoded content of one file at a ref.
    async fn file_content(
        &self,
        full_name: &str,
        path: &str,
        git_ref: &str,
    ) -> Result<FileContent, HostError>;
}
