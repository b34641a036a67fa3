//! Repository enumeration for a user handle.
//!
//! Lists a user's repositories page by page, ranks them by last push and
//! keeps a bounded working set.

use crate::github::{CodeHost, RemoteRepository};
use serde::Serialize;
use tracing::{debug, info, info_span, warn, Instrument};

/// Default size of the per-user working set.
pub const MAX_REPOSITORIES: usize = 15;

/// Branch assumed when the API does not report a default branch.
const FALLBACK_BRANCH: &str = "main";

/// A repository selected for inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositorySummary {
    /// Repository name.
    pub name: String,

    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Default branch name (e.g., "main").
    pub default_branch: String,
}

impl From<RemoteRepository> for RepositorySummary {
    fn from(repo: RemoteRepository) -> Self {
        Self {
            name: repo.name,
            full_name: repo.full_name,
            default_branch: repo
                .default_branch
                .unwrap_or_else(|| FALLBACK_BRANCH.to_string()),
        }
    }
}

/// Lists up to `limit` of `user`'s repositories, most recently pushed first.
///
/// Pagination follows the `next` relation until it is exhausted. A failed
/// page ends pagination and whatever was collected so far is used, so this
/// never fails; an unknown user yields an empty list.
pub async fn enumerate_repositories<H: CodeHost + ?Sized>(
    host: &H,
    user: &str,
    limit: usize,
) -> Vec<RepositorySummary> {
    let span = info_span!("enumerate", user = %user);

    async {
        let repositories = list_all_repositories(host, user).await;
        let total = repositories.len();
        let selected = select_recent(repositories, limit);

        info!(total, selected = selected.len(), "Enumerated repositories");
        selected
    }
    .instrument(span)
    .await
}

/// Collects every page of the listing, stopping at the first failure.
async fn list_all_repositories<H: CodeHost + ?Sized>(
    host: &H,
    user: &str,
) -> Vec<RemoteRepository> {
    let mut all_results = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = match host.repositories_page(user, cursor.as_deref()).await {
            Ok(page) => page,
            Err(e) => {
                warn!(
                    collected = all_results.len(),
                    error = %e,
                    "Repository listing stopped early"
                );
                break;
            }
        };

        debug!(count = page.items.len(), "Fetched repository page");
        all_results.extend(page.items);

        match page.next {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    all_results
}

/// Sorts by last push (descending, missing timestamps last) and keeps the
/// first `limit`.
///
/// The sort is stable, so repositories with equal timestamps keep their
/// listing order.
fn select_recent(mut repositories: Vec<RemoteRepository>, limit: usize) -> Vec<RepositorySummary> {
    repositories.sort_by(|a, b| {
        let a = a.pushed_at.as_deref().unwrap_or_default();
        let b = b.pushed_at.as_deref().unwrap_or_default();
        b.cmp(a)
    });
    repositories
        .into_iter()
        .take(limit)
        .map(RepositorySummary::from)
        .collect()
}
