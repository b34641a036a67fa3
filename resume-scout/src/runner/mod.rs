//! Orchestrates a document scan.
//!
//! document → links → users → repositories → manifest paths → manifests,
//! folded into one [`FinalReport`]. Only input problems are fatal; every
//! remote call fails on its own without affecting its siblings.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::content::fetch_manifest;
use crate::discovery::{enumerate_repositories, RepositorySummary};
use crate::document::{extract_document, ExtractedDocument};
use crate::github::{CodeHost, GitHubHost};
use crate::links::{extract_links, user_handles};
use crate::summary::{FinalReport, RepoScan, ReportBuilder};
use crate::tree::{find_manifest_paths, PathFilter};
use crate::{sections, skills};
use futures::stream::{self, StreamExt};
use tracing::{debug, info, info_span, Instrument};

/// Scans a résumé and the code repositories it links to.
pub struct Runner<H = GitHubHost> {
    config: RunnerConfig,
    host: H,
}

impl Runner<GitHubHost> {
    /// Builds a runner backed by the GitHub API.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the API URL is invalid or the client
    /// cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let base_url = config.settings().api_base_url()?;
        let host = GitHubHost::new(config.token(), &base_url)?;
        Ok(Self { config, host })
    }
}

impl<H: CodeHost> Runner<H> {
    /// Builds a runner over any code host.
    pub fn with_host(config: RunnerConfig, host: H) -> Self {
        Self { config, host }
    }

    /// Extracts the configured document and scans it.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Extract`] if the document is missing or
    /// unreadable.
    pub async fn run(&self) -> Result<FinalReport, RunnerError> {
        let path = self.config.document_path();
        info!(path = %path.display(), "Extracting document");

        let options = self.config.settings().extract_options();
        let document = extract_document(path, &options).await?;
        Ok(self.scan_document(&document).await)
    }

    /// Scans an already extracted document.
    pub async fn scan_document(&self, document: &ExtractedDocument) -> FinalReport {
        let settings = self.config.settings();
        let mut builder =
            ReportBuilder::new(document.snippet(settings.snippet_length), self.config.detailed());

        if self.config.detailed() {
            builder.attach_analysis(
                sections::segment(&document.text),
                skills::detect(&document.text),
            );
        }

        let links = extract_links(&document.text, &document.annotation_uris);
        let users = user_handles(&links);
        info!(links = links.len(), users = users.len(), "Found profile links");

        let filter = settings.path_filter();
        for user in users {
            builder.begin_user(user.as_str());

            let span = info_span!("user", user = %user);
            let scans = self.scan_user(&user, &filter).instrument(span).await;
            for scan in scans {
                builder.record_repository(scan);
            }
        }

        builder.finish()
    }

    /// Scans a user's working set of repositories.
    ///
    /// Up to `concurrency` repositories are in flight at once; results keep
    /// the enumeration order.
    async fn scan_user(&self, user: &str, filter: &PathFilter) -> Vec<RepoScan> {
        let settings = self.config.settings();
        let repositories =
            enumerate_repositories(&self.host, user, settings.max_repositories).await;

        stream::iter(repositories)
            .map(|repository| {
                let span = info_span!("repo", repo = %repository.full_name);
                scan_repository(&self.host, repository, filter).instrument(span)
            })
            .buffered(settings.concurrency.max(1))
            .collect()
            .await
    }
}

/// Collects the manifests of one repository.
async fn scan_repository<H: CodeHost + ?Sized>(
    host: &H,
    repository: RepositorySummary,
    filter: &PathFilter,
) -> RepoScan {
    let paths = find_manifest_paths(host, &repository, filter).await;
    let mut scan = RepoScan::new(repository.name.as_str());

    for path in &paths {
        if let Some(record) = fetch_manifest(host, &repository, path).await {
            scan.record(record);
        }
    }

    debug!(
        candidates = paths.len(),
        ecosystems = scan.ecosystems.len(),
        "Scanned repository"
    );
    scan
}
