#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod content;
pub mod discovery;
pub mod document;
pub mod github;
pub mod links;
pub mod manifests;
pub mod runner;
pub mod sections;
pub mod skills;
pub mod summary;
pub mod tree;

pub use config::{ConfigError, ScanSettings};
pub use content::{decode_content, fetch_manifest, parse_manifest};
pub use discovery::{enumerate_repositories, RepositorySummary, MAX_REPOSITORIES};
pub use document::{clean_text, extract_document, ExtractError, ExtractOptions, ExtractedDocument};
pub use github::{
    CodeHost, EntryKind, FileContent, GitHubHost, HostError, RemoteRepository, RepoPage, Tree,
    TreeEntry,
};
pub use links::{extract_links, normalize_link, user_handle, user_handles};
pub use manifests::{
    DependencyMap, Ecosystem, ManifestError, ManifestKind, ManifestRecord, MANAGED,
};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use sections::Section;
pub use summary::{FinalReport, RepoReport, RepoScan, ReportBuilder, UserReport};
pub use tree::{find_manifest_paths, PathFilter, EXCLUDED_DIRECTORIES};
