//! Code-host error types.

use thiserror::Error;

/// Errors returned by a [`CodeHost`](super::CodeHost) call.
///
/// The pipeline treats every variant as "no data from this call".
#[derive(Debug, Error)]
pub enum HostError {
    /// Transport, decoding or client construction error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The API answered `route` with an error status.
    #[error("Request to '{route}' failed with status {status}")]
    Status { route: String, status: u16 },

    /// The configured API base URL cannot be extended with a path.
    #[error("API base URL cannot be used as a base: {0}")]
    InvalidBaseUrl(String),
}
