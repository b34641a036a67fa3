//! Runner error types.

/// Fatal errors for a scan. Everything else degrades into the report.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Settings loading or validation errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Input document errors.
    #[error(transparent)]
    Extract(#[from] crate::document::ExtractError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Host(#[from] crate::github::HostError),
}
