//! Manifest parsing error types.

use thiserror::Error;

/// Errors raised while parsing a single manifest file.
///
/// These never escape the pipeline: callers log them and treat the manifest
/// as declaring no dependencies.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Content was not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Content was not valid TOML.
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Content was not well-formed XML.
    #[error("Invalid XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Parsed document did not have the expected shape.
    #[error("Unexpected manifest structure: {0}")]
    Structure(String),
}
