//! Scan settings.
//!
//! Settings come from an optional TOML file with kebab-case keys. Every key
//! is optional; omitted keys keep their defaults.
//!
//! ```toml
//! max-repositories = 15
//! snippet-length = 500
//! concurrency = 1
//! min-text-length = 100
//! ocr = true
//! ocr-dpi = 300
//! api-base-url = "https://api.github.com"
//! extra-excluded-directories = ["fixtures"]
//! ```

mod error;

pub use error::ConfigError;

use crate::discovery::MAX_REPOSITORIES;
use crate::document::ExtractOptions;
use crate::github::DEFAULT_API_BASE_URL;
use crate::tree::PathFilter;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use url::Url;

/// Label used in errors for settings that did not come from a file.
const DEFAULT_SOURCE: &str = "<defaults>";

/// Tunables for a scan.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct ScanSettings {
    /// Repositories inspected per user, most recently pushed first.
    pub max_repositories: usize,

    /// Characters of transcript included in the report.
    pub snippet_length: usize,

    /// Repositories of one user processed concurrently.
    pub concurrency: usize,

    /// Native text shorter than this triggers the OCR fallback.
    pub min_text_length: usize,

    /// Whether the OCR fallback is enabled.
    pub ocr: bool,

    /// Rasterisation resolution for OCR.
    pub ocr_dpi: u32,

    /// Code-hosting API endpoint.
    pub api_base_url: String,

    /// Directory names excluded in addition to the built-in set.
    pub extra_excluded_directories: Vec<String>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        let extract = ExtractOptions::default();
        Self {
            max_repositories: MAX_REPOSITORIES,
            snippet_length: 500,
            concurrency: 1,
            min_text_length: extract.min_text_length,
            ocr: extract.ocr,
            ocr_dpi: extract.ocr_dpi,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            extra_excluded_directories: Vec::new(),
        }
    }
}

impl ScanSettings {
    /// Loads and validates settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, parsed, or fails
    /// validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading settings");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_toml(&content, &path.display().to_string())
    }

    /// Parses and validates settings from TOML text. `source` names the
    /// origin in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on parse or validation failure.
    pub fn from_toml(content: &str, source: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content).map_err(|e| ConfigError::TomlError {
            path: source.to_string(),
            source: e,
        })?;
        settings.validate(source)?;
        Ok(settings)
    }

    /// Checks value ranges and the API URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] describing the first problem.
    pub fn validate(&self, source: &str) -> Result<(), ConfigError> {
        let invalid = |message: &str| ConfigError::ValidationError {
            path: source.to_string(),
            message: message.to_string(),
        };

        if self.max_repositories == 0 {
            return Err(invalid("max-repositories must be at least 1"));
        }
        if self.concurrency == 0 {
            return Err(invalid("concurrency must be at least 1"));
        }
        if self.snippet_length == 0 {
            return Err(invalid("snippet-length must be at least 1"));
        }
        if self.ocr_dpi == 0 {
            return Err(invalid("ocr-dpi must be at least 1"));
        }
        if self
            .extra_excluded_directories
            .iter()
            .any(|dir| dir.is_empty() || dir.contains('/'))
        {
            return Err(invalid(
                "extra-excluded-directories entries must be single path segments",
            ));
        }

        self.parse_api_base_url(source)?;
        Ok(())
    }

    /// Returns the parsed API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if the URL is not http(s).
    pub fn api_base_url(&self) -> Result<Url, ConfigError> {
        self.parse_api_base_url(DEFAULT_SOURCE)
    }

    fn parse_api_base_url(&self, source: &str) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.api_base_url).map_err(|e| ConfigError::ValidationError {
            path: source.to_string(),
            message: format!("api-base-url is not a valid URL: {e}"),
        })?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ConfigError::ValidationError {
                path: source.to_string(),
                message: format!("api-base-url must be an http(s) URL: {}", self.api_base_url),
            });
        }
        Ok(url)
    }

    /// Extraction options derived from these settings.
    #[must_use]
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            min_text_length: self.min_text_length,
            ocr: self.ocr,
            ocr_dpi: self.ocr_dpi,
        }
    }

    /// Path filter derived from these settings.
    #[must_use]
    pub fn path_filter(&self) -> PathFilter {
        PathFilter::new(self.extra_excluded_directories.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_file_uses_defaults() {
        let settings = ScanSettings::from_toml("", "test").unwrap();
        assert_eq!(settings, ScanSettings::default());
        assert_eq!(settings.max_repositories, 15);
        assert_eq!(settings.snippet_length, 500);
        assert_eq!(settings.concurrency, 1);
    }

    #[test]
    fn load_reads_kebab_case_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scan.toml");
        fs::write(
            &path,
            r#"
max-repositories = 5
concurrency = 4
ocr = false
api-base-url = "https://ghe.example.com/api/v3"
extra-excluded-directories = ["fixtures"]
"#,
        )
        .unwrap();

        let settings = ScanSettings::load(&path).unwrap();
        assert_eq!(settings.max_repositories, 5);
        assert_eq!(settings.concurrency, 4);
        assert!(!settings.ocr);
        assert_eq!(settings.extra_excluded_directories, ["fixtures"]);
        assert_eq!(
            settings.api_base_url().unwrap().host_str(),
            Some("ghe.example.com")
        );
        assert!(!settings.path_filter().is_valid_path("fixtures/package.json"));
    }

    #[test]
    fn load_missing_file() {
        let result = ScanSettings::load(Path::new("/no/such/scan.toml"));
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn rejects_unknown_keys() {
        let result = ScanSettings::from_toml("max-repos = 3", "test");
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }

    #[test]
    fn rejects_zero_limits() {
        let result = ScanSettings::from_toml("max-repositories = 0", "test");
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));

        let result = ScanSettings::from_toml("concurrency = 0", "test");
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let result = ScanSettings::from_toml("api-base-url = \"ftp://example.com\"", "test");
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));

        let result = ScanSettings::from_toml("api-base-url = \"not a url\"", "test");
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn rejects_nested_exclusions() {
        let result = ScanSettings::from_toml("extra-excluded-directories = [\"a/b\"]", "test");
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
