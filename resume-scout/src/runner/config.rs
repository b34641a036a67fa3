//! Runner configuration.

use crate::config::ScanSettings;
use std::path::{Path, PathBuf};

/// Configuration for scanning one document.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the résumé document.
    document_path: PathBuf,
    /// GitHub token; unauthenticated requests are used when absent.
    token: Option<String>,
    /// Scan tunables.
    settings: ScanSettings,
    /// Whether to include transcript analysis and manifest records.
    detailed: bool,
}

impl RunnerConfig {
    /// Creates a configuration with default settings.
    pub fn new(document_path: PathBuf, token: Option<String>) -> Self {
        Self {
            document_path,
            token: token.filter(|token| !token.trim().is_empty()),
            settings: ScanSettings::default(),
            detailed: false,
        }
    }

    /// Replaces the scan settings.
    pub fn with_settings(mut self, settings: ScanSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Enables detailed output.
    pub fn with_detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }

    /// Returns the document path.
    pub fn document_path(&self) -> &Path {
        &self.document_path
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the scan settings.
    pub fn settings(&self) -> &ScanSettings {
        &self.settings
    }

    /// Returns whether detailed output is enabled.
    pub fn detailed(&self) -> bool {
        self.detailed
    }
}
