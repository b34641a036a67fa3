//! Per-repository accumulation.

use crate::manifests::{Ecosystem, ManifestRecord};

/// Manifests found while scanning one repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoScan {
    /// Repository name.
    pub name: String,

    /// Distinct ecosystems in first-seen order.
    pub ecosystems: Vec<Ecosystem>,

    /// Every manifest record, in tree order.
    pub manifests: Vec<ManifestRecord>,
}

impl RepoScan {
    /// Creates an empty scan for a repository.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Adds a manifest record.
    ///
    /// Its ecosystem joins `ecosystems` only on first sighting, so each
    /// ecosystem counts at most once per repository.
    pub fn record(&mut self, record: ManifestRecord) {
        if !self.ecosystems.contains(&record.ecosystem) {
            self.ecosystems.push(record.ecosystem);
        }
        self.manifests.push(record);
    }

    /// Returns true if no ecosystem was detected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ecosystems.is_empty()
    }
}
