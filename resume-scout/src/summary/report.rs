//! Final report types.

use super::repo_scan::RepoScan;
use crate::manifests::{Ecosystem, ManifestRecord};
use crate::sections::Section;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Ecosystems found in one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoReport {
    /// Repository name.
    pub name: String,

    /// Distinct ecosystems in first-seen order.
    pub ecosystems: Vec<Ecosystem>,

    /// Manifest records, only in detailed reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifests: Option<Vec<ManifestRecord>>,
}

/// Repositories reported for one user, in processing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserReport {
    pub username: String,
    pub repos: Vec<RepoReport>,
}

/// Result of scanning one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FinalReport {
    /// Leading characters of the transcript.
    pub raw_text_snippet: String,

    /// Users found in the document.
    pub github_users: Vec<UserReport>,

    /// Number of repositories in which each ecosystem was found.
    pub tech_stack_found: BTreeMap<Ecosystem, usize>,

    /// Transcript segmented by section, only in detailed reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<BTreeMap<Section, String>>,

    /// Technologies mentioned in the transcript, only in detailed reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<BTreeSet<&'static str>>,
}

/// Folds repository scans into a [`FinalReport`].
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    report: FinalReport,
    detailed: bool,
}

impl ReportBuilder {
    /// Creates a builder; `detailed` keeps manifest records in the output.
    #[must_use]
    pub fn new(raw_text_snippet: String, detailed: bool) -> Self {
        Self {
            report: FinalReport {
                raw_text_snippet,
                ..Default::default()
            },
            detailed,
        }
    }

    /// Starts the report for a user.
    pub fn begin_user(&mut self, username: impl Into<String>) {
        self.report.github_users.push(UserReport {
            username: username.into(),
            repos: Vec::new(),
        });
    }

    /// Records a scanned repository under the most recent user.
    ///
    /// Repositories without any ecosystem are dropped. Every ecosystem of
    /// the scan adds one to its global count.
    pub fn record_repository(&mut self, scan: RepoScan) {
        if scan.is_empty() {
            return;
        }
        let Some(user) = self.report.github_users.last_mut() else {
            return;
        };

        for ecosystem in &scan.ecosystems {
            *self.report.tech_stack_found.entry(*ecosystem).or_insert(0) += 1;
        }
        user.repos.push(RepoReport {
            name: scan.name,
            ecosystems: scan.ecosystems,
            manifests: self.detailed.then_some(scan.manifests),
        });
    }

    /// Attaches transcript analysis to the report.
    pub fn attach_analysis(
        &mut self,
        sections: BTreeMap<Section, String>,
        skills: BTreeSet<&'static str>,
    ) {
        self.report.sections = Some(sections);
        self.report.skills = Some(skills);
    }

    /// Finishes the report.
    #[must_use]
    pub fn finish(self) -> FinalReport {
        self.report
    }
}
