//! Report types and aggregation.

mod report;
mod repo_scan;

pub use repo_scan::RepoScan;
pub use report::{FinalReport, RepoReport, ReportBuilder, UserReport};
