//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - junit: JUnit XML format for CI/CD integration
//! - github: GitHub Actions workflow annotations

pub mod github;
pub mod human;
pub mod json;
pub mod junit;

use crate::core::PipelineStats;
use crate::error::PipelineDagError;

/// Evaluation result for one pipeline document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    /// File path, or `<stdin>`
    pub source: String,
    pub stats: PipelineStats,
}

impl PipelineReport {
    pub fn new(source: impl Into<String>, stats: PipelineStats) -> Self {
        Self {
            source: source.into(),
            stats,
        }
    }
}

/// Number of reports whose pipeline contains a cycle
pub fn cyclic_count(reports: &[PipelineReport]) -> usize {
    reports.iter().filter(|report| !report.stats.is_dag).count()
}

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from pipeline evaluation results
    fn generate_report(&self, reports: &[PipelineReport]) -> Result<String, PipelineDagError>;
}

// Re-export for convenience
pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use junit::JunitReportGenerator;
