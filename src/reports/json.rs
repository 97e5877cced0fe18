//! JSON format report generation

use serde_json::json;

use super::{PipelineReport, ReportGenerator, cyclic_count};
use crate::error::PipelineDagError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, reports: &[PipelineReport]) -> Result<String, PipelineDagError> {
        let mut pipelines: Vec<_> = reports
            .iter()
            .map(|report| {
                json!({
                    "source": report.source,
                    "num_nodes": report.stats.num_nodes,
                    "num_edges": report.stats.num_edges,
                    "is_dag": report.stats.is_dag,
                })
            })
            .collect();

        // Sort by source for consistent ordering
        pipelines.sort_by(|a, b| {
            let a_source = a["source"].as_str().unwrap_or("");
            let b_source = b["source"].as_str().unwrap_or("");
            a_source.cmp(b_source)
        });

        let report = json!({
            "pipeline_count": reports.len(),
            "all_dags": cyclic_count(reports) == 0,
            "pipelines": pipelines,
        });

        serde_json::to_string_pretty(&report).map_err(PipelineDagError::Json)
    }
}
