//! GitHub Actions format report generation

use std::fmt::Write;

use super::{PipelineReport, ReportGenerator, cyclic_count};
use crate::constants::output::STDIN_NAME;
use crate::error::PipelineDagError;
use crate::utils::string::{github_data_escape, github_property_escape, pluralize};

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, reports: &[PipelineReport]) -> Result<String, PipelineDagError> {
        let mut output = String::new();
        let cyclic = cyclic_count(reports);

        if cyclic == 0 {
            writeln!(
                output,
                "::notice title=Pipeline Check::All {} {} acyclic ✅",
                reports.len(),
                pluralize("pipeline", reports.len()),
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "::error title=Pipeline Cycles::Found {} {} with cycles",
            cyclic,
            pluralize("pipeline", cyclic),
        )?;

        let mut sorted: Vec<_> = reports.iter().filter(|r| !r.stats.is_dag).collect();
        sorted.sort_by(|a, b| a.source.cmp(&b.source));

        for report in sorted {
            // Annotations can only point at files in the checkout
            let mut properties = Vec::new();
            if report.source != STDIN_NAME {
                properties.push(format!("file={}", github_property_escape(&report.source)));
            }
            properties.push("title=Cycle".to_string());

            writeln!(
                output,
                "::warning {}::{} has a cycle ({} {}, {} {})",
                properties.join(","),
                github_data_escape(&report.source),
                report.stats.num_nodes,
                pluralize("node", report.stats.num_nodes),
                report.stats.num_edges,
                pluralize("edge", report.stats.num_edges),
            )?;
        }

        writeln!(
            output,
            "::notice title=Recommendation::Remove at least one edge from each loop so every \
             node can run after its inputs."
        )?;

        Ok(output)
    }
}
