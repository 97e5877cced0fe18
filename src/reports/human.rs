//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{PipelineReport, ReportGenerator, cyclic_count};
use crate::error::PipelineDagError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, reports: &[PipelineReport]) -> Result<String, PipelineDagError> {
        let mut output = String::new();

        if reports.is_empty() {
            writeln!(output, "\n{} No pipelines were checked.", style("ℹ").blue())?;
            return Ok(output);
        }

        writeln!(output)?;
        let width = reports
            .iter()
            .map(|report| report.source.chars().count())
            .max()
            .unwrap_or(0);

        for report in reports {
            let stats = report.stats;
            let (marker, verdict) = if stats.is_dag {
                (style("✅").green(), style("DAG".to_string()).green())
            } else {
                (style("❌").red(), style("contains a cycle".to_string()).red().bold())
            };

            writeln!(
                output,
                "{} {:<width$}  {} {}, {} {}  {}",
                marker,
                report.source,
                stats.num_nodes,
                pluralize("node", stats.num_nodes),
                stats.num_edges,
                pluralize("edge", stats.num_edges),
                verdict,
            )?;
        }

        let cyclic = cyclic_count(reports);
        writeln!(
            output,
            "\nChecked {} {}: {} acyclic, {} with cycles.",
            style(reports.len()).bold(),
            pluralize("pipeline", reports.len()),
            style(reports.len() - cyclic).green().bold(),
            style(cyclic).red().bold(),
        )?;

        if cyclic > 0 {
            writeln!(
                output,
                "\n{} A pipeline with a cycle never finishes: some node waits on its own output.",
                style("💡").yellow()
            )?;
            writeln!(
                output,
                "{} Remove at least one edge from each loop to make the pipeline runnable.",
                style("💡").yellow()
            )?;
        }

        Ok(output)
    }
}
