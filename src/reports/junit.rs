//! JUnit XML format report generation

use std::fmt::Write;

use super::{PipelineReport, ReportGenerator, cyclic_count};
use crate::error::PipelineDagError;
use crate::utils::string::{pluralize, xml_escape};

pub struct JunitReportGenerator;

impl Default for JunitReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JunitReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JunitReportGenerator {
    fn generate_report(&self, reports: &[PipelineReport]) -> Result<String, PipelineDagError> {
        let mut output = String::new();
        let failures = cyclic_count(reports);

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="pipeline-dag" tests="{}" failures="{failures}">"#,
            reports.len()
        )?;
        writeln!(
            output,
            r#"  <testsuite name="pipeline-cycles" tests="{}" failures="{failures}">"#,
            reports.len()
        )?;

        for report in reports {
            let name = xml_escape(&report.source);
            if report.stats.is_dag {
                writeln!(
                    output,
                    r#"    <testcase name="{name}" classname="pipeline-dag" />"#
                )?;
                continue;
            }

            writeln!(
                output,
                r#"    <testcase name="{name}" classname="pipeline-dag">"#
            )?;
            writeln!(output, r#"      <failure message="Pipeline contains a cycle">"#)?;
            writeln!(
                output,
                "{name} has {} {} and {} {}, and at least one of its edges closes a loop.",
                report.stats.num_nodes,
                pluralize("node", report.stats.num_nodes),
                report.stats.num_edges,
                pluralize("edge", report.stats.num_edges),
            )?;
            writeln!(output, r#"      </failure>"#)?;
            writeln!(output, r#"    </testcase>"#)?;
        }

        writeln!(output, r#"  </testsuite>"#)?;
        writeln!(output, r#"</testsuites>"#)?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PipelineStats;
    use crate::reports::fixtures::sample_reports;

    #[test]
    fn test_junit_report_counts_failures() {
        let report = JunitReportGenerator::new()
            .generate_report(&sample_reports())
            .unwrap();

        assert!(report.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(report.contains(r#"<testsuites name="pipeline-dag" tests="2" failures="1">"#));
        assert!(
            report.contains(r#"<testcase name="pipelines/chat.json" classname="pipeline-dag" />"#)
        );
        assert!(report.contains(r#"<failure message="Pipeline contains a cycle">"#));
        assert!(report.contains("pipelines/loop.json has 2 nodes and 2 edges"));
    }

    #[test]
    fn test_junit_report_escapes_names() {
        let reports = vec![PipelineReport::new(
            "a&b<c>.json",
            PipelineStats {
                num_nodes: 0,
                num_edges: 0,
                is_dag: true,
            },
        )];

        let report = JunitReportGenerator::new().generate_report(&reports).unwrap();
        assert!(report.contains(r#"name="a&amp;b&lt;c&gt;.json""#));
    }

    #[test]
    fn test_junit_report_empty() {
        let report = JunitReportGenerator::new().generate_report(&[]).unwrap();
        assert!(report.contains(r#"tests="0" failures="0""#));
        assert!(report.trim_end().ends_with("</testsuites>"));
    }
}
