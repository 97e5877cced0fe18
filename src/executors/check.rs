//! Check command executor

use std::io::Read;

use console::style;
use miette::{Result, WrapErr};
use rayon::prelude::*;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::config::CheckConfig;
use crate::error::PipelineDagError;
use crate::executors::CommandExecutor;
use crate::pipeline::PipelineRequest;
use crate::pipeline_discovery::{PipelineDiscovery, PipelineInput};
use crate::progress::ProgressReporter;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, JunitReportGenerator,
    PipelineReport, ReportGenerator, cyclic_count,
};

/// Everything a check run produced, before anything is printed
#[derive(Debug)]
pub struct CheckOutcome {
    pub reports: Vec<PipelineReport>,
    pub rendered: String,
}

impl CheckOutcome {
    pub fn has_cycles(&self) -> bool {
        cyclic_count(&self.reports) > 0
    }
}

pub struct CheckExecutor;

impl CheckExecutor {
    /// Discover, evaluate and render every pipeline named by `config`
    ///
    /// A document that cannot be read or decoded fails the whole run.
    pub fn run(config: &CheckConfig, show_progress: bool) -> Result<CheckOutcome> {
        Self::run_with_stdin(config, show_progress, std::io::stdin())
    }

    /// Like [`CheckExecutor::run`], reading the `-` document from `stdin`
    ///
    /// `stdin` is only read when an input names it.
    pub fn run_with_stdin<R: Read>(
        config: &CheckConfig,
        show_progress: bool,
        stdin: R,
    ) -> Result<CheckOutcome> {
        let mut progress = if show_progress {
            ProgressReporter::for_terminal()
        } else {
            None
        };

        if let Some(p) = progress.as_mut() {
            p.start_discovery();
        }

        let inputs = PipelineDiscovery::new().discover_all(&config.inputs, progress.as_ref());

        if let Some(p) = progress.as_mut() {
            p.finish_discovery(inputs.len());
        }

        let stdin = if inputs.contains(&PipelineInput::Stdin) {
            Some(
                std::io::read_to_string(stdin)
                    .map_err(PipelineDagError::Io)
                    .wrap_err("Failed to read pipeline from standard input")?,
            )
        } else {
            None
        };

        let bar = progress.as_mut().map(|p| p.start_evaluation(inputs.len()));

        let mut reports = inputs
            .par_iter()
            .map(|input| -> Result<PipelineReport, PipelineDagError> {
                let request = match input {
                    PipelineInput::Stdin => PipelineRequest::from_json_str(
                        &input.display_name(),
                        stdin.as_deref().unwrap_or_default(),
                    ),
                    PipelineInput::File(path) => PipelineRequest::from_file(path),
                }?;

                let stats = request.evaluate();
                debug!(
                    source = %input.display_name(),
                    num_nodes = stats.num_nodes,
                    num_edges = stats.num_edges,
                    is_dag = stats.is_dag,
                    "evaluated pipeline"
                );

                if let Some(pb) = bar.as_ref() {
                    pb.inc(1);
                }

                Ok(PipelineReport::new(input.display_name(), stats))
            })
            .collect::<Result<Vec<_>, PipelineDagError>>()?;

        reports.sort_by(|a, b| a.source.cmp(&b.source));

        if let Some(p) = progress.as_mut() {
            p.finish_evaluation(cyclic_count(&reports));
        }

        let rendered = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_report(&reports),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&reports),
            OutputFormat::Junit => JunitReportGenerator::new().generate_report(&reports),
            OutputFormat::GitHub => GitHubReportGenerator::new().generate_report(&reports),
        }
        .wrap_err("Failed to generate report")?;

        Ok(CheckOutcome { reports, rendered })
    }
}

impl CommandExecutor for CheckExecutor {
    type Config = CheckConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Checking pipelines for cycles...\n",
            style("🔁").cyan()
        );

        let outcome = Self::run(&config, true)?;
        print!("{}", outcome.rendered);

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && outcome.has_cycles() {
            std::process::exit(1);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::common::{ConfigBuilder, InputSource};
    use crate::core::PipelineStats;

    fn config(root: &std::path::Path, format: OutputFormat) -> CheckConfig {
        CheckConfig::builder()
            .with_inputs(vec![InputSource::Pattern(root.display().to_string())])
            .with_format(format)
            .build()
            .unwrap()
    }

    #[test]
    fn test_run_evaluates_every_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(
            root.join("chain.json"),
            r#"{"nodes": [{"id": "A"}, {"id": "B"}],
                "edges": [{"id": "e1", "source": "A", "target": "B"}]}"#,
        )
        .unwrap();
        fs::write(
            root.join("loop.json"),
            r#"{"nodes": [{"id": "A"}],
                "edges": [{"id": "e1", "source": "A", "target": "A"}]}"#,
        )
        .unwrap();

        let outcome = CheckExecutor::run(&config(root, OutputFormat::Json), false).unwrap();

        assert_eq!(
            outcome
                .reports
                .iter()
                .map(|r| r.stats)
                .collect::<Vec<_>>(),
            vec![
                PipelineStats {
                    num_nodes: 2,
                    num_edges: 1,
                    is_dag: true,
                },
                PipelineStats {
                    num_nodes: 1,
                    num_edges: 1,
                    is_dag: false,
                },
            ]
        );
        assert!(outcome.has_cycles());
        assert!(outcome.rendered.contains(r#""all_dags": false"#));
    }

    #[test]
    fn test_run_fails_on_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("bad.json"), r#"{"nodes": "A"}"#).unwrap();

        let err = CheckExecutor::run(&config(temp_dir.path(), OutputFormat::Human), false)
            .unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }

    const CYCLE: &str = r#"{"nodes": [{"id": "A"}, {"id": "B"}],
        "edges": [{"id": "e1", "source": "A", "target": "B"},
                  {"id": "e2", "source": "B", "target": "A"}]}"#;

    #[test]
    fn test_run_reads_stdin() {
        let config = CheckConfig::builder()
            .with_inputs(InputSource::from_args(&[]))
            .with_format(OutputFormat::Json)
            .build()
            .unwrap();

        let outcome = CheckExecutor::run_with_stdin(&config, false, CYCLE.as_bytes()).unwrap();

        assert_eq!(
            outcome.reports,
            vec![PipelineReport::new(
                "<stdin>",
                PipelineStats {
                    num_nodes: 2,
                    num_edges: 2,
                    is_dag: false,
                },
            )]
        );
        assert!(outcome.rendered.contains(r#""source": "<stdin>""#));
    }

    #[test]
    fn test_run_mixes_stdin_and_files() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("flow.json");
        fs::write(&file, r#"{"nodes": [{"id": "A"}], "edges": []}"#).unwrap();

        let config = CheckConfig::builder()
            .with_inputs(InputSource::from_args(&[
                file.display().to_string(),
                "-".to_string(),
            ]))
            .with_format(OutputFormat::Human)
            .build()
            .unwrap();

        let outcome = CheckExecutor::run_with_stdin(&config, false, CYCLE.as_bytes()).unwrap();

        let mut sources: Vec<_> = outcome.reports.iter().map(|r| r.source.clone()).collect();
        let in_order = sources.clone();
        sources.sort();
        assert_eq!(in_order, sources);
        assert!(sources.contains(&"<stdin>".to_string()));
        assert!(sources.contains(&file.display().to_string()));

        let stdin_report = outcome
            .reports
            .iter()
            .find(|r| r.source == "<stdin>")
            .unwrap();
        assert!(!stdin_report.stats.is_dag);
        assert!(outcome.has_cycles());
    }

    #[test]
    fn test_stdin_untouched_without_dash() {
        let temp_dir = TempDir::new().unwrap();

        struct Unreadable;
        impl Read for Unreadable {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                panic!("stdin must not be read")
            }
        }

        let config = config(temp_dir.path(), OutputFormat::Json);
        let outcome = CheckExecutor::run_with_stdin(&config, false, Unreadable).unwrap();
        assert!(outcome.reports.is_empty());
    }

    #[test]
    fn test_run_with_nothing_found() {
        let temp_dir = TempDir::new().unwrap();

        let outcome =
            CheckExecutor::run(&config(temp_dir.path(), OutputFormat::Junit), false).unwrap();
        assert!(outcome.reports.is_empty());
        assert!(!outcome.has_cycles());
        assert!(outcome.rendered.contains(r#"tests="0" failures="0""#));
    }
}
