//! # Pipeline DAG - Check Pipeline Graphs for Cycles
//!
//! A pipeline is a set of nodes joined by directed edges. It can only run if
//! it is a directed acyclic graph: when some node (transitively) feeds its
//! own input, the pipeline never finishes. This crate answers that question
//! for the pipeline editor over HTTP, and for pipeline files on the command
//! line.
//!
//! ## Main Components
//!
//! - **Detector**: Depth-first cycle detection over an edge list
//! - **Graph**: Adjacency built from edges, keyed by node id
//! - **Pipeline**: Decoding of pipeline JSON documents
//! - **Server**: The `POST /pipelines/parse` endpoint
//! - **Reports**: Human-readable and machine-readable check reports
//!
//! ## Usage
//!
//! ### Evaluating a Pipeline
//!
//! ```
//! use pipeline_dag::core::{Edge, Node};
//! use pipeline_dag::detector::evaluate;
//!
//! let nodes = vec![Node::new("A"), Node::new("B"), Node::new("C")];
//! let edges = vec![
//!     Edge::new("e1", "A", "B"),
//!     Edge::new("e2", "B", "C"),
//! ];
//!
//! let stats = evaluate(&nodes, &edges);
//! assert_eq!(stats.num_nodes, 3);
//! assert_eq!(stats.num_edges, 2);
//! assert!(stats.is_dag);
//! ```
//!
//! ### Decoding an Editor Payload
//!
//! ```
//! use pipeline_dag::pipeline::PipelineRequest;
//!
//! # fn main() -> miette::Result<()> {
//! let body = r#"{
//!     "nodes": [{"id": "A"}, {"id": "B"}],
//!     "edges": [
//!         {"id": "e1", "source": "A", "target": "B"},
//!         {"id": "e2", "source": "B", "target": "A"}
//!     ]
//! }"#;
//!
//! let stats = PipelineRequest::from_json_str("payload", body)?.evaluate();
//! assert!(!stats.is_dag);
//! # Ok(())
//! # }
//! ```
//!
//! ### Serving the Endpoint
//!
//! ```no_run
//! use std::path::Path;
//!
//! use pipeline_dag::config::ServerSettings;
//!
//! # #[tokio::main]
//! # async fn main() -> miette::Result<()> {
//! let settings = ServerSettings::from_file(Path::new("pipeline-dag.toml"))?;
//! pipeline_dag::server::serve(settings).await?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod pipeline_discovery;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod logging;
pub mod pipeline;
pub mod reports;
pub mod server;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    logging::init(&cli.logging);

    execute_command(cli.command)
}
