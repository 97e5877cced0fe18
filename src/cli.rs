use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{FormatArgs, LoggingArgs};

#[derive(Parser)]
#[command(
    name = "pipeline-dag",
    about = "Check pipeline graphs for cycles",
    long_about = "pipeline-dag answers one question about a pipeline graph: is it a directed \
                  acyclic graph? It serves the answer over HTTP for the pipeline editor, and can \
                  check pipeline JSON files from the command line.",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub logging: LoggingArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the pipeline evaluation endpoint
    ///
    /// Starts an HTTP server answering `POST /pipelines/parse` with the node
    /// count, edge count and DAG verdict of the submitted pipeline.
    #[command(
        long_about = "Start the HTTP server used by the pipeline editor. `GET /` answers a ping, \
                      `POST /pipelines/parse` accepts a JSON body with `nodes` and `edges` and \
                      answers with `num_nodes`, `num_edges` and `is_dag`. Settings can come from \
                      a TOML file given with --config; flags and environment variables override \
                      the file."
    )]
    Serve {
        /// Address to listen on [default: 127.0.0.1:8000]
        #[arg(long, value_name = "ADDR", env = "PIPELINE_DAG_BIND")]
        bind: Option<SocketAddr>,

        /// TOML settings file
        #[arg(long, value_name = "FILE", env = "PIPELINE_DAG_CONFIG")]
        config: Option<PathBuf>,

        /// Allowed CORS origins, or `*` for any [default: *]
        #[arg(
            long = "allow-origin",
            value_name = "ORIGIN",
            value_delimiter = ',',
            env = "PIPELINE_DAG_ALLOW_ORIGINS"
        )]
        allow_origins: Vec<String>,

        /// Whether browsers may send credentials with cross-origin requests
        /// [default: true]
        #[arg(long, value_name = "BOOL", env = "PIPELINE_DAG_ALLOW_CREDENTIALS")]
        allow_credentials: Option<bool>,

        /// Largest accepted request body in bytes [default: 2097152]
        #[arg(long, value_name = "BYTES", env = "PIPELINE_DAG_MAX_BODY_BYTES")]
        max_body_bytes: Option<usize>,
    },

    /// Check pipeline files for cycles
    ///
    /// Evaluates pipeline JSON documents the same way the server does and
    /// reports node count, edge count and DAG verdict for each.
    #[command(
        long_about = "Evaluate pipeline JSON documents offline. Each PATH may be a file, a \
                      directory (searched recursively for *.json files) or a glob pattern. With \
                      no PATH, or with `-`, the document is read from standard input."
    )]
    Check {
        /// Files, directories or glob patterns to check
        #[arg(value_name = "PATH")]
        paths: Vec<String>,

        #[command(flatten)]
        format: FormatArgs,

        /// Exit with error code if any pipeline contains a cycle
        #[arg(long, env = "PIPELINE_DAG_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
    #[value(name = "github")]
    GitHub,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}
