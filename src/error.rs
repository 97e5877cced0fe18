use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(pipeline_dag::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

/// A payload that cannot be read as a node/edge collection
#[derive(Error, Debug, Diagnostic)]
#[error("Malformed pipeline graph in '{origin}': {reason}")]
#[diagnostic(
    code(pipeline_dag::malformed_graph),
    help(
        "A pipeline is a JSON object with a `nodes` array (each node has a string `id`) and an \
         `edges` array (each edge has string `id`, `source` and `target`)"
    )
)]
pub struct MalformedGraphError {
    pub origin: String,
    pub reason: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("{reason}")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum PipelineDagError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(pipeline_dag::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error(transparent)]
    #[diagnostic(transparent)]
    MalformedGraph(Box<MalformedGraphError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(pipeline_dag::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(pipeline_dag::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(pipeline_dag::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(pipeline_dag::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Server error: {message}")]
    #[diagnostic(
        code(pipeline_dag::server_error),
        help("Check that the bind address is free and reachable")
    )]
    ServerError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineDagError {
    /// Short reason suitable for an HTTP `detail` field
    pub fn detail(&self) -> String {
        match self {
            PipelineDagError::MalformedGraph(err) => err.reason.clone(),
            other => other.to_string(),
        }
    }
}
