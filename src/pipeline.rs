//! Pipeline payloads
//!
//! Decodes the JSON document sent by the pipeline editor into nodes and
//! edges. This is the only place where a payload can be rejected; once a
//! [`PipelineRequest`] exists, evaluating it cannot fail.

use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};

use crate::core::{Edge, Node, PipelineStats};
use crate::detector::evaluate;
use crate::error::{MalformedGraphError, PipelineDagError};

/// Body of `POST /pipelines/parse`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineRequest {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl PipelineRequest {
    /// Parse a JSON document; `origin` names it in error messages
    pub fn from_json_str(origin: &str, content: &str) -> Result<Self, PipelineDagError> {
        serde_json::from_str(content).map_err(|e| malformed(origin, content, e))
    }

    /// Parse raw request bytes
    pub fn from_json_slice(origin: &str, bytes: &[u8]) -> Result<Self, PipelineDagError> {
        match std::str::from_utf8(bytes) {
            Ok(content) => Self::from_json_str(origin, content),
            // Let serde_json describe the encoding problem.
            Err(_) => serde_json::from_slice(bytes).map_err(|e| {
                malformed(origin, &String::from_utf8_lossy(bytes), e)
            }),
        }
    }

    /// Read and parse a pipeline file
    pub fn from_file(path: &Path) -> Result<Self, PipelineDagError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| PipelineDagError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::from_json_str(&path.display().to_string(), &content)
    }

    pub fn evaluate(&self) -> PipelineStats {
        evaluate(&self.nodes, &self.edges)
    }
}

fn malformed(origin: &str, content: &str, error: serde_json::Error) -> PipelineDagError {
    let span = byte_offset(content, error.line(), error.column())
        .map(|offset| SourceSpan::new(offset.into(), 0));

    PipelineDagError::MalformedGraph(Box::new(MalformedGraphError {
        origin: origin.to_string(),
        reason: strip_position(&error),
        source_code: NamedSource::new(origin, content.to_string()),
        span,
        source: error,
    }))
}

/// serde_json appends " at line L column C" to every message; the span
/// already carries that information.
fn strip_position(error: &serde_json::Error) -> String {
    let message = error.to_string();
    match message.rfind(" at line ") {
        Some(idx) if error.line() > 0 => message[..idx].to_string(),
        _ => message,
    }
}

/// Convert serde_json's 1-based line/column into a byte offset
fn byte_offset(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();

    Some((line_start + column.saturating_sub(1)).min(content.len()))
}
