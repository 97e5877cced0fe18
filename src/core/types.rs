//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use serde::{Deserialize, Serialize};

/// A pipeline node as it arrives from the editor
///
/// Only the identifier matters for evaluation; any other fields in the
/// payload (position, `data`, type) are ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl AsRef<str> for Node {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

/// A directed edge between two node identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Anything that can be read as a `source -> target` arc
pub trait DirectedEdge {
    fn source(&self) -> &str;
    fn target(&self) -> &str;
}

impl DirectedEdge for Edge {
    fn source(&self) -> &str {
        &self.source
    }

    fn target(&self) -> &str {
        &self.target
    }
}

impl<S: AsRef<str>, T: AsRef<str>> DirectedEdge for (S, T) {
    fn source(&self) -> &str {
        self.0.as_ref()
    }

    fn target(&self) -> &str {
        self.1.as_ref()
    }
}

/// Result of evaluating one pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStats {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub is_dag: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_ignores_editor_fields() {
        let node: Node = serde_json::from_str(
            r#"{"id": "llm-1", "type": "llm", "position": {"x": 10, "y": 20}, "data": {}}"#,
        )
        .unwrap();

        assert_eq!(node, Node::new("llm-1"));
    }

    #[test]
    fn test_edge_requires_endpoints() {
        let missing_target = serde_json::from_str::<Edge>(r#"{"id": "e1", "source": "a"}"#);
        assert!(missing_target.is_err());
    }

    #[test]
    fn test_tuple_as_directed_edge() {
        let edge = ("a", String::from("b"));
        assert_eq!(edge.source(), "a");
        assert_eq!(edge.target(), "b");
    }

    #[test]
    fn test_stats_wire_names() {
        let stats = PipelineStats {
            num_nodes: 2,
            num_edges: 1,
            is_dag: true,
        };

        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"num_nodes": 2, "num_edges": 1, "is_dag": true})
        );
    }
}
