use std::collections::HashMap;

use crate::core::DirectedEdge;

/// Successor lists keyed by node identifier
///
/// Borrows its identifiers from the edges it was built from, so building one
/// per evaluation costs no string copies.
#[derive(Debug, Default)]
pub struct AdjacencyMap<'a> {
    successors: HashMap<&'a str, Vec<&'a str>>,
    sources: Vec<&'a str>,
}

impl<'a> AdjacencyMap<'a> {
    /// Build the map from a list of edges, keeping successors in edge order
    pub fn from_edges<E: DirectedEdge>(edges: &'a [E]) -> Self {
        let mut successors: HashMap<&'a str, Vec<&'a str>> = HashMap::new();
        let mut sources = Vec::new();

        for edge in edges {
            let targets = successors.entry(edge.source()).or_insert_with(|| {
                sources.push(edge.source());
                Vec::new()
            });
            targets.push(edge.target());
        }

        Self {
            successors,
            sources,
        }
    }

    /// Direct successors of `node`; empty if it has no outgoing edges
    pub fn successors(&self, node: &str) -> &[&'a str] {
        self.successors
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every identifier with at least one outgoing edge, in first-seen order
    pub fn sources(&self) -> &[&'a str] {
        &self.sources
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }
}
