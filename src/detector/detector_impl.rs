use std::collections::HashSet;

use tracing::trace;

use crate::core::{DirectedEdge, PipelineStats};
use crate::graph::AdjacencyMap;

/// Evaluate a pipeline: count its nodes and edges and decide whether it is a
/// DAG.
///
/// Counts are the raw input lengths, duplicates included. Edges may name
/// identifiers that are missing from `nodes`.
pub fn evaluate<N, E>(nodes: &[N], edges: &[E]) -> PipelineStats
where
    N: AsRef<str>,
    E: DirectedEdge,
{
    let adjacency = AdjacencyMap::from_edges(edges);
    let mut detector = CycleDetector::new(&adjacency);
    let is_dag = !detector.has_cycle(nodes.iter().map(|node| node.as_ref()));

    PipelineStats {
        num_nodes: nodes.len(),
        num_edges: edges.len(),
        is_dag,
    }
}

/// Depth-first cycle detector over an [`AdjacencyMap`]
///
/// The walk keeps an explicit stack of `(node, next successor index)` frames
/// instead of recursing, so arbitrarily deep chains cannot exhaust the call
/// stack.
pub struct CycleDetector<'g, 'a> {
    adjacency: &'g AdjacencyMap<'a>,
    visited: HashSet<&'a str>,
    on_stack: HashSet<&'a str>,
    stack: Vec<(&'a str, usize)>,
}

impl<'g, 'a> CycleDetector<'g, 'a> {
    pub fn new(adjacency: &'g AdjacencyMap<'a>) -> Self {
        Self {
            adjacency,
            visited: HashSet::new(),
            on_stack: HashSet::new(),
            stack: Vec::new(),
        }
    }

    /// Walk from every seed, then from every edge source not reached yet.
    ///
    /// Returns as soon as a back edge is found. Each call starts a fresh walk,
    /// so a detector can be asked again.
    pub fn has_cycle<I>(&mut self, seeds: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.visited.clear();
        self.on_stack.clear();
        self.stack.clear();

        for seed in seeds {
            if !self.visited.contains(seed) && self.walk_from(seed) {
                return true;
            }
        }

        let adjacency = self.adjacency;
        for &source in adjacency.sources() {
            if !self.visited.contains(source) && self.walk_from(source) {
                return true;
            }
        }

        false
    }

    /// Nodes explored so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    fn walk_from(&mut self, start: &'a str) -> bool {
        let adjacency = self.adjacency;
        self.enter(start);

        while let Some(&(node, cursor)) = self.stack.last() {
            match adjacency.successors(node).get(cursor).copied() {
                Some(next) => {
                    if let Some(frame) = self.stack.last_mut() {
                        frame.1 += 1;
                    }

                    if !self.visited.contains(next) {
                        self.enter(next);
                    } else if self.on_stack.contains(next) {
                        trace!(from = node, to = next, "back edge closes a cycle");
                        self.on_stack.clear();
                        self.stack.clear();
                        return true;
                    }
                }
                None => {
                    self.on_stack.remove(node);
                    self.stack.pop();
                }
            }
        }

        false
    }

    fn enter(&mut self, node: &'a str) {
        self.visited.insert(node);
        self.on_stack.insert(node);
        self.stack.push((node, 0));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::{Edge, Node};

    fn stats(num_nodes: usize, num_edges: usize, is_dag: bool) -> PipelineStats {
        PipelineStats {
            num_nodes,
            num_edges,
            is_dag,
        }
    }

    #[test]
    fn test_empty_graph_is_dag() {
        let nodes: [&str; 0] = [];
        let edges: [(&str, &str); 0] = [];

        assert_eq!(evaluate(&nodes, &edges), stats(0, 0, true));
    }

    #[test]
    fn test_single_edge() {
        assert_eq!(evaluate(&["A", "B"], &[("A", "B")]), stats(2, 1, true));
    }

    #[test]
    fn test_triangle_cycle() {
        let edges = [("A", "B"), ("B", "C"), ("C", "A")];
        assert_eq!(evaluate(&["A", "B", "C"], &edges), stats(3, 3, false));
    }

    #[test]
    fn test_self_loop() {
        assert_eq!(evaluate(&["A"], &[("A", "A")]), stats(1, 1, false));
    }

    #[test]
    fn test_diamond_is_dag() {
        let edges = [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")];
        assert_eq!(evaluate(&["A", "B", "C", "D"], &edges), stats(4, 4, true));
    }

    #[test]
    fn test_two_node_cycle() {
        let edges = [("A", "B"), ("B", "A")];
        assert_eq!(evaluate(&["A", "B"], &edges), stats(2, 2, false));
    }

    #[test]
    fn test_nodes_without_edges() {
        assert_eq!(evaluate(&["A", "B", "C"], &[] as &[(&str, &str)]), stats(3, 0, true));
    }

    #[test]
    fn test_duplicate_nodes_are_counted() {
        let edges = [("A", "B")];
        assert_eq!(evaluate(&["A", "A", "B"], &edges), stats(3, 1, true));
    }

    #[test]
    fn test_duplicate_edges_are_not_a_cycle() {
        let edges = [("A", "B"), ("A", "B"), ("B", "C")];
        assert_eq!(evaluate(&["A", "B", "C"], &edges), stats(3, 3, true));
    }

    #[test]
    fn test_edges_to_undeclared_nodes() {
        let edges = [("A", "ghost"), ("ghost", "B")];
        assert_eq!(evaluate(&["A", "B"], &edges), stats(2, 2, true));

        let edges = [("A", "ghost"), ("ghost", "A")];
        assert_eq!(evaluate(&["A"], &edges), stats(1, 2, false));
    }

    #[test]
    fn test_cycle_among_undeclared_nodes_only() {
        let edges = [("x", "y"), ("y", "x")];
        assert_eq!(evaluate(&["A"], &edges), stats(1, 2, false));
    }

    #[test]
    fn test_cycle_in_second_component() {
        let edges = [("A", "B"), ("C", "D"), ("D", "E"), ("E", "C")];
        assert_eq!(evaluate(&["A", "B", "C", "D", "E"], &edges), stats(5, 4, false));
    }

    #[test]
    fn test_cross_edge_into_finished_subtree_is_not_a_cycle() {
        // C is fully explored from B before A reaches it again.
        let edges = [("A", "B"), ("B", "C"), ("A", "C")];
        assert_eq!(evaluate(&["A", "B", "C"], &edges), stats(3, 3, true));

        let edges = [("B", "C"), ("A", "C")];
        assert_eq!(evaluate(&["B", "A", "C"], &edges), stats(3, 2, true));
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let names: Vec<String> = (0..200_000).map(|i| format!("n{i}")).collect();
        let mut edges: Vec<(&str, &str)> = names
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
            .collect();

        assert!(evaluate(&names, &edges).is_dag);

        edges.push((names[names.len() - 1].as_str(), names[0].as_str()));
        assert!(!evaluate(&names, &edges).is_dag);
    }

    #[test]
    fn test_wire_types() {
        let nodes = vec![Node::new("input"), Node::new("output")];
        let edges = vec![Edge::new("e1", "input", "output")];

        assert_eq!(evaluate(&nodes, &edges), stats(2, 1, true));
    }

    #[test]
    fn test_detector_short_circuits() {
        let edges = [("A", "A"), ("B", "C")];
        let adjacency = AdjacencyMap::from_edges(&edges);
        let mut detector = CycleDetector::new(&adjacency);

        assert!(detector.has_cycle(["A", "B", "C"]));
        assert_eq!(detector.visited_count(), 1);
    }

    #[test]
    fn test_detector_can_be_asked_again() {
        let edges = [("A", "B"), ("B", "A"), ("C", "D")];
        let adjacency = AdjacencyMap::from_edges(&edges);
        let mut detector = CycleDetector::new(&adjacency);

        assert!(detector.has_cycle(["A"]));
        assert!(detector.on_stack.is_empty());
        assert!(detector.stack.is_empty());
        let first_visit = detector.visited_count();

        assert!(detector.has_cycle(["A"]));
        assert_eq!(detector.visited_count(), first_visit);
    }

    #[test]
    fn test_acyclic_answer_is_stable_across_calls() {
        let edges = [("A", "B"), ("B", "C"), ("D", "A")];
        let adjacency = AdjacencyMap::from_edges(&edges);
        let mut detector = CycleDetector::new(&adjacency);

        assert!(!detector.has_cycle(["A"]));
        assert!(!detector.has_cycle(["C", "B", "D"]));
        assert!(!detector.has_cycle(std::iter::empty()));
        assert_eq!(detector.visited_count(), 4);
    }
}
