//! # Graph Construction Module
//!
//! Builds the transient adjacency representation that the cycle detector
//! walks. A map is built fresh for every evaluation and borrows its
//! identifiers from the caller's edge list.
//!
//! ## Example
//!
//! ```
//! use pipeline_dag::graph::AdjacencyMap;
//!
//! let edges = [("input", "llm"), ("llm", "output"), ("input", "output")];
//! let adjacency = AdjacencyMap::from_edges(&edges);
//!
//! assert_eq!(adjacency.successors("input"), &["llm", "output"]);
//! assert!(adjacency.successors("output").is_empty());
//! ```

mod adjacency;

pub use adjacency::AdjacencyMap;
