//! # Cycle Detection Module
//!
//! This module decides whether a pipeline graph is a directed acyclic graph.
//!
//! ## Algorithm
//!
//! A depth-first walk tracks two sets: `visited` (every node reached so far)
//! and `on_stack` (nodes on the current exploration path). Reaching a node
//! that is still on the path means a back edge, which closes a cycle. Walks
//! are seeded from the declared nodes first and then from any edge source
//! that is still unvisited, so every edge is examined. Time is O(V + E).
//!
//! The walk keeps its own frame stack, so graph depth is bounded by memory
//! and never by the thread's call stack.
//!
//! ## Example
//!
//! ```
//! use pipeline_dag::detector::evaluate;
//!
//! let nodes = ["input", "llm", "output"];
//! let stats = evaluate(&nodes, &[("input", "llm"), ("llm", "output")]);
//! assert!(stats.is_dag);
//! assert_eq!(stats.num_nodes, 3);
//! assert_eq!(stats.num_edges, 2);
//!
//! let stats = evaluate(&nodes, &[("input", "llm"), ("llm", "input")]);
//! assert!(!stats.is_dag);
//! ```

mod detector_impl;

pub use detector_impl::*;
