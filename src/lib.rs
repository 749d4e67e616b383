//! sparse-graph: Compressed Sparse Row graph store
//!
//! # Overview
//!
//! sparse-graph ingests a directed edge list with arbitrary integer node ids,
//! renumbers the ids densely, compacts adjacency into CSR arrays and answers
//! degree, neighbor and depth-bounded BFS queries.
//!
//! # Quick Start
//!
//! ```no_run
//! use sparse_graph::{CsrGraph, NodeId, SparseGraph};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from a whitespace-separated edge list
//! let graph = CsrGraph::read_edge_list("web-Google.txt").await?;
//!
//! // Query (unknown ids are not errors)
//! let hub = graph.node_of_max_degree();
//! let callees = graph.neighbors(NodeId(0));
//!
//! // Two-hop neighborhood
//! let result = graph.bfs(NodeId(0), 2);
//! println!("{} nodes, {} edges examined", result.visited.len(), result.edges.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Storage**: node index + CSR (Compressed Sparse Row) arrays
//! - **Input**: line-oriented edge-list reader (sync and async)
//! - **Algorithms**: max-degree scan, level-synchronous bounded BFS
//! - **Contract**: [`SparseGraph`] trait, implemented by [`CsrGraph`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod error;
pub mod graph;
pub mod storage;

// Re-export core types
pub use algorithms::{bfs_bounded, node_of_max_degree, BfsResult};
pub use error::GraphError;
pub use graph::SparseGraph;
pub use storage::{
    parse_edge_line, CsrBuilder, CsrGraph, EdgeListReader, GraphStats, LoadSummary, NodeId,
    NodeIndex, ParsedEdges,
};
