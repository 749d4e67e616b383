//! Graph capability contract
//!
//! [`SparseGraph`] is what drivers program against. [`CsrGraph`] is the only
//! production implementation; the trait is object safe so callers can hold a
//! `Box<dyn SparseGraph>` and swap in another layout later.

use crate::algorithms::BfsResult;
use crate::error::Result;
use crate::storage::{CsrGraph, LoadSummary, NodeId};
use std::path::Path;

/// Read-mostly directed graph loaded from an edge list
///
/// Every query is total: unknown ids give 0, `None` or empty results.
pub trait SparseGraph {
    /// Rebuild the graph from an edge-list file, replacing all state
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the source cannot be read; the graph is then
    /// empty (zero nodes, zero edges) but still usable.
    fn load(&mut self, path: &Path) -> Result<LoadSummary>;

    /// Number of distinct nodes (0 before any successful load)
    fn node_count(&self) -> usize;

    /// Number of directed edges (0 before any successful load)
    fn edge_count(&self) -> usize;

    /// Out-degree of `node`, 0 if unknown
    fn degree(&self, node: NodeId) -> usize;

    /// Node with the greatest out-degree, `None` if there are no edges
    fn node_of_max_degree(&self) -> Option<NodeId>;

    /// Out-neighbors of `node` in ascending order, empty if unknown
    fn neighbors(&self, node: NodeId) -> Vec<NodeId>;

    /// Depth-bounded BFS from `start`
    fn bfs(&self, start: NodeId, max_depth: usize) -> BfsResult;

    /// Approximate memory footprint in bytes
    fn memory_estimate(&self) -> usize;
}

impl SparseGraph for CsrGraph {
    fn load(&mut self, path: &Path) -> Result<LoadSummary> {
        self.load_from_path(path)
    }

    fn node_count(&self) -> usize {
        self.num_nodes()
    }

    fn edge_count(&self) -> usize {
        self.num_edges()
    }

    fn degree(&self, node: NodeId) -> usize {
        CsrGraph::degree(self, node)
    }

    fn node_of_max_degree(&self) -> Option<NodeId> {
        CsrGraph::node_of_max_degree(self)
    }

    fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        CsrGraph::neighbors(self, node)
    }

    fn bfs(&self, start: NodeId, max_depth: usize) -> BfsResult {
        CsrGraph::bfs(self, start, max_depth)
    }

    fn memory_estimate(&self) -> usize {
        CsrGraph::memory_estimate(self)
    }
}
