//! CSR (Compressed Sparse Row) graph representation
//!
//! Based on `GraphBLAST` (Yang et al., ACM `ToMS` 2022) sparse matrix layout.
//!
//! # CSR Format
//!
//! ```text
//! Edges (external ids): 10 → 20, 10 → 30, 20 → 30
//! Node index:           10 → 0, 20 → 1, 30 → 2
//!
//! CSR:
//!   row_offsets:  [0, 2, 3, 3]   // Node 0: edges [0..2), Node 1: [2..3), Node 2: [3..3)
//!   col_indices:  [1, 2, 2]      // internal indices of edge targets
//!   edge_weights: [1.0, 1.0, 1.0]
//! ```
//!
//! All queries take and return external ids; translation happens through the
//! owned [`NodeIndex`]. Unknown ids are ordinary input and yield "absent"
//! results, never errors.

use super::builder::CsrBuilder;
use super::index::{NodeId, NodeIndex};
use crate::algorithms::{bfs_bounded, node_of_max_degree, BfsResult};
use std::mem::size_of;

/// Immutable CSR graph with its node index
///
/// # Example
///
/// ```
/// use sparse_graph::{CsrGraph, NodeId};
///
/// let graph = CsrGraph::from_edges(&[
///     (NodeId(1), NodeId(2)),
///     (NodeId(1), NodeId(3)),
///     (NodeId(2), NodeId(3)),
///     (NodeId(3), NodeId(1)),
/// ]);
///
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.degree(NodeId(1)), 2);
/// assert_eq!(graph.neighbors(NodeId(1)), vec![NodeId(2), NodeId(3)]);
/// assert_eq!(graph.degree(NodeId(99)), 0);
/// ```
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// External id ↔ internal index
    index: NodeIndex,

    /// node i's edges start at `row_offsets`[i]
    /// Length: `num_nodes` + 1
    row_offsets: Vec<u32>,

    /// Edge targets (internal indices), sorted within each row
    /// Length: `num_edges`
    col_indices: Vec<u32>,

    /// Edge weights, always [`super::builder::UNIT_WEIGHT`]
    /// Length: `num_edges`
    edge_weights: Vec<f32>,

    num_nodes: usize,
    num_edges: usize,
}

/// Summary of a loaded graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    /// Number of distinct nodes
    pub nodes: usize,
    /// Number of directed edges (duplicates included)
    pub edges: usize,
    /// Approximate memory footprint in bytes
    pub memory_bytes: usize,
    /// Node with the greatest out-degree, if any edge exists
    pub max_degree_node: Option<NodeId>,
    /// Out-degree of `max_degree_node` (0 if none)
    pub max_degree: usize,
}

impl GraphStats {
    /// Memory footprint in mebibytes
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn memory_mb(&self) -> f64 {
        self.memory_bytes as f64 / (1024.0 * 1024.0)
    }
}

impl CsrGraph {
    /// Create new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self {
            index: NodeIndex::default(),
            row_offsets: vec![0], // Start with single offset
            col_indices: Vec::new(),
            edge_weights: Vec::new(),
            num_nodes: 0,
            num_edges: 0,
        }
    }

    /// Create graph from an edge list of external id pairs
    #[must_use]
    pub fn from_edges(edges: &[(NodeId, NodeId)]) -> Self {
        let mut builder = CsrBuilder::with_capacity(edges.len());
        builder.extend(edges.iter().copied());
        builder.build()
    }

    pub(crate) fn from_parts(
        index: NodeIndex,
        row_offsets: Vec<u32>,
        col_indices: Vec<u32>,
        edge_weights: Vec<f32>,
    ) -> Self {
        debug_assert_eq!(row_offsets.len(), index.len() + 1);
        debug_assert_eq!(col_indices.len(), edge_weights.len());

        Self {
            num_nodes: index.len(),
            num_edges: col_indices.len(),
            index,
            row_offsets,
            col_indices,
            edge_weights,
        }
    }

    /// Get the node index
    #[must_use]
    pub const fn index(&self) -> &NodeIndex {
        &self.index
    }

    /// Get number of nodes
    #[must_use]
    pub const fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Get number of edges
    #[must_use]
    pub const fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// True if the graph contains the external id
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.index.external_to_internal(node).is_some()
    }

    /// Out-degree of a node (0 if the node is unknown)
    #[must_use]
    pub fn degree(&self, node: NodeId) -> usize {
        self.index
            .external_to_internal(node)
            .map_or(0, |idx| self.degree_of_index(idx))
    }

    /// Out-neighbors of a node, ascending (empty if the node is unknown)
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        self.index
            .external_to_internal(node)
            .map(|idx| self.index.resolve_all(self.neighbor_indices(idx)))
            .unwrap_or_default()
    }

    /// Node with the strictly greatest out-degree
    ///
    /// Ties keep the lowest id. `None` when the graph has no edges.
    #[must_use]
    pub fn node_of_max_degree(&self) -> Option<NodeId> {
        node_of_max_degree(self).map(|(node, _)| node)
    }

    /// Depth-bounded BFS from `start`, see [`bfs_bounded`]
    #[must_use]
    pub fn bfs(&self, start: NodeId, max_depth: usize) -> BfsResult {
        bfs_bounded(self, start, max_depth)
    }

    /// Approximate memory usage in bytes
    ///
    /// Counts allocated capacity of the CSR arrays plus a per-entry
    /// estimate for both node index mappings.
    #[must_use]
    pub fn memory_estimate(&self) -> usize {
        self.row_offsets.capacity() * size_of::<u32>()
            + self.col_indices.capacity() * size_of::<u32>()
            + self.edge_weights.capacity() * size_of::<f32>()
            + self.index.memory_estimate()
    }

    /// Summary statistics (counts, memory, max-degree node)
    #[must_use]
    pub fn statistics(&self) -> GraphStats {
        let (max_degree_node, max_degree) =
            node_of_max_degree(self).map_or((None, 0), |(node, deg)| (Some(node), deg));

        GraphStats {
            nodes: self.num_nodes,
            edges: self.num_edges,
            memory_bytes: self.memory_estimate(),
            max_degree_node,
            max_degree,
        }
    }

    /// Get CSR components (row offsets, column indices, edge weights)
    #[must_use]
    pub fn csr_components(&self) -> (&[u32], &[u32], &[f32]) {
        (&self.row_offsets, &self.col_indices, &self.edge_weights)
    }

    /// Out-degree by internal index (caller guarantees `idx < num_nodes`)
    pub(crate) fn degree_of_index(&self, idx: u32) -> usize {
        let idx = idx as usize;
        (self.row_offsets[idx + 1] - self.row_offsets[idx]) as usize
    }

    /// Neighbor slice by internal index (caller guarantees `idx < num_nodes`)
    pub(crate) fn neighbor_indices(&self, idx: u32) -> &[u32] {
        let idx = idx as usize;
        let start = self.row_offsets[idx] as usize;
        let end = self.row_offsets[idx + 1] as usize;

        &self.col_indices[start..end]
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> CsrGraph {
        // 1 → 2, 1 → 3, 2 → 3, 3 → 1
        CsrGraph::from_edges(&[
            (NodeId(1), NodeId(2)),
            (NodeId(1), NodeId(3)),
            (NodeId(2), NodeId(3)),
            (NodeId(3), NodeId(1)),
        ])
    }

    #[test]
    fn test_empty_graph() {
        let graph = CsrGraph::new();
        assert_eq!(graph.num_nodes(), 0);
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.degree(NodeId(1)), 0);
        assert!(graph.neighbors(NodeId(1)).is_empty());
        assert_eq!(graph.node_of_max_degree(), None);
    }

    #[test]
    fn test_from_edges_simple() {
        let graph = sample_graph();

        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_edges(), 4);

        // Check CSR structure
        assert_eq!(graph.row_offsets, vec![0, 2, 3, 4]);
        assert_eq!(graph.col_indices, vec![1, 2, 2, 0]);
        assert_eq!(graph.edge_weights, vec![1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_degree_and_neighbors() {
        let graph = sample_graph();

        assert_eq!(graph.degree(NodeId(1)), 2);
        assert_eq!(graph.degree(NodeId(2)), 1);
        assert_eq!(graph.neighbors(NodeId(1)), vec![NodeId(2), NodeId(3)]);
        assert_eq!(graph.neighbors(NodeId(3)), vec![NodeId(1)]);
    }

    #[test]
    fn test_unknown_node_is_absent() {
        let graph = sample_graph();

        assert!(!graph.contains(NodeId(4)));
        assert_eq!(graph.degree(NodeId(4)), 0);
        assert!(graph.neighbors(NodeId(4)).is_empty());
    }

    #[test]
    fn test_sink_node_has_no_neighbors() {
        let graph = CsrGraph::from_edges(&[(NodeId(1), NodeId(2))]);

        assert!(graph.contains(NodeId(2)));
        assert_eq!(graph.degree(NodeId(2)), 0);
        assert!(graph.neighbors(NodeId(2)).is_empty());
    }

    #[test]
    fn test_max_degree_tie_keeps_lowest_id() {
        // 5 and 9 both have degree 2
        let graph = CsrGraph::from_edges(&[
            (NodeId(9), NodeId(1)),
            (NodeId(9), NodeId(2)),
            (NodeId(5), NodeId(1)),
            (NodeId(5), NodeId(2)),
        ]);
        assert_eq!(graph.node_of_max_degree(), Some(NodeId(5)));
    }

    #[test]
    fn test_memory_estimate_covers_arrays_and_index() {
        let graph = sample_graph();

        let arrays = graph.row_offsets.len() * size_of::<u32>()
            + graph.col_indices.len() * size_of::<u32>()
            + graph.edge_weights.len() * size_of::<f32>();

        assert!(graph.memory_estimate() >= arrays + graph.index().memory_estimate());
    }

    #[test]
    fn test_memory_estimate_counts_capacity_not_length() {
        // 1 → 2, with every array over-allocated
        let index = NodeIndex::from_edges(&[(NodeId(1), NodeId(2))]);
        let index_bytes = index.memory_estimate();

        let mut row_offsets = Vec::with_capacity(16);
        row_offsets.extend([0_u32, 1, 1]);
        let mut col_indices = Vec::with_capacity(32);
        col_indices.push(1_u32);
        let mut edge_weights = Vec::with_capacity(24);
        edge_weights.push(1.0_f32);

        let graph = CsrGraph::from_parts(index, row_offsets, col_indices, edge_weights);

        let by_capacity = graph.row_offsets.capacity() * size_of::<u32>()
            + graph.col_indices.capacity() * size_of::<u32>()
            + graph.edge_weights.capacity() * size_of::<f32>();
        let by_length = graph.row_offsets.len() * size_of::<u32>()
            + graph.col_indices.len() * size_of::<u32>()
            + graph.edge_weights.len() * size_of::<f32>();

        assert!(graph.row_offsets.capacity() >= 16);
        assert_eq!(graph.memory_estimate(), by_capacity + index_bytes);
        assert!(graph.memory_estimate() > by_length + index_bytes);
    }

    #[test]
    fn test_statistics() {
        let stats = sample_graph().statistics();

        assert_eq!(stats.nodes, 3);
        assert_eq!(stats.edges, 4);
        assert_eq!(stats.max_degree_node, Some(NodeId(1)));
        assert_eq!(stats.max_degree, 2);
        assert!(stats.memory_bytes > 0);
        assert!(stats.memory_mb() > 0.0);
    }

    #[test]
    fn test_statistics_empty() {
        let stats = CsrGraph::new().statistics();

        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.edges, 0);
        assert_eq!(stats.max_degree_node, None);
        assert_eq!(stats.max_degree, 0);
    }
}
