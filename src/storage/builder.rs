//! Two-phase CSR construction
//!
//! Phase 1 stages raw edge pairs. Phase 2 ([`CsrBuilder::build`]) assigns
//! dense indices, accumulates per-node adjacency lists, sorts each list and
//! compacts everything into the three CSR arrays. The adjacency lists live
//! only inside `build` and are freed before it returns.

use super::csr::CsrGraph;
use super::index::{NodeId, NodeIndex};

/// Weight stored for every edge (graphs are unweighted)
pub const UNIT_WEIGHT: f32 = 1.0;

/// Staging area for edges before compaction into a [`CsrGraph`]
///
/// # Example
///
/// ```
/// use sparse_graph::{CsrBuilder, NodeId};
///
/// let mut builder = CsrBuilder::new();
/// builder.push_edge(NodeId(10), NodeId(30));
/// builder.push_edge(NodeId(10), NodeId(20));
///
/// let graph = builder.build();
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.neighbors(NodeId(10)), vec![NodeId(20), NodeId(30)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CsrBuilder {
    edges: Vec<(NodeId, NodeId)>,
}

impl CsrBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known edge count
    #[must_use]
    pub fn with_capacity(edge_count: usize) -> Self {
        Self {
            edges: Vec::with_capacity(edge_count),
        }
    }

    /// Stage a directed edge `src → dst`
    ///
    /// Duplicates are kept; they become parallel edges in the CSR.
    pub fn push_edge(&mut self, src: NodeId, dst: NodeId) {
        self.edges.push((src, dst));
    }

    /// Number of staged edges
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True if no edge has been staged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Compact the staged edges into an immutable CSR graph
    ///
    /// O(E log E) time. Neighbor order depends only on the edge multiset,
    /// never on staging order.
    ///
    /// # Panics
    ///
    /// Row offsets are `u32`: panics if more than `u32::MAX` edges are staged.
    #[must_use]
    pub fn build(self) -> CsrGraph {
        let index = NodeIndex::from_edges(&self.edges);
        let num_nodes = index.len();

        // Temporary adjacency lists (dropped at end of scope)
        let mut adj_list: Vec<Vec<u32>> = vec![Vec::new(); num_nodes];

        for &(src, dst) in &self.edges {
            // Both endpoints were indexed from this same edge set
            if let (Some(src_idx), Some(dst_idx)) = (
                index.external_to_internal(src),
                index.external_to_internal(dst),
            ) {
                adj_list[src_idx as usize].push(dst_idx);
            }
        }

        let mut row_offsets = Vec::with_capacity(num_nodes + 1);
        let mut col_indices = Vec::with_capacity(self.edges.len());
        let mut edge_weights = Vec::with_capacity(self.edges.len());

        row_offsets.push(0);

        for neighbors in &mut adj_list {
            neighbors.sort_unstable();

            col_indices.extend_from_slice(neighbors);
            edge_weights.extend(std::iter::repeat(UNIT_WEIGHT).take(neighbors.len()));

            row_offsets.push(row_offset(col_indices.len()));
        }

        drop(adj_list);

        CsrGraph::from_parts(index, row_offsets, col_indices, edge_weights)
    }
}

/// Row offset for the running column count
fn row_offset(position: usize) -> u32 {
    u32::try_from(position)
        .unwrap_or_else(|_| panic!("CSR holds at most {} edges, got {position}", u32::MAX))
}

impl Extend<(NodeId, NodeId)> for CsrBuilder {
    fn extend<I: IntoIterator<Item = (NodeId, NodeId)>>(&mut self, iter: I) {
        self.edges.extend(iter);
    }
}

impl FromIterator<(NodeId, NodeId)> for CsrBuilder {
    fn from_iter<I: IntoIterator<Item = (NodeId, NodeId)>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}
