//! Degree scans over the CSR row offsets

use crate::storage::{CsrGraph, NodeId};

/// Find the node with the strictly greatest out-degree
///
/// Single pass in ascending internal-index order; a later node only wins if
/// its degree is strictly greater, so ties keep the lowest external id.
/// Returns `None` for a graph with no edges (no degree exceeds zero).
///
/// # Example
///
/// ```
/// use sparse_graph::{node_of_max_degree, CsrGraph, NodeId};
///
/// let graph = CsrGraph::from_edges(&[
///     (NodeId(7), NodeId(1)),
///     (NodeId(3), NodeId(1)),
///     (NodeId(3), NodeId(7)),
/// ]);
///
/// assert_eq!(node_of_max_degree(&graph), Some((NodeId(3), 2)));
/// ```
#[must_use]
pub fn node_of_max_degree(graph: &CsrGraph) -> Option<(NodeId, usize)> {
    let mut best: Option<(u32, usize)> = None;
    let mut max_degree = 0;

    for idx in 0..graph.num_nodes() {
        #[allow(clippy::cast_possible_truncation)] // Graphs >4B nodes not supported
        let idx = idx as u32;
        let degree = graph.degree_of_index(idx);

        if degree > max_degree {
            max_degree = degree;
            best = Some((idx, degree));
        }
    }

    best.map(|(idx, degree)| (graph.index().resolve(idx), degree))
}
