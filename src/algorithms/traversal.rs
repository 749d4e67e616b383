//! Depth-bounded breadth-first traversal
//!
//! Based on Ligra (Shun & Blelloch, `PPoPP` 2013) frontier-based traversal
//! patterns, specialised to a single-threaded FIFO over the CSR rows.

use crate::storage::{CsrGraph, NodeId};
use std::collections::VecDeque;
use std::time::Instant;
use tracing::debug;

/// Output of [`bfs_bounded`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BfsResult {
    /// Distinct nodes in discovery order, start node first
    pub visited: Vec<NodeId>,

    /// Every edge examined while expanding nodes shallower than the bound,
    /// including edges into already-visited nodes
    pub edges: Vec<(NodeId, NodeId)>,
}

impl BfsResult {
    /// True if the start node was not found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Split into `(visited, edges)`
    #[must_use]
    pub fn into_parts(self) -> (Vec<NodeId>, Vec<(NodeId, NodeId)>) {
        (self.visited, self.edges)
    }
}

/// Breadth-first search from `start`, expanding nodes at depth `< max_depth`
///
/// Neighbors are expanded in CSR (ascending) order. Each examined edge is
/// recorded even when its target was already visited, so the edge list is a
/// record of the expansion rather than a BFS tree. Nodes at depth
/// `max_depth` are visited but never expanded. An unknown `start` yields an
/// empty result.
///
/// # Example
///
/// ```
/// use sparse_graph::{bfs_bounded, CsrGraph, NodeId};
///
/// let graph = CsrGraph::from_edges(&[
///     (NodeId(1), NodeId(2)),
///     (NodeId(1), NodeId(3)),
///     (NodeId(2), NodeId(3)),
///     (NodeId(3), NodeId(1)),
/// ]);
///
/// let result = bfs_bounded(&graph, NodeId(1), 1);
/// assert_eq!(result.visited, vec![NodeId(1), NodeId(2), NodeId(3)]);
/// assert_eq!(
///     result.edges,
///     vec![(NodeId(1), NodeId(2)), (NodeId(1), NodeId(3))]
/// );
/// ```
#[must_use]
pub fn bfs_bounded(graph: &CsrGraph, start: NodeId, max_depth: usize) -> BfsResult {
    let started = Instant::now();
    let index = graph.index();

    let Some(start_idx) = index.external_to_internal(start) else {
        debug!(start = %start, "bfs start node not in graph");
        return BfsResult::default();
    };

    let mut visited = vec![false; graph.num_nodes()];
    let mut queue = VecDeque::new();
    let mut result = BfsResult::default();

    queue.push_back((start_idx, 0_usize));
    visited[start_idx as usize] = true;
    result.visited.push(start);

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }

        let current_id = index.resolve(current);

        for &neighbor in graph.neighbor_indices(current) {
            let neighbor_id = index.resolve(neighbor);
            result.edges.push((current_id, neighbor_id));

            if !visited[neighbor as usize] {
                visited[neighbor as usize] = true;
                result.visited.push(neighbor_id);
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    debug!(
        start = %start,
        max_depth,
        visited = result.visited.len(),
        edges = result.edges.len(),
        elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        "bfs complete"
    );

    result
}
