//! Property-based tests for sparse-graph
//!
//! Verifies CSR and traversal invariants hold for arbitrary edge lists

use proptest::prelude::*;
use std::collections::{HashMap, HashSet, VecDeque};
use sparse_graph::{CsrGraph, NodeId};

// Property: construction produces a valid CSR structure
proptest! {
    #[test]
    fn prop_from_edges_valid_csr(edges in prop_edge_list(0usize..100usize, 1i64..50i64)) {
        let graph = CsrGraph::from_edges(&edges);
        let (row_offsets, col_indices, edge_weights) = graph.csr_components();

        // Invariant 1: row_offsets has num_nodes + 1 entries and is monotonic
        prop_assert_eq!(row_offsets.len(), graph.num_nodes() + 1);
        prop_assert!(row_offsets.windows(2).all(|w| w[0] <= w[1]));

        // Invariant 2: last row_offset == num_edges
        prop_assert_eq!(row_offsets[0], 0);
        prop_assert_eq!(*row_offsets.last().unwrap() as usize, col_indices.len());

        // Invariant 3: col_indices and edge_weights have same length, unit weights
        prop_assert_eq!(col_indices.len(), edge_weights.len());
        prop_assert!(edge_weights.iter().all(|&w| w == 1.0));

        // Invariant 4: duplicates preserved
        prop_assert_eq!(graph.num_edges(), edges.len());
    }
}

// Property: external ↔ internal round trip is the identity
proptest! {
    #[test]
    fn prop_index_round_trip(edges in prop_edge_list(0usize..100usize, 1i64..50i64)) {
        let graph = CsrGraph::from_edges(&edges);
        let index = graph.index();

        let distinct: HashSet<_> = edges.iter().flat_map(|&(s, d)| [s, d]).collect();
        prop_assert_eq!(index.len(), distinct.len());

        for &id in &distinct {
            let idx = index.external_to_internal(id).unwrap();
            prop_assert_eq!(index.internal_to_external(idx), Some(id));
        }

        // Ascending assignment
        let ordered: Vec<_> = index.iter().collect();
        prop_assert!(ordered.windows(2).all(|w| w[0] < w[1]));
    }
}

// Property: degree == |neighbors| and degrees sum to edge count
proptest! {
    #[test]
    fn prop_degree_consistency(edges in prop_edge_list(0usize..100usize, 1i64..30i64)) {
        let graph = CsrGraph::from_edges(&edges);

        let mut total = 0;
        for id in graph.index().iter() {
            let degree = graph.degree(id);
            prop_assert_eq!(degree, graph.neighbors(id).len());
            total += degree;
        }

        prop_assert_eq!(total, graph.num_edges());
    }
}

// Property: neighbors are sorted and independent of input order
proptest! {
    #[test]
    fn prop_neighbors_sorted_and_order_independent(
        edges in prop_edge_list(0usize..100usize, 1i64..30i64)
    ) {
        let graph = CsrGraph::from_edges(&edges);

        let mut reversed = edges.clone();
        reversed.reverse();
        let other = CsrGraph::from_edges(&reversed);

        for id in graph.index().iter() {
            let neighbors = graph.neighbors(id);
            prop_assert!(neighbors.windows(2).all(|w| w[0] <= w[1]));

            let mut expected: Vec<_> = edges
                .iter()
                .filter(|(src, _)| *src == id)
                .map(|&(_, dst)| dst)
                .collect();
            expected.sort_unstable();
            prop_assert_eq!(&neighbors, &expected);
        }

        prop_assert_eq!(graph.csr_components(), other.csr_components());
    }
}

// Property: bfs(start, 0) == ([start], [])
proptest! {
    #[test]
    fn prop_bfs_depth_zero(edges in prop_edge_list(1usize..60usize, 1i64..30i64)) {
        let graph = CsrGraph::from_edges(&edges);

        for id in graph.index().iter() {
            let result = graph.bfs(id, 0);
            prop_assert_eq!(result.visited, vec![id]);
            prop_assert!(result.edges.is_empty());
        }
    }
}

// Property: bfs(start, k) visits exactly the nodes within k hops
proptest! {
    #[test]
    fn prop_bfs_visits_k_hop_neighborhood(
        edges in prop_edge_list(1usize..80usize, 1i64..25i64),
        max_depth in 0usize..6
    ) {
        let graph = CsrGraph::from_edges(&edges);
        let start = edges[0].0;

        let expected = reference_hop_distances(&edges, start, max_depth);
        let result = graph.bfs(start, max_depth);

        let visited: HashSet<_> = result.visited.iter().copied().collect();
        prop_assert_eq!(visited.len(), result.visited.len(), "node visited twice");
        prop_assert_eq!(visited, expected.keys().copied().collect::<HashSet<_>>());
        prop_assert_eq!(result.visited[0], start);

        // Every recorded edge leaves a node shallower than the bound
        for (src, dst) in &result.edges {
            prop_assert!(expected[src] < max_depth);
            prop_assert!(expected.contains_key(dst));
        }
    }
}

// Reference BFS over the raw edge list: node → hop distance (≤ max_depth)
fn reference_hop_distances(
    edges: &[(NodeId, NodeId)],
    start: NodeId,
    max_depth: usize,
) -> HashMap<NodeId, usize> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start, 0);
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        let depth = dist[&node];
        if depth == max_depth {
            continue;
        }
        for &(src, dst) in edges {
            if src == node && !dist.contains_key(&dst) {
                dist.insert(dst, depth + 1);
                queue.push_back(dst);
            }
        }
    }

    dist
}

// Helper: Generate arbitrary edge list with sparse (possibly negative) ids
fn prop_edge_list(
    num_edges: impl Strategy<Value = usize>,
    max_node: impl Strategy<Value = i64>,
) -> impl Strategy<Value = Vec<(NodeId, NodeId)>> {
    (num_edges, max_node).prop_flat_map(|(n, max_node)| {
        // Spread ids out so they are non-consecutive
        prop::collection::vec(
            (-max_node..max_node, -max_node..max_node)
                .prop_map(|(src, dst)| (NodeId(src * 7), NodeId(dst * 7))),
            n..=n,
        )
    })
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_empty_graph_invariants() {
        let graph = CsrGraph::new();

        let (row_offsets, col_indices, edge_weights) = graph.csr_components();

        assert_eq!(row_offsets, &[0]); // Single offset for empty graph
        assert_eq!(col_indices.len(), 0);
        assert_eq!(edge_weights.len(), 0);
        assert_eq!(graph.num_nodes(), 0);
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn test_single_edge_invariants() {
        let graph = CsrGraph::from_edges(&[(NodeId(8), NodeId(3))]);

        let (row_offsets, col_indices, edge_weights) = graph.csr_components();

        // internal: 3 → 0, 8 → 1
        assert_eq!(graph.num_nodes(), 2);
        assert_eq!(row_offsets, &[0, 0, 1]);
        assert_eq!(col_indices, &[0]);
        assert_eq!(edge_weights, &[1.0]);
    }

    #[test]
    fn test_reference_distances() {
        let edges = [(NodeId(1), NodeId(2)), (NodeId(2), NodeId(3))];
        let dist = reference_hop_distances(&edges, NodeId(1), 1);
        assert_eq!(dist.len(), 2);
        assert_eq!(dist[&NodeId(2)], 1);
    }
}
