//! Graph algorithms (degree scans, bounded BFS)

pub mod degree;
pub mod traversal;

pub use degree::node_of_max_degree;
pub use traversal::{bfs_bounded, BfsResult};
