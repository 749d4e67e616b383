//! Error types for graph loading
//!
//! Queries never fail: unknown node ids map to "absent" results (zero degree,
//! empty neighbor list, empty traversal). Only reading an edge source and the
//! checked index accessor can produce a [`GraphError`].

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or addressing a graph
#[derive(Debug, Error)]
pub enum GraphError {
    /// Edge source could not be opened or read
    #[error("failed to read edge list {}: {source}", .path.display())]
    Io {
        /// Path of the edge source
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Internal index outside `[0, num_nodes)`
    #[error("internal index {index} out of range (graph has {num_nodes} nodes)")]
    NodeOutOfRange {
        /// Offending internal index
        index: usize,
        /// Number of nodes in the index
        num_nodes: usize,
    },
}

/// Result alias for graph loading operations
pub type Result<T> = std::result::Result<T, GraphError>;
