//! Node index: external id ↔ dense internal index
//!
//! External ids may be sparse, negative or non-consecutive. Internal indices
//! are dense in `[0, num_nodes)` and assigned in ascending order of external
//! id, so index order equals sorted id order regardless of input order.
//!
//! ```text
//! ids seen:   {40, 7, 1000}
//! internal:   7 → 0, 40 → 1, 1000 → 2
//! ```

use crate::error::{GraphError, Result};
use std::collections::HashMap;
use std::mem::size_of;

/// External node identifier, as it appears in the edge list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub i64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Approximate per-entry bookkeeping cost of a hash map slot (bytes)
const MAP_ENTRY_OVERHEAD: usize = 32;

/// Bidirectional mapping between external ids and internal indices
///
/// Built once from the full edge set, immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct NodeIndex {
    /// external → internal
    to_internal: HashMap<NodeId, u32>,

    /// internal → external (position is the internal index)
    to_external: Vec<NodeId>,
}

impl NodeIndex {
    /// Build the index from every endpoint of every edge
    ///
    /// Duplicate ids collapse; an empty edge list yields an empty index.
    #[must_use]
    pub fn from_edges(edges: &[(NodeId, NodeId)]) -> Self {
        let mut ids: Vec<NodeId> = edges.iter().flat_map(|&(src, dst)| [src, dst]).collect();
        ids.sort_unstable();
        ids.dedup();

        let to_internal = ids
            .iter()
            .enumerate()
            .map(|(idx, &id)| {
                #[allow(clippy::cast_possible_truncation)] // Graphs >4B nodes not supported
                let idx_u32 = idx as u32;
                (id, idx_u32)
            })
            .collect();

        Self {
            to_internal,
            to_external: ids,
        }
    }

    /// Internal index for an external id, `None` if never seen
    #[must_use]
    pub fn external_to_internal(&self, id: NodeId) -> Option<u32> {
        self.to_internal.get(&id).copied()
    }

    /// External id for an internal index, `None` if out of range
    #[must_use]
    pub fn internal_to_external(&self, idx: u32) -> Option<NodeId> {
        self.to_external.get(idx as usize).copied()
    }

    /// External id for an internal index
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeOutOfRange`] if `idx >= len()`
    pub fn internal_to_external_checked(&self, idx: u32) -> Result<NodeId> {
        self.internal_to_external(idx)
            .ok_or(GraphError::NodeOutOfRange {
                index: idx as usize,
                num_nodes: self.len(),
            })
    }

    /// Number of distinct nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.to_external.len()
    }

    /// True if no node has been indexed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_external.is_empty()
    }

    /// External ids in internal-index order (ascending)
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.to_external.iter().copied()
    }

    /// Translate a slice of internal indices to external ids
    pub(crate) fn resolve_all(&self, indices: &[u32]) -> Vec<NodeId> {
        indices
            .iter()
            .map(|&idx| self.to_external[idx as usize])
            .collect()
    }

    /// External id for an index known to be in range
    pub(crate) fn resolve(&self, idx: u32) -> NodeId {
        self.to_external[idx as usize]
    }

    /// Approximate bytes held by both mapping directions
    #[must_use]
    pub fn memory_estimate(&self) -> usize {
        let entry = size_of::<NodeId>() + size_of::<u32>() + MAP_ENTRY_OVERHEAD;
        self.to_internal.len() * entry + self.to_external.len() * entry
    }
}
