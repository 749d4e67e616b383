//! Graph storage layer
//!
//! Provides the node index, the two-phase CSR builder, the CSR graph itself
//! and the edge-list input adapter.

pub mod builder;
pub mod csr;
pub mod edge_list;
pub mod index;

pub use builder::{CsrBuilder, UNIT_WEIGHT};
pub use csr::{CsrGraph, GraphStats};
pub use edge_list::{parse_edge_line, EdgeListReader, LoadSummary, ParsedEdges};
pub use index::{NodeId, NodeIndex};
