//! # In-memory mutation of chain-structured multigraphs
//!
//! * the primary storage is the [`Chain`](chain::Chain): a branchless run of
//!   [`Edge`](edge::Edge)s; vertices are implicit and reconstructed on demand
//! * vertex degrees are bounded by four; junctions are encoded by the
//!   [`Neigs`](neigs::Neigs) slot sets attached to chain ends
//! * chains aggregate into disconnected [`Component`](component::Component)s,
//!   and everything is owned by the [`Graph`](graph::Graph)
//! * the mutation algebra lives in [`transforms`]: vertex mergers and splits,
//!   edge and component creation/deletion, and edge pulling along a path
//! * every edge carries three dense indexes (graph-, component- and
//!   chain-wide) which the transforms keep consistent; [`integrity`] can
//!   verify the full invariant set at any point
//!
//! # Example
//!
//! ```
//! use chain_nets::{Graph, End, EndSlot};
//! use chain_nets::transforms::vertex_merger;
//!
//! // two disconnected linear chains
//! let mut gr = Graph::new();
//! gr.add_single_chain_component(5);
//! gr.add_single_chain_component(7);
//! assert_eq!(gr.cmpt_num(), 2);
//!
//! // merge two free ends: a single linear chain of 12 edges remains
//! vertex_merger::merge_11(
//!     &mut gr,
//!     EndSlot::new(0, End::A),
//!     EndSlot::new(1, End::B),
//! );
//! assert_eq!(gr.cmpt_num(), 1);
//! assert_eq!(gr.chain_num(), 1);
//! assert_eq!(gr.cn[0].length(), 12);
//! ```
//!
//! Concurrent mutation is unsupported: wrap the graph in an external lock if
//! several callers need access.

pub mod ends;
pub mod edge;
pub mod neigs;
pub mod chain;
pub mod chain_indexes;
pub mod component;
pub mod vertices;
pub mod paths;
pub mod graph;
pub mod transforms;
pub mod io;
pub mod integrity;

pub use chain::Chain;
pub use component::Component;
pub use edge::Edge;
pub use ends::{BulkSlot, End, EndSlot, Slot};
pub use graph::Graph;
pub use neigs::Neigs;

/// Graph-wide edge id.
pub type EgId = usize;

/// Graph-wide chain id.
pub type ChId = usize;

/// Component id.
pub type CmpId = usize;

/// Edge weight.
pub type Weight = f32;

/// Orientation of edges relative the direction of the host chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// B towards A.
    Backwards,
    /// A towards B.
    Forwards,
}

/// Sentinel for ids not yet assigned.
pub(crate) const UNSET: usize = usize::MAX;
