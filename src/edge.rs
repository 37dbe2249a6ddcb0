//! The atomic structural unit of the graph.

#[cfg(feature = "serde_support")]
use serde::{Serialize, Deserialize};

use crate::ends::End;
use crate::{ChId, CmpId, EgId, Weight, UNSET};

/// A single graph edge.
///
/// An edge carries three redundant indexes kept consistent by the transforms:
/// `ind` is unique over the whole graph, `indc` over the host component and
/// `indw` is the position inside the host chain. The orientation bit records
/// which of the two labelled edge ends points towards the chain head;
/// reversing the host chain reverses every edge.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Edge {
    /// Id graph-wide.
    pub ind: EgId,
    /// Id component-wide.
    pub indc: EgId,
    /// Position inside the host chain.
    pub indw: EgId,
    /// Host chain id.
    pub w: ChId,
    /// Host component id.
    pub c: CmpId,
    /// Weight of the edge.
    pub weight: Weight,
    forward: bool,
}

impl Edge {
    /// An edge with only the graph-wide id known.
    pub fn new(ind: EgId) -> Self {
        Edge {
            ind,
            indc: UNSET,
            indw: UNSET,
            w: UNSET,
            c: UNSET,
            weight: 1.,
            forward: true,
        }
    }

    /// A chain-embedded edge without component attribution yet.
    pub fn in_chain(ind: EgId, indw: EgId, w: ChId) -> Self {
        Edge {
            ind,
            indc: UNSET,
            indw,
            w,
            c: UNSET,
            weight: 1.,
            forward: true,
        }
    }

    /// Swaps the edge ends.
    pub fn reverse(&mut self) {
        self.forward = !self.forward;
    }

    /// True if end `A` of the edge points towards end `A` of the host chain.
    pub fn points_forwards(&self) -> bool {
        self.forward
    }

    pub fn orientation(&self) -> crate::Orientation {
        if self.forward {
            crate::Orientation::Forwards
        } else {
            crate::Orientation::Backwards
        }
    }

    /// Maps a side of the host chain to the edge end facing it.
    pub fn oriented_end(&self, side_in_chain: End) -> End {
        if self.forward {
            side_in_chain
        } else {
            side_in_chain.opp()
        }
    }

    /// Stamps component attribution.
    pub fn set_cmp(&mut self, c: CmpId, indc: EgId) {
        self.c = c;
        self.indc = indc;
    }

    /// Verifies that the indexes fit the graph dimensions given.
    pub fn check(&self, n_ind: EgId, n_indc: EgId, n_indw: EgId, n_ch: ChId, n_cmpt: CmpId) {
        assert!(self.ind < n_ind,
                "edge ind {} out of range: edgenum {}", self.ind, n_ind);
        assert!(self.indc < n_indc,
                "edge indc {} out of range for ind {}: component size {}",
                self.indc, self.ind, n_indc);
        assert!(self.indw < n_indw,
                "edge indw {} out of range for ind {}: chain length {}",
                self.indw, self.ind, n_indw);
        assert!(self.w < n_ch,
                "edge w {} out of range for ind {}: chain count {}",
                self.w, self.ind, n_ch);
        assert!(self.c < n_cmpt,
                "edge c {} out of range for ind {}: component count {}",
                self.c, self.ind, n_cmpt);
    }
}
