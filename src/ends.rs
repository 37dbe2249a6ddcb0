//! Chain ends and the slot types addressing positions on chains.

use std::fmt;

#[cfg(feature = "serde_support")]
use serde::{Serialize, Deserialize};

use crate::{ChId, EgId};

/// One of the two ends of a chain (or of an edge).
///
/// A chain is a linear sequence of edges, so it exposes exactly two ends.
/// The same two labels orient individual edges relative to their host chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum End {
    /// Tail side: the first edge of the chain storage.
    A,
    /// Head side: the last edge of the chain storage.
    B,
}

impl End {
    /// Both ends, in storage order.
    pub const BOTH: [End; 2] = [End::A, End::B];

    /// The opposite end.
    pub fn opp(self) -> End {
        match self {
            End::A => End::B,
            End::B => End::A,
        }
    }

    /// Index usable with the per-end arrays of a chain.
    pub fn idx(self) -> usize {
        self as usize
    }
}

impl fmt::Display for End {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            End::A => write!(f, "A"),
            End::B => write!(f, "B"),
        }
    }
}

/// Addresses one end of a chain: the vertex sitting at that end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct EndSlot {
    /// Graph-wide id of the host chain.
    pub w: ChId,
    /// Which end of the chain.
    pub e: End,
}

impl EndSlot {
    pub fn new(w: ChId, e: End) -> Self {
        EndSlot { w, e }
    }

    /// The slot at the opposite end of the same chain.
    pub fn opp(self) -> EndSlot {
        EndSlot { w: self.w, e: self.e.opp() }
    }
}

impl fmt::Display for EndSlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{} {}}}", self.w, self.e)
    }
}

/// Addresses an internal vertex of a chain.
///
/// Position `a` names the vertex between edges `a - 1` and `a`, so valid bulk
/// positions lie in `1..length`. Positions `0` and `length` alias the chain
/// ends and are accepted by the operations that rotate cycle storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct BulkSlot {
    /// Graph-wide id of the host chain.
    pub w: ChId,
    /// Vertex position inside the chain.
    pub a: EgId,
}

impl BulkSlot {
    pub fn new(w: ChId, a: EgId) -> Self {
        BulkSlot { w, a }
    }
}

impl fmt::Display for BulkSlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{} at {}}}", self.w, self.a)
    }
}

/// Either kind of slot; used where an operation accepts both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum Slot {
    End(EndSlot),
    Bulk(BulkSlot),
}

impl Slot {
    pub fn w(&self) -> ChId {
        match self {
            Slot::End(s) => s.w,
            Slot::Bulk(s) => s.w,
        }
    }
}

impl From<EndSlot> for Slot {
    fn from(s: EndSlot) -> Self {
        Slot::End(s)
    }
}

impl From<BulkSlot> for Slot {
    fn from(s: BulkSlot) -> Self {
        Slot::Bulk(s)
    }
}
