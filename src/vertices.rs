//! On-demand reconstruction of vertex objects.
//!
//! The graph stores edges and chains only; vertices are implicit. When
//! explicit vertex instances are needed (vertex counts, JSON export), they
//! are rebuilt from chain connectivity, grouped by degree, with ids dense
//! over the whole graph.

#[cfg(feature = "serde_support")]
use serde::{Serialize, Deserialize};

use crate::chain::Chain;
use crate::chain_indexes::ChainIndexes;
use crate::ends::{BulkSlot, End, EndSlot};
use crate::{ChId, CmpId, EgId};

/// Graph-wide vertex id.
pub type VtxId = usize;

/// The slots a vertex groups, keyed by its degree.
///
/// A vertex of degree 1, 3 or 4 groups that many chain end-slots; a degree-2
/// vertex sits between two consecutive edges of one chain; the single vertex
/// of a disconnected cycle (treated as degree 0) is addressed by the two
/// boundary slots of the cycle chain.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum VertexSlots {
    CycleBoundary([EndSlot; 2]),
    Leaf(EndSlot),
    Bulk([BulkSlot; 2]),
    Junction3([EndSlot; 3]),
    Junction4([EndSlot; 4]),
}

/// An explicit graph vertex.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// Vertex id, dense in `[0, V)` across all degrees.
    pub ind: VtxId,
    pub slots: VertexSlots,
}

impl Vertex {
    pub fn degree(&self) -> usize {
        match self.slots {
            VertexSlots::CycleBoundary(_) => 0,
            VertexSlots::Leaf(_) => 1,
            VertexSlots::Bulk(_) => 2,
            VertexSlots::Junction3(_) => 3,
            VertexSlots::Junction4(_) => 4,
        }
    }

    pub fn contains_end_slot(&self, s: EndSlot) -> bool {
        match &self.slots {
            VertexSlots::CycleBoundary(ss) => ss.contains(&s),
            VertexSlots::Leaf(u) => *u == s,
            VertexSlots::Bulk(_) => false,
            VertexSlots::Junction3(ss) => ss.contains(&s),
            VertexSlots::Junction4(ss) => ss.contains(&s),
        }
    }

    pub fn contains_bulk_slot(&self, s: BulkSlot) -> bool {
        match &self.slots {
            VertexSlots::Bulk(ss) => ss.contains(&s),
            _ => false,
        }
    }

    /// Host chain ids of the grouped slots.
    pub fn ws(&self) -> Vec<ChId> {
        match &self.slots {
            VertexSlots::CycleBoundary(ss) => ss.iter().map(|s| s.w).collect(),
            VertexSlots::Leaf(u) => vec![u.w],
            VertexSlots::Bulk(ss) => ss.iter().map(|s| s.w).collect(),
            VertexSlots::Junction3(ss) => ss.iter().map(|s| s.w).collect(),
            VertexSlots::Junction4(ss) => ss.iter().map(|s| s.w).collect(),
        }
    }

    /// End indexes (for end slots) or positions (for bulk slots).
    pub fn es(&self) -> Vec<usize> {
        match &self.slots {
            VertexSlots::CycleBoundary(ss) => ss.iter().map(|s| s.e.idx()).collect(),
            VertexSlots::Leaf(u) => vec![u.e.idx()],
            VertexSlots::Bulk(ss) => ss.iter().map(|s| s.a).collect(),
            VertexSlots::Junction3(ss) => ss.iter().map(|s| s.e.idx()).collect(),
            VertexSlots::Junction4(ss) => ss.iter().map(|s| s.e.idx()).collect(),
        }
    }

    /// Host component of the vertex.
    pub fn cmpt(&self, cn: &[Chain]) -> CmpId {
        cn[self.ws()[0]].c
    }

    /// True if both vertices group the same slot set.
    ///
    /// Slot order is immaterial; since a vertex never lists the same slot
    /// twice, permutation equality reduces to set equality.
    pub fn same_slots(&self, other: &Vertex) -> bool {
        fn sorted<T: Ord + Copy>(ss: &[T]) -> Vec<T> {
            let mut v = ss.to_vec();
            v.sort();
            v
        }
        match (&self.slots, &other.slots) {
            (VertexSlots::CycleBoundary(a), VertexSlots::CycleBoundary(b)) =>
                sorted(a) == sorted(b),
            (VertexSlots::Leaf(a), VertexSlots::Leaf(b)) => a == b,
            (VertexSlots::Bulk(a), VertexSlots::Bulk(b)) => sorted(a) == sorted(b),
            (VertexSlots::Junction3(a), VertexSlots::Junction3(b)) =>
                sorted(a) == sorted(b),
            (VertexSlots::Junction4(a), VertexSlots::Junction4(b)) =>
                sorted(a) == sorted(b),
            _ => false,
        }
    }
}

/// The vertex collections classified by degree.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Vertices {
    pub deg0: Vec<Vertex>,
    pub deg1: Vec<Vertex>,
    pub deg2: Vec<Vertex>,
    pub deg3: Vec<Vertex>,
    pub deg4: Vec<Vertex>,
}

impl Vertices {
    /// Rebuilds all collections from chain data and the classification.
    pub fn create(cn: &[Chain], chis: &ChainIndexes) -> Self {
        let mut vs = Vertices::default();
        let mut ind: VtxId = 0;

        // degree 0: boundaries of disconnected cycles
        for &w in &chis.cn22 {
            vs.deg0.push(Vertex {
                ind,
                slots: VertexSlots::CycleBoundary(
                    [EndSlot::new(w, End::A), EndSlot::new(w, End::B)]),
            });
            ind += 1;
        }

        // degree 1: both ends of free chains, then the free ends of 13 and 14
        for &w in &chis.cn11 {
            for e in End::BOTH {
                vs.deg1.push(Vertex { ind, slots: VertexSlots::Leaf(EndSlot::new(w, e)) });
                ind += 1;
            }
        }
        for &s in &chis.cn13 {
            vs.deg1.push(Vertex { ind, slots: VertexSlots::Leaf(s) });
            ind += 1;
        }
        for &s in &chis.cn14 {
            vs.deg1.push(Vertex { ind, slots: VertexSlots::Leaf(s) });
            ind += 1;
        }

        // degree 2: internal chain vertices
        for m in cn {
            for a in 1..m.length() {
                vs.deg2.push(Vertex {
                    ind,
                    slots: VertexSlots::Bulk(
                        [BulkSlot::new(m.idw, a - 1), BulkSlot::new(m.idw, a)]),
                });
                ind += 1;
            }
        }

        // degree 3
        {
            let mut attempt = |s: EndSlot, vv: &mut Vec<Vertex>, ind: &mut VtxId| {
                let ng = cn[s.w].ngs_at(s.e);
                let v = Vertex {
                    ind: *ind,
                    slots: VertexSlots::Junction3([s, ng[0], ng[1]]),
                };
                if !vv.iter().any(|u| u.same_slots(&v)) {
                    vv.push(v);
                    *ind += 1;
                }
            };
            for &w in &chis.cn33 {
                for e in End::BOTH {
                    attempt(EndSlot::new(w, e), &mut vs.deg3, &mut ind);
                }
            }
            for &s in &chis.cn13 {
                attempt(s.opp(), &mut vs.deg3, &mut ind);
            }
            for &s in &chis.cn34 {
                attempt(s, &mut vs.deg3, &mut ind);
            }
        }

        // degree 4
        {
            let mut attempt = |s: EndSlot, vv: &mut Vec<Vertex>, ind: &mut VtxId| {
                let ng = cn[s.w].ngs_at(s.e);
                let v = Vertex {
                    ind: *ind,
                    slots: VertexSlots::Junction4([s, ng[0], ng[1], ng[2]]),
                };
                if !vv.iter().any(|u| u.same_slots(&v)) {
                    vv.push(v);
                    *ind += 1;
                }
            };
            for &w in &chis.cn44 {
                for e in End::BOTH {
                    attempt(EndSlot::new(w, e), &mut vs.deg4, &mut ind);
                }
            }
            for &s in &chis.cn14 {
                attempt(s.opp(), &mut vs.deg4, &mut ind);
            }
            for &s in &chis.cn34 {
                attempt(s.opp(), &mut vs.deg4, &mut ind);
            }
        }

        vs
    }

    pub fn by_degree(&self, d: usize) -> &[Vertex] {
        match d {
            0 => &self.deg0,
            1 => &self.deg1,
            2 => &self.deg2,
            3 => &self.deg3,
            4 => &self.deg4,
            _ => panic!("unsupported vertex degree {}", d),
        }
    }

    pub fn num(&self, d: usize) -> usize {
        self.by_degree(d).len()
    }

    pub fn num_total(&self) -> usize {
        (0..=4).map(|d| self.num(d)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.deg0.iter()
            .chain(self.deg1.iter())
            .chain(self.deg2.iter())
            .chain(self.deg3.iter())
            .chain(self.deg4.iter())
    }

    /// Finds the vertex of degree `d` containing the given end slot.
    ///
    /// A degree of 2 at a chain end only occurs on disconnected cycles, so it
    /// is looked up among the cycle boundary vertices.
    pub fn from_end_slot(&self, d: usize, s: EndSlot) -> Option<VtxId> {
        let vv = match d {
            0 | 2 => &self.deg0,
            1 => &self.deg1,
            3 => &self.deg3,
            4 => &self.deg4,
            _ => return None,
        };
        vv.iter().find(|v| v.contains_end_slot(s)).map(|v| v.ind)
    }

    /// Finds the degree-2 vertex containing the given bulk slot.
    pub fn from_bulk_slot(&self, s: BulkSlot) -> Option<VtxId> {
        self.deg2.iter().find(|v| v.contains_bulk_slot(s)).map(|v| v.ind)
    }

    /// The subset of vertices belonging to component `c`, collection ids kept.
    pub fn for_compartment(&self, cn: &[Chain], c: CmpId) -> Vertices {
        let filter = |vv: &[Vertex]| -> Vec<Vertex> {
            vv.iter().filter(|v| v.cmpt(cn) == c).cloned().collect()
        };
        Vertices {
            deg0: filter(&self.deg0),
            deg1: filter(&self.deg1),
            deg2: filter(&self.deg2),
            deg3: filter(&self.deg3),
            deg4: filter(&self.deg4),
        }
    }
}

/// An edge endpoint pair for exports, as vertex ids.
pub type EdgeVertices = [VtxId; 2];

/// Finds the vertex ids at both endpoints of the edge at a bulk position.
pub fn edge_vertices(
    cn: &[Chain],
    vs: &Vertices,
    s: BulkSlot,
) -> [Option<VtxId>; 2] {
    let BulkSlot { w, a } = s;
    let m = &cn[w];

    if a == 0 {
        let i1 = vs.from_end_slot(m.ngs_at(End::A).num() + 1, EndSlot::new(w, End::A));
        let i2 = if m.length() == 1 {
            vs.from_end_slot(m.ngs_at(End::B).num() + 1, EndSlot::new(w, End::B))
        } else {
            vs.from_bulk_slot(BulkSlot::new(w, a))
        };
        [i1, i2]
    } else if a == m.length() - 1 {
        let d = m.ngs_at(End::B).num() + 1;
        [vs.from_bulk_slot(s), vs.from_end_slot(d, EndSlot::new(w, End::B))]
    } else {
        [vs.from_bulk_slot(s), vs.from_bulk_slot(BulkSlot::new(w, a + 1))]
    }
}
