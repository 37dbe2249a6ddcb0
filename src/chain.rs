//! Chains: branchless runs of edges forming the primary graph storage.

use num_traits::Zero;

#[cfg(feature = "serde_support")]
use serde::{Serialize, Deserialize};

use crate::edge::Edge;
use crate::ends::{BulkSlot, End, EndSlot};
use crate::neigs::Neigs;
use crate::{ChId, CmpId, EgId, Weight, UNSET};

/// Minimal number of edges in a chain cycled onto itself.
pub const MIN_CYCLE_LENGTH: EgId = 2;

/// Minimal number of edges in any chain.
pub const MIN_LENGTH: EgId = 1;

/// A linear sequence of edges without internal branching.
///
/// Chain ends may form branching sites when connected to other chains. A
/// chain connected to nothing, or a maximal set of mutually connected chains,
/// forms a disconnected component. Internal vertices always have degree 2;
/// an end vertex has degree `1 + ngs[end].num()`.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Chain {
    /// Edges forming this chain.
    pub g: Vec<Edge>,

    /// Slots connected to this chain at each of the two ends.
    pub ngs: [Neigs; 2],

    /// Chain id over the whole graph.
    pub idw: ChId,

    /// Chain id inside the host component.
    pub idc: ChId,

    /// Id of the host component.
    pub c: CmpId,
}

impl Chain {
    /// An empty chain holding only its graph-wide id.
    pub fn new(idw: ChId) -> Self {
        Chain {
            g: Vec::new(),
            ngs: [Neigs::new(), Neigs::new()],
            idw,
            idc: UNSET,
            c: UNSET,
        }
    }

    /// A chain of `length` edges with graph-wide ids starting at `ei`.
    pub fn with_length(length: EgId, idw: ChId, mut ei: EgId) -> Self {
        let mut m = Chain::new(idw);
        for _ in 0..length {
            m.append_edge(Edge::new(ei));
            ei += 1;
        }
        m
    }

    pub fn length(&self) -> EgId {
        self.g.len()
    }

    /// Sum of the edge weights.
    pub fn weight(&self) -> Weight {
        let mut res = Weight::zero();
        for o in &self.g {
            res += o.weight;
        }
        res
    }

    pub fn has_edge(&self, ind: EgId) -> bool {
        self.g.iter().any(|eg| eg.ind == ind)
    }

    pub fn ngs_at(&self, e: End) -> &Neigs {
        &self.ngs[e.idx()]
    }

    pub fn ngs_at_mut(&mut self, e: End) -> &mut Neigs {
        &mut self.ngs[e.idx()]
    }

    // Edge storage surgery ---------------------------------------------------

    /// Inserts an edge at position `a`, shifting the successors forwards.
    pub fn insert_edge(&mut self, mut e: Edge, a: EgId) {
        assert!(a <= self.length(),
                "edge insert at {} beyond length {} of chain {}",
                a, self.length(), self.idw);
        e.w = self.idw;
        self.g.insert(a, e);
        for i in a..self.length() {
            self.g[i].indw = i;
        }
    }

    /// Removes the edge at position `a`, shifting the successors backwards.
    pub fn remove_edge(&mut self, a: EgId) -> Edge {
        assert!(a < self.length(),
                "edge removal at {} beyond length {} of chain {}",
                a, self.length(), self.idw);
        let e = self.g.remove(a);
        for i in a..self.length() {
            self.g[i].indw = i;
        }
        e
    }

    /// Appends an edge at the chain head (end `B`).
    pub fn append_edge(&mut self, mut e: Edge) {
        e.w = self.idw;
        e.indw = self.length();
        self.g.push(e);
    }

    /// Reverses the edge order, reversing the orientation of every edge.
    pub fn reverse_g(&mut self) {
        self.g.reverse();
        for (a, o) in self.g.iter_mut().enumerate() {
            o.reverse();
            o.indw = a;
        }
    }

    /// Restamps the edges with host chain id `w` and dense in-chain positions.
    pub fn set_g_w_to(&mut self, w: ChId) {
        for (a, o) in self.g.iter_mut().enumerate() {
            o.w = w;
            o.indw = a;
        }
    }

    /// Restamps the edges with the chain's own id.
    pub fn set_g_w(&mut self) {
        let w = self.idw;
        self.set_g_w_to(w);
    }

    /// Sets the graph-wide chain id and restamps the edges accordingly.
    pub fn set_w(&mut self, w: ChId) {
        self.idw = w;
        self.set_g_w();
    }

    /// Renumbers the edges into component `newc` starting at `initindc`.
    ///
    /// Returns the next free component-wide edge id.
    pub fn set_g_cmp(&mut self, newc: CmpId, mut initindc: EgId) -> EgId {
        for q in &mut self.g {
            q.set_cmp(newc, initindc);
            initindc += 1;
        }
        initindc
    }

    /// Moves the chain into component `newc` under chain id `newidc`.
    ///
    /// Returns the next free component-wide edge id.
    pub fn set_cmpt(&mut self, newc: CmpId, newidc: ChId, initindc: EgId) -> EgId {
        self.c = newc;
        self.idc = newidc;
        self.set_g_cmp(newc, initindc)
    }

    // Boundary queries -------------------------------------------------------

    pub fn tail(&self) -> &Edge {
        &self.g[0]
    }

    pub fn head(&self) -> &Edge {
        self.g.last().expect("empty chain has no head edge")
    }

    pub fn tail_ind(&self) -> EgId {
        self.tail().ind
    }

    pub fn head_ind(&self) -> EgId {
        self.head().ind
    }

    pub fn is_tail(&self, a: EgId) -> bool {
        a == 0
    }

    pub fn is_head(&self, a: EgId) -> bool {
        a + 1 == self.length()
    }

    pub fn is_tail_ind(&self, ind: EgId) -> bool {
        ind == self.tail_ind()
    }

    pub fn is_head_ind(&self, ind: EgId) -> bool {
        ind == self.head_ind()
    }

    pub fn is_end(&self, a: EgId) -> bool {
        self.is_tail(a) || self.is_head(a)
    }

    /// The boundary edge at chain end `e`.
    pub fn end_edge(&self, e: End) -> &Edge {
        match e {
            End::A => self.tail(),
            End::B => self.head(),
        }
    }

    /// The edge end facing outwards at chain end `e`.
    pub fn edge_end(&self, e: End) -> End {
        match e {
            End::A => if self.tail().points_forwards() { End::A } else { End::B },
            End::B => if self.head().points_forwards() { End::B } else { End::A },
        }
    }

    /// True if the given edge end is the outward face of the chain head.
    pub fn eg_end_is_head(&self, ind: EgId, eg_end: End) -> bool {
        self.is_head_ind(ind) &&
            ((self.head().points_forwards() && eg_end == End::B) ||
             (!self.head().points_forwards() && eg_end == End::A))
    }

    /// True if the given edge end is the outward face of the chain tail.
    pub fn eg_end_is_tail(&self, ind: EgId, eg_end: End) -> bool {
        self.is_tail_ind(ind) &&
            ((self.tail().points_forwards() && eg_end == End::A) ||
             (!self.tail().points_forwards() && eg_end == End::B))
    }

    /// The edge sharing the internal vertex at end `eg_end` of edge `a`.
    ///
    /// Panics if the edge end faces outwards at a chain boundary.
    pub fn connected_edge(&self, a: EgId, eg_end: End) -> Option<&Edge> {
        assert!(!self.eg_end_is_tail(self.g[a].ind, eg_end),
                "edge end {} at {} of chain {} is the chain tail", eg_end, a, self.idw);
        assert!(!self.eg_end_is_head(self.g[a].ind, eg_end),
                "edge end {} at {} of chain {} is the chain head", eg_end, a, self.idw);

        let pf = self.g[a].points_forwards();
        if a + 1 < self.length() && ((pf && eg_end == End::B) || (!pf && eg_end == End::A)) {
            return Some(&self.g[a + 1]);
        }
        if a > 0 && ((pf && eg_end == End::A) || (!pf && eg_end == End::B)) {
            return Some(&self.g[a - 1]);
        }
        None
    }

    /// Position of the edge adjoining end `eg_end` of the edge at `a`.
    ///
    /// Only meaningful at internal chain vertices; `None` past a boundary.
    pub fn neig_pos_of_eg_end(&self, a: EgId, eg_end: End) -> Option<EgId> {
        let fwd = self.g[a].points_forwards();
        let towards_head = (fwd && eg_end == End::B) || (!fwd && eg_end == End::A);
        if towards_head {
            if a + 1 < self.length() { Some(a + 1) } else { None }
        } else if a > 0 {
            Some(a - 1)
        } else {
            None
        }
    }

    /// Edge end of the edge at `b` facing the vertex shared with the edge at `a`.
    ///
    /// The two positions must be adjacent inside the chain.
    pub fn internal_eg_end(&self, a: EgId, b: EgId) -> End {
        assert!(a == b + 1 || b == a + 1,
                "positions {} and {} of chain {} do not share a vertex", a, b, self.idw);
        if self.g[b].points_forwards() {
            if a > b { End::B } else { End::A }
        } else if a > b {
            End::A
        } else {
            End::B
        }
    }

    /// Converts a chain end to the position of the boundary edge.
    pub fn end2a(&self, e: End) -> EgId {
        match e {
            End::A => 0,
            End::B => self.length() - 1,
        }
    }

    /// Converts an edge position to a chain end, if the edge is at a boundary.
    ///
    /// Single-edge chains have no determinable end.
    pub fn a2end(&self, a: EgId) -> Option<End> {
        assert!(a < self.length(),
                "position {} exceeds length {} of chain {}", a, self.length(), self.idw);
        assert!(self.is_end(a), "position {} of chain {} is not an end edge", a, self.idw);
        if self.length() == 1 {
            None
        } else if a == 0 {
            Some(End::A)
        } else {
            Some(End::B)
        }
    }

    /// Maps an edge end to the bulk slot of the vertex it touches.
    pub fn bulk_slot_of(&self, eg_end: End, a: EgId) -> BulkSlot {
        assert!(a < self.length(),
                "position {} exceeds length {} of chain {}", a, self.length(), self.idw);
        let frw = self.g[a].points_forwards();
        let pos = match eg_end {
            End::A => if frw { a } else { a + 1 },
            End::B => if frw { a + 1 } else { a },
        };
        BulkSlot::new(self.idw, pos)
    }

    /// Graph-wide id of the boundary edge at chain end `e`.
    pub fn end2ind(&self, e: End) -> EgId {
        self.end_edge(e).ind
    }

    /// Converts a boundary edge id to the chain end it occupies.
    ///
    /// For single-edge chains the result is derived from the edge orientation
    /// and the `eg_end` hint. Panics if the edge is not at a boundary.
    pub fn ind2end(&self, ind: EgId, eg_end: End) -> End {
        if self.length() == 1 {
            assert!(ind == self.g[0].ind,
                    "{} is not an end edge ind of chain {}", ind, self.idw);
            return if self.g[0].points_forwards() { eg_end } else { eg_end.opp() };
        }
        if ind == self.tail_ind() {
            End::A
        } else if ind == self.head_ind() {
            End::B
        } else {
            panic!("{} is not an end edge ind of chain {}", ind, self.idw);
        }
    }

    /// Like [`Chain::ind2end`], disambiguating single-edge chains by a
    /// connected partner slot instead of an edge end.
    pub fn ind2end_by_neig(&self, ind: EgId, nb: EndSlot) -> End {
        if self.length() == 1 {
            if ind == self.tail_ind() && self.ngs_at(End::A).has(nb) {
                return End::A;
            }
            if ind == self.head_ind() && self.ngs_at(End::B).has(nb) {
                return End::B;
            }
            panic!("{} is not an end edge ind of chain {}", ind, self.idw);
        }
        self.ind2end(ind, End::A)
    }

    // Connectivity queries ---------------------------------------------------

    pub fn is_connected_at(&self, e: End) -> bool {
        !self.ngs_at(e).is_empty()
    }

    /// True if end `e` is connected to some end of chain `n`.
    pub fn has_such_neig(&self, e: End, n: ChId) -> bool {
        self.ngs_at(e).iter().any(|s| s.w == n)
    }

    pub fn has_one_free_end(&self) -> bool {
        self.is_connected_at(End::A) != self.is_connected_at(End::B)
    }

    pub fn the_only_free_end(&self) -> End {
        assert!(self.has_one_free_end(),
                "chain {} does not have a single free end", self.idw);
        if self.is_connected_at(End::A) { End::B } else { End::A }
    }

    pub fn has_a_free_end(&self) -> Option<End> {
        if !self.is_connected_at(End::A) {
            Some(End::A)
        } else if !self.is_connected_at(End::B) {
            Some(End::B)
        } else {
            None
        }
    }

    pub fn get_single_connected_end(&self) -> End {
        assert!(self.has_one_free_end(),
                "chain {}: the connected end is not single", self.idw);
        self.the_only_free_end().opp()
    }

    /// The end connected through a three-way junction, if unique.
    pub fn get_single_3way_end(&self) -> End {
        let na = self.ngs_at(End::A).num();
        let nb = self.ngs_at(End::B).num();
        if na == 2 && nb != 2 {
            End::A
        } else if na != 2 && nb == 2 {
            End::B
        } else {
            panic!("chain {}: the 3-way end is not single", self.idw);
        }
    }

    /// True if the chain is cycled onto itself and connected to nothing else.
    pub fn is_disconnected_cycle(&self) -> bool {
        self.ngs_at(End::A).num() == 1 &&
        self.ngs_at(End::B).num() == 1 &&
        self.ngs_at(End::A)[0] == self.ngs_at(End::B)[0].opp()
    }

    /// True if the chain ends are connected to each other and to other chains.
    pub fn is_connected_cycle(&self) -> bool {
        if self.ngs_at(End::A).num() > 1 {
            if !self.is_connected_at(End::B) {
                return false;
            }
            for sa in self.ngs_at(End::A) {
                for sb in self.ngs_at(End::B) {
                    if sa == sb {
                        return true;
                    }
                }
            }
        }
        false
    }

    pub fn is_cycle(&self) -> bool {
        self.is_disconnected_cycle() || self.is_connected_cycle()
    }

    /// True if an edge can be removed without violating the length minima.
    pub fn is_shrinkable(&self) -> bool {
        if self.has_one_free_end() {
            return true;
        }
        if self.is_cycle() {
            self.length() > MIN_CYCLE_LENGTH
        } else {
            self.length() > MIN_LENGTH
        }
    }

    /// Number of vertices of degree `d` contributed by this chain.
    ///
    /// Junction vertices (degrees 3 and 4) are shared between chains, so the
    /// per-chain counts over the graph total to 3x (resp. 4x) the number of
    /// junctions.
    pub fn num_vertices(&self, d: usize) -> usize {
        let na = self.ngs_at(End::A).num();
        let nb = self.ngs_at(End::B).num();
        match d {
            0 => usize::from(self.is_disconnected_cycle()),
            1 => {
                match (self.is_connected_at(End::A), self.is_connected_at(End::B)) {
                    (true, true) => 0,
                    (false, false) => 2,
                    _ => 1,
                }
            }
            2 => self.length() - 1,
            3 | 4 => {
                let n = d - 1;
                usize::from(na == n) + usize::from(nb == n)
            }
            _ => panic!("unsupported vertex degree {}", d),
        }
    }
}

impl PartialEq for Chain {
    fn eq(&self, other: &Self) -> bool {
        self.g == other.g &&
        self.ngs == other.ngs &&
        self.idw == other.idw &&
        self.idc == other.idc &&
        self.c == other.c
    }
}
