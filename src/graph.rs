//! The graph: chain and component arenas plus derived bookkeeping.

use log::debug;

#[cfg(feature = "serde_support")]
use serde::{Serialize, Deserialize};

use crate::chain::Chain;
use crate::chain_indexes::ChainIndexes;
use crate::component::Component;
use crate::edge::Edge;
use crate::ends::{BulkSlot, End, EndSlot};
use crate::neigs::Neigs;
use crate::paths::over_end_slots::EndSlotPaths;
use crate::vertices::{self, Vertices, VtxId};
use crate::{ChId, CmpId, EgId, UNSET};

/// The aggregate of all chains and components.
///
/// The graph exclusively owns both arenas; every cross-reference is an
/// integer id. All mutation goes through methods of this type or through the
/// transform functions of [`crate::transforms`], each of which leaves the
/// derived bookkeeping (`glm`, `gla`, classification, vertices) consistent.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Graph {
    /// The chain arena.
    pub cn: Vec<Chain>,

    /// The component arena.
    pub ct: Vec<Component>,

    /// Graph-wide classification of chains by end degrees.
    pub chis: ChainIndexes,

    /// Vertices reconstructed from chain data on every update.
    pub vertices: Vertices,

    /// Current number of edges.
    pub edgenum: EgId,

    /// Maps graph-wide edge ids to host chain ids.
    pub glm: Vec<ChId>,

    /// Maps graph-wide edge ids to positions inside the host chain.
    pub gla: Vec<EgId>,

    /// If set, per-component edge adjacency lists are rebuilt on update.
    pub use_adjacency: bool,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    pub fn chain_num(&self) -> ChId {
        self.cn.len()
    }

    pub fn cmpt_num(&self) -> CmpId {
        self.ct.len()
    }

    pub fn ind_last_chain(&self) -> ChId {
        self.chain_num() - 1
    }

    pub fn ind_last_cmpt(&self) -> CmpId {
        self.cmpt_num() - 1
    }

    // Construction -----------------------------------------------------------

    /// Appends `num` disconnected linear chains of `len` edges each.
    pub fn generate_single_chain_components(&mut self, num: CmpId, len: EgId) {
        for _ in 0..num {
            self.add_single_chain_component(len);
        }
        debug!("generated {} single-chain components, {} edges total",
               num, self.edgenum);
    }

    /// Appends one disconnected linear chain of `len` edges.
    pub fn add_single_chain_component(&mut self, len: EgId) {
        let idw = self.chain_num();
        self.cn.push(Chain::with_length(len, idw, self.edgenum));
        self.edgenum += len;

        let ind = self.cmpt_num();
        let cmp = Component::with_chain(ind, &mut self.cn, idw);
        self.ct.push(cmp);

        self.update();
    }

    /// Installs a ready-made set of connected chains as a new component.
    ///
    /// Edge graph-wide ids and chain ids are assigned here; the chains must
    /// already be mutually consistent in their neighborhoods.
    pub fn add_component(&mut self, mm: Vec<Chain>) {
        let ind = self.cmpt_num();
        self.ct.push(Component::new(ind));

        for mut m in mm {
            for g in &mut m.g {
                g.ind = self.edgenum;
                self.edgenum += 1;
            }
            if m.idw == UNSET {
                m.set_w(self.chain_num());
            }
            let w = m.idw;
            self.cn.push(m);
            self.ct[ind].append_chain(&mut self.cn, w);
        }

        self.update();
    }

    // Component management ---------------------------------------------------

    /// Appends component `don` to component `acc` and drops the `don` entry.
    ///
    /// The last component moves into the vacated arena slot if needed.
    pub fn merge_components(&mut self, acc: CmpId, don: CmpId) {
        assert!(acc != don, "merging component {} with itself", acc);

        let don_ww = std::mem::take(&mut self.ct[don].ww);
        let mut ww = std::mem::take(&mut self.ct[acc].ww);
        ww.extend(don_ww);
        self.ct[acc].rebuild(&mut self.cn, ww);

        let last = self.ind_last_cmpt();
        if don != last {
            let mut moved = self.ct.pop().expect("component arena is empty");
            moved.set_ind(&mut self.cn, don);
            self.ct[don] = moved;
        } else {
            self.ct.pop();
        }
    }

    /// Probes whether the component of `s` stays cycled over chain `s.w`.
    ///
    /// If removing the junction at `s` disconnects the component, the side
    /// reachable from `s` (excluding chain `s.w` itself) splits off into a
    /// new component. Returns true if the component remained cycled.
    pub fn cut_component_at(&mut self, s: EndSlot) -> bool {
        let c = self.cn[s.w].c;

        let (is_cycle, partition) = {
            let mut pp = EndSlotPaths::new(&self.ct[c], &self.cn);
            let is_cycle = pp.are_connected(s, s.opp(), false);
            if is_cycle {
                (true, None)
            } else {
                (false, Some(pp.classify_chains_by_connectivity(s)))
            }
        };

        debug!("component {} is {}cycled over chain {}",
               c, if is_cycle { "" } else { "not " }, s.w);

        if let Some([accessible, blocked]) = partition {
            self.apply_component_split(c, accessible, blocked);
        }
        is_cycle
    }

    /// Reachability probe used by callers to pick a transform variant.
    pub fn mark_branch(&mut self, source: EndSlot) -> bool {
        let c = self.cn[source.w].c;
        let mut pp = EndSlotPaths::new(&self.ct[c], &self.cn);
        pp.are_connected(source, source.opp(), false)
    }

    /// Installs an accessible/blocked partition of component `c`.
    ///
    /// The accessible chains become a new component at the end of the arena;
    /// the blocked ones stay under the old id.
    pub(crate) fn apply_component_split(
        &mut self,
        c: CmpId,
        accessible: Vec<ChId>,
        blocked: Vec<ChId>,
    ) {
        let newc = self.cmpt_num();
        let mut newcmp = Component::new(newc);
        newcmp.rebuild(&mut self.cn, accessible);
        self.ct.push(newcmp);

        self.ct[c].rebuild(&mut self.cn, blocked);
    }

    /// Moves the listed chains out of component `c` into a new component.
    pub fn split_component(&mut self, c: CmpId, rm: Vec<ChId>) {
        let newc = self.cmpt_num();
        self.ct.push(Component::new(newc));
        let (head, tail) = self.ct.split_at_mut(newc);
        head[c].move_to(&mut self.cn, &mut tail[0], &rm);
    }

    // Slot surgery -----------------------------------------------------------

    pub fn ngs_at(&self, s: EndSlot) -> &Neigs {
        self.cn[s.w].ngs_at(s.e)
    }

    pub fn ngs_at_mut(&mut self, s: EndSlot) -> &mut Neigs {
        self.cn[s.w].ngs_at_mut(s.e)
    }

    /// Copies the connection partners of slot `f` onto slot `t`.
    ///
    /// Slots previously connected to `f` now list `t` instead; `f` keeps its
    /// own (now stale) slot list.
    pub fn copy_neigs(&mut self, f: EndSlot, t: EndSlot) {
        let ngs = self.ngs_at(f).clone();
        *self.ngs_at_mut(t) = ngs;
        self.replace_slot_in_neigs(f, t);
    }

    /// Disconnects slot `s` from every slot listing it.
    pub fn remove_slot_from_neigs(&mut self, s: EndSlot) {
        let sc = self.ngs_at(s).clone();
        for &ne in &sc {
            self.ngs_at_mut(ne).remove(s);
            self.ngs_at_mut(s).remove(ne);
        }
    }

    /// Replaces `old` with `nov` in the neighborhoods of slots connected to
    /// `nov`.
    pub fn replace_slot_in_neigs(&mut self, old: EndSlot, nov: EndSlot) {
        let nov_ngs = self.ngs_at(nov).clone();
        for &ne in &nov_ngs {
            self.ngs_at_mut(ne).replace(old, nov);
        }
    }

    /// Moves the identity of chain `f` onto chain `t`.
    ///
    /// Connections, edges, component attribution and the component-local id
    /// transfer; every slot referencing `f` is redirected.
    pub fn rename_chain(&mut self, f: ChId, t: ChId) {
        for e in End::BOTH {
            self.copy_neigs(EndSlot::new(f, e), EndSlot::new(t, e));
        }

        self.cn[f].set_g_w_to(t);
        let g = std::mem::take(&mut self.cn[f].g);
        let (fc, fidc) = (self.cn[f].c, self.cn[f].idc);
        self.cn[t].g = g;
        self.cn[t].c = fc;
        self.cn[t].idc = fidc;

        let c = fc;
        let (cmp, cn) = (&mut self.ct[c], &self.cn);
        cmp.rename_chain(cn, f, t);
    }

    // Conversions ------------------------------------------------------------

    /// Edge position of the boundary edge at an end slot.
    pub fn slot2a(&self, s: EndSlot) -> EgId {
        self.cn[s.w].end2a(s.e)
    }

    /// Graph-wide id of the boundary edge at an end slot.
    pub fn slot2ind(&self, s: EndSlot) -> EgId {
        let a = self.slot2a(s);
        self.cn[s.w].g[a].ind
    }

    /// Locates an edge by its graph-wide id.
    pub fn ind2bslot(&self, ind: EgId) -> BulkSlot {
        BulkSlot::new(self.glm[ind], self.gla[ind])
    }

    pub fn edge(&self, ind: EgId) -> &Edge {
        &self.cn[self.glm[ind]].g[self.gla[ind]]
    }

    pub fn edge_mut(&mut self, ind: EgId) -> &mut Edge {
        let (w, a) = (self.glm[ind], self.gla[ind]);
        &mut self.cn[w].g[a]
    }

    pub fn edge_at(&self, s: BulkSlot) -> &Edge {
        &self.cn[s.w].g[s.a]
    }

    pub fn chain(&self, s: EndSlot) -> &Chain {
        &self.cn[s.w]
    }

    /// The edge end facing outwards at an end slot.
    pub fn edge_end(&self, s: EndSlot) -> End {
        self.cn[s.w].edge_end(s.e)
    }

    /// Graph-wide edge ids connected at slot `s`.
    pub fn ng_inds_at(&self, s: EndSlot) -> Vec<EgId> {
        self.ngs_at(s).iter().map(|&u| self.slot2ind(u)).collect()
    }

    /// For two boundary edges of two directly connected chains, the unique
    /// pair of mutually listed end slots binding them.
    pub fn inds_to_chain_link(&self, ind1: EgId, ind2: EgId) -> Option<[EndSlot; 2]> {
        let w = self.glm[ind1];
        for e in End::BOTH {
            if self.cn[w].length() > 0 && self.cn[w].end2ind(e) == ind1 {
                let s1 = EndSlot::new(w, e);
                for &s2 in self.cn[w].ngs_at(e) {
                    if self.cn[s2.w].end2ind(s2.e) == ind2
                        && self.cn[s2.w].ngs_at(s2.e).has(s1) {
                        return Some([s1, s2]);
                    }
                }
            }
        }
        None
    }

    // Vertex queries ---------------------------------------------------------

    pub fn num_vertices(&self, d: usize) -> usize {
        self.vertices.num(d)
    }

    pub fn num_vertices_total(&self) -> usize {
        self.vertices.num_total()
    }

    /// Vertex ids at both endpoints of the edge with graph-wide id `ind`.
    pub fn edge_vertices(&self, ind: EgId) -> [VtxId; 2] {
        let s = self.ind2bslot(ind);
        let [v1, v2] = vertices::edge_vertices(&self.cn, &self.vertices, s);
        [
            v1.unwrap_or_else(|| panic!(
                "vertex 0 for edge ind {}, w {}, a {} is undefined", ind, s.w, s.a)),
            v2.unwrap_or_else(|| panic!(
                "vertex 1 for edge ind {}, w {}, a {} is undefined", ind, s.w, s.a)),
        ]
    }

    /// True if the bulk vertices at `a1`/`a2` coincide or share an edge.
    pub fn vertices_are_adjacent_aa(&self, w1: ChId, a1: EgId, w2: ChId, a2: EgId) -> bool {
        assert!(a1 > 0 && a1 < self.cn[w1].length(), "a1 {} is not a bulk position", a1);
        assert!(a2 > 0 && a2 < self.cn[w2].length(), "a2 {} is not a bulk position", a2);
        w1 == w2 && (a1 == a2 || a1 == a2 + 1 || a2 == a1 + 1)
    }

    /// True if the end vertices at `s1`/`s2` coincide or share an edge.
    pub fn vertices_are_adjacent_ee(&self, s1: EndSlot, s2: EndSlot) -> bool {
        let m1 = &self.cn[s1.w];
        let is_short = |m: &Chain| m.length() < 2;

        if s1.w == s2.w {
            return s1.e == s2.e || is_short(m1) || m1.has_such_neig(End::A, s2.w);
        }
        if m1.c != self.cn[s2.w].c {
            return false;
        }
        for &ng1 in m1.ngs_at(s1.e) {
            if ng1.w == s2.w && (ng1.e == s2.e || is_short(&self.cn[ng1.w])) {
                return true;
            }
            if ng1.w != s2.w && is_short(&self.cn[ng1.w]) {
                for &ngo in self.cn[ng1.w].ngs_at(ng1.e.opp()) {
                    if ngo == s2 {
                        return true;
                    }
                }
            }
        }
        for &s in m1.ngs_at(s1.e.opp()) {
            if s == s2 {
                return true;
            }
        }
        false
    }

    /// True if the end vertex at `s1` and the bulk vertex at `(w2, a2)` share
    /// an edge.
    pub fn vertices_are_adjacent_ea(&self, s1: EndSlot, w2: ChId, a2: EgId) -> bool {
        let m2 = &self.cn[w2];
        assert!(a2 > 0 && a2 < m2.length(), "a2 {} is not a bulk position", a2);

        if s1.w == w2 {
            return (s1.e == End::A && a2 == 1) ||
                   (s1.e == End::B && a2 == m2.length() - 1) ||
                   (self.cn[s1.w].has_such_neig(End::A, s1.w) &&
                    (a2 == 1 || a2 == m2.length() - 1));
        }
        if self.cn[s1.w].c != m2.c {
            return false;
        }
        if a2 == 1 && m2.ngs_at(End::A).has(s1) {
            return true;
        }
        if a2 == m2.length() - 1 && m2.ngs_at(End::B).has(s1) {
            return true;
        }
        false
    }

    // Cycle awareness --------------------------------------------------------

    /// True if `s1` and `s2` address the two ends of one cycle chain.
    pub fn is_same_cycle(&self, s1: EndSlot, s2: EndSlot) -> bool {
        self.cn[s1.w].is_cycle() && s1 == s2.opp()
    }

    /// True if no connected cycle participates in the junction at `s`.
    ///
    /// `d` is the degree of the junction vertex (0, 3 or 4); for `d == 0`
    /// the probe degenerates to the chain not being a disconnected cycle.
    pub fn zero_cycles_are_at_slot(&self, d: usize, s: EndSlot) -> bool {
        let m = &self.cn[s.w];
        let ngs = m.ngs_at(s.e);
        match d {
            0 => !m.is_disconnected_cycle(),
            3 | 4 => {
                assert!(ngs.num() == d - 1,
                        "connection count {} at {} differs from {}", ngs.num(), s, d - 1);
                !m.is_connected_cycle() &&
                    ngs.iter().all(|u| !self.cn[u.w].is_connected_cycle())
            }
            _ => panic!("unsupported junction degree {}", d),
        }
    }

    /// Chain id of the single connected cycle at the junction at `s`, if any.
    pub fn one_cycle_chain_at_slot(&self, d: usize, s: EndSlot) -> Option<ChId> {
        let m = &self.cn[s.w];
        let ngs = m.ngs_at(s.e);
        match d {
            0 => m.is_disconnected_cycle().then_some(s.w),
            3 | 4 => {
                assert!(ngs.num() == d - 1,
                        "connection count {} at {} differs from {}", ngs.num(), s, d - 1);
                let mut cycles = Vec::new();
                if m.is_connected_cycle() {
                    cycles.push(s.w);
                }
                for u in ngs {
                    if self.cn[u.w].is_connected_cycle() && !cycles.contains(&u.w) {
                        cycles.push(u.w);
                    }
                }
                (cycles.len() == 1).then(|| cycles[0])
            }
            _ => panic!("unsupported junction degree {}", d),
        }
    }

    /// True if the degree-4 junction at `s` joins two connected cycles.
    pub fn two_cycles_are_at_slot(&self, s: EndSlot) -> bool {
        let m = &self.cn[s.w];
        let ngs = m.ngs_at(s.e);
        assert!(ngs.num() == 3,
                "connection count {} at {} differs from 3", ngs.num(), s);
        m.is_connected_cycle() &&
            ngs.iter().all(|u| self.cn[u.w].is_connected_cycle())
    }

    // Bookkeeping ------------------------------------------------------------

    /// Rebuilds the edge id to chain/position maps.
    pub fn make_indma(&mut self) {
        self.glm = vec![UNSET; self.edgenum];
        self.gla = vec![UNSET; self.edgenum];
        for m in &self.cn {
            for g in &m.g {
                self.glm[g.ind] = m.idw;
                self.gla[g.ind] = g.indw;
            }
        }
    }

    /// Rebuilds `glm`/`gla`, the classification and the vertices view.
    pub fn update_books(&mut self) {
        self.make_indma();
        self.chis.populate(&self.cn);
        self.vertices = Vertices::create(&self.cn, &self.chis);
    }

    /// Rebuilds the edge adjacency list of the component holding edge `ind`.
    pub fn update_adjacency_edges(&mut self, ind: EgId) {
        let c = self.cn[self.glm[ind]].c;
        let (cmp, cn) = (&mut self.ct[c], &self.cn);
        cmp.update_adjacency(cn);
    }

    /// Rebuilds the edge adjacency lists of all components.
    pub fn update_adjacency(&mut self) {
        let cn = &self.cn;
        for c in &mut self.ct {
            c.update_adjacency(cn);
        }
    }

    /// Rebuilds the books and, if enabled, the adjacency lists.
    pub fn update(&mut self) {
        self.update_books();
        if self.use_adjacency {
            self.update_adjacency();
        }
    }

    /// True if the derived bookkeeping is current.
    ///
    /// Callers gate sampling decisions on this; it checks that the edge total
    /// matches the chains and that the id maps cover every edge.
    pub fn is_equilibrated(&self) -> bool {
        let egn: EgId = self.cn.iter().map(|m| m.length()).sum();
        egn == self.edgenum &&
            self.glm.len() == self.edgenum &&
            self.gla.len() == self.edgenum
    }

    /// One-line summary of the graph composition.
    pub fn report(&self) -> String {
        format!(
            "v0 {} v1 {} v2 {} v3 {} v4 {} | s11 {} s13 {} s33 {} s14 {} s34 {} s22 {} s44 {} | egn {} cnn {} ctn {}",
            self.num_vertices(0), self.num_vertices(1), self.num_vertices(2),
            self.num_vertices(3), self.num_vertices(4),
            self.chis.cn11.len(), self.chis.cn13.len(), self.chis.cn33.len(),
            self.chis.cn14.len(), self.chis.cn34.len(), self.chis.cn22.len(),
            self.chis.cn44.len(),
            self.edgenum, self.chain_num(), self.cmpt_num(),
        )
    }
}
