//! Disconnected components: maximal sets of mutually connected chains.
//!
//! The [`Graph`](crate::graph::Graph) owns the chain arena; components refer
//! to chains by id only and receive the arena as an argument wherever they
//! need to read or restamp chain data.

use log::debug;

#[cfg(feature = "serde_support")]
use serde::{Serialize, Deserialize};

use crate::chain::Chain;
use crate::chain_indexes::CmptChainIndexes;
use crate::edge::Edge;
use crate::ends::{End, EndSlot};
use crate::{ChId, CmpId, EgId, Orientation};

/// Descriptor of one edge in the component-local ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Gl {
    /// Host chain id.
    pub w: ChId,
    /// Position inside the host chain.
    pub a: EgId,
    /// Graph-wide edge id.
    pub i: EgId,
}

/// A disconnected component of the graph.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Component {
    /// Component id.
    pub ind: CmpId,

    /// Edge descriptors ordered by component-local edge id.
    pub gl: Vec<Gl>,

    /// Ids of the member chains.
    pub ww: Vec<ChId>,

    /// Edge adjacency lists over component-local edge ids (lazily rebuilt).
    pub ajlg: Vec<Vec<EgId>>,

    /// Classification of the member chains by end degrees.
    pub chis: CmptChainIndexes,
}

impl Component {
    pub fn new(ind: CmpId) -> Self {
        Component { ind, ..Default::default() }
    }

    /// A component created around a single chain.
    pub fn with_chain(ind: CmpId, cn: &mut [Chain], w: ChId) -> Self {
        let mut c = Component::new(ind);
        c.append_chain(cn, w);
        c
    }

    pub fn num_edges(&self) -> EgId {
        self.gl.len()
    }

    pub fn num_chains(&self) -> ChId {
        self.ww.len()
    }

    pub fn contains_chain(&self, w: ChId) -> bool {
        self.ww.contains(&w)
    }

    pub fn contains_edge(&self, ind: EgId) -> bool {
        self.gl.iter().any(|g| g.i == ind)
    }

    /// Number of vertices of degree `d`, derived from the classification.
    pub fn num_vertices(&self, d: usize) -> usize {
        let chis = &self.chis;
        match d {
            0 => usize::from(chis.cn22.is_some()),
            1 => 2 * usize::from(chis.cn11.is_some()) + chis.cn13.len() + chis.cn14.len(),
            2 => {
                self.num_edges()
                    - self.num_vertices(0)
                    - (self.num_vertices(1)
                       + 3 * self.num_vertices(3)
                       + 4 * self.num_vertices(4)) / 2
            }
            3 => (2 * chis.cn33.len() + chis.cn13.len() + chis.cn34.len()) / 3,
            4 => (2 * chis.cn44.len() + chis.cn14.len() + chis.cn34.len()) / 4,
            _ => panic!("unsupported vertex degree {}", d),
        }
    }

    pub fn num_vertices_total(&self) -> usize {
        (0..=4).map(|d| self.num_vertices(d)).sum()
    }

    // Membership updates -----------------------------------------------------

    /// Adds chain `w`, restamping it and its edges into this component.
    pub fn append_chain(&mut self, cn: &mut [Chain], w: ChId) {
        assert!(!self.contains_chain(w),
                "appending chain {} which is already in component {}", w, self.ind);

        let indc = self.num_edges();
        let idc = self.num_chains();
        cn[w].set_cmpt(self.ind, idc, indc);

        for g in &cn[w].g {
            self.gl.push(Gl { w: g.w, a: g.indw, i: g.ind });
        }
        self.ww.push(w);
        self.chis.include(&cn[w]);
    }

    pub fn append_chains(&mut self, cn: &mut [Chain], vv: &[ChId]) {
        for &v in vv {
            self.append_chain(cn, v);
        }
    }

    /// Appends another component, consuming it.
    pub fn append_cmpt(&mut self, cn: &mut [Chain], other: Component) {
        assert!(other.ind != self.ind, "appending identical component {}", self.ind);

        let mut indc = self.num_edges();
        let mut idc = self.num_chains();
        for &w in &other.ww {
            indc = cn[w].set_cmpt(self.ind, idc, indc);
            idc += 1;
        }
        self.gl.extend(other.gl);
        self.ww.extend(other.ww);
        self.chis.append(other.chis);
    }

    /// Includes a single edge already stored inside a member chain.
    pub fn append_edge(&mut self, cn: &mut [Chain], w: ChId, a: EgId) {
        assert!(!self.contains_edge(cn[w].g[a].ind),
                "appending edge {} which is already in component {}",
                cn[w].g[a].ind, self.ind);
        let indc = self.num_edges();
        cn[w].g[a].set_cmp(self.ind, indc);
        self.set_gl(cn);
    }

    /// Drops one edge entry, swapping the last descriptor into its place.
    ///
    /// `ind`/`indc` identify the edge being removed; the edge data itself is
    /// not touched here.
    pub fn remove_edge_entry(&mut self, cn: &mut [Chain], ind: EgId, indc: EgId) {
        debug!("removing edge {} from component {}", ind, self.ind);
        let b = *self.gl.last()
            .unwrap_or_else(|| panic!("removing edge {} from empty component {}",
                                      ind, self.ind));
        if ind != b.i {
            let q = &mut cn[b.w].g[b.a];
            q.indc = indc;
            self.gl[indc] = Gl { w: q.w, a: q.indw, i: q.ind };
        }
        self.gl.pop();
    }

    /// Removes chain `w` from the membership and edge records.
    ///
    /// The chain keeps its edges; only the component bookkeeping changes.
    pub fn remove_chain(&mut self, cn: &mut [Chain], w: ChId) {
        debug!("removing chain {} from component {}", w, self.ind);
        assert!(self.contains_chain(w),
                "attempt to remove missing chain {} from component {}", w, self.ind);

        let mut egs: Vec<(EgId, EgId)> =
            cn[w].g.iter().map(|g| (g.ind, g.indc)).collect();
        // removing in descending indc order keeps the swap-fixups valid
        egs.sort_by(|x, y| y.1.cmp(&x.1));
        for (ind, indc) in egs {
            self.remove_edge_entry(cn, ind, indc);
        }

        let idc = cn[w].idc;
        let last = self.num_chains() - 1;
        if idc < last {
            for &v in &self.ww {
                if cn[v].idc == last {
                    cn[v].idc = idc;
                }
            }
        }
        self.ww.retain(|&v| v != w);

        if cn[w].is_disconnected_cycle() {
            let ww = self.ww.clone();
            self.chis.populate(cn, &ww);
        } else {
            self.chis.remove(&cn[w]);
        }
    }

    pub fn remove_chains(&mut self, cn: &mut [Chain], vv: &[ChId]) {
        for &v in vv {
            self.remove_chain(cn, v);
        }
    }

    /// Moves the listed chains into component `other`.
    pub fn move_to(&mut self, cn: &mut [Chain], other: &mut Component, vv: &[ChId]) {
        self.remove_chains(cn, vv);
        other.append_chains(cn, vv);
    }

    // Restamping -------------------------------------------------------------

    /// Relabels the component, restamping all member chains and edges.
    pub fn set_ind(&mut self, cn: &mut [Chain], i: CmpId) {
        self.ind = i;
        for &w in &self.ww {
            cn[w].c = i;
            for g in &mut cn[w].g {
                g.c = i;
            }
        }
    }

    /// Renumbers the component-wide edge ids densely, in `ww` order.
    pub fn set_edges(&self, cn: &mut [Chain]) {
        let mut indc: EgId = 0;
        for &w in &self.ww {
            indc = cn[w].set_g_cmp(self.ind, indc);
        }
    }

    /// Rebuilds the edge descriptor table from the chains' `indc` stamps.
    pub fn set_gl(&mut self, cn: &[Chain]) {
        let num_edges: EgId = self.ww.iter().map(|&w| cn[w].length()).sum();
        self.gl.clear();
        self.gl.resize(num_edges, Gl { w: 0, a: 0, i: 0 });
        for &w in &self.ww {
            for g in &cn[w].g {
                assert!(g.indc < num_edges,
                        "in component {} edge indc {} exceeds edge count {}",
                        self.ind, g.indc, num_edges);
                self.gl[g.indc] = Gl { w: g.w, a: g.indw, i: g.ind };
            }
        }
    }

    pub fn set_chis(&mut self, cn: &[Chain]) {
        let ww = self.ww.clone();
        self.chis.populate(cn, &ww);
    }

    /// Re-registers the listed chains from scratch.
    pub fn rebuild(&mut self, cn: &mut [Chain], ww: Vec<ChId>) {
        self.gl.clear();
        self.ww.clear();
        self.chis.clear();
        for w in ww {
            self.append_chain(cn, w);
        }
    }

    /// Updates the membership records after chain `f` was renamed to `t`.
    pub fn rename_chain(&mut self, cn: &[Chain], f: ChId, t: ChId) {
        for w in &mut self.ww {
            if *w == f {
                *w = t;
            }
        }
        for g in &mut self.gl {
            if g.w == f {
                g.w = t;
            }
        }
        let ww = self.ww.clone();
        self.chis.populate(cn, &ww);
    }

    // Edge shifts ------------------------------------------------------------

    /// Moves the boundary edge at slot `f` to become a boundary edge at `t`.
    ///
    /// The edge leaves the `f.e` side of chain `f.w` and enters chain `t.w`
    /// at its `t.e` side; both chains are restamped and the component edge
    /// table rebuilt. This is the atomic move of the pulling transform.
    pub fn shift_last_edge(&mut self, cn: &mut [Chain], f: EndSlot, t: EndSlot) {
        assert!(cn[f.w].c == cn[t.w].c,
                "slots {} and {} belong to different components", f, t);

        let eg = match f.e {
            End::B => cn[f.w].g.pop().expect("shifting from an empty chain"),
            End::A => cn[f.w].g.remove(0),
        };
        match t.e {
            End::A => cn[t.w].g.insert(0, eg),
            End::B => cn[t.w].g.push(eg),
        }
        cn[f.w].set_g_w();
        cn[t.w].set_g_w();
        self.set_gl(cn);
    }

    // Lookup -----------------------------------------------------------------

    /// The edge with component-local id `indc`.
    pub fn edge<'a>(&self, cn: &'a [Chain], indc: EgId) -> &'a Edge {
        let h = self.gl[indc];
        &cn[h.w].g[h.a]
    }

    /// The member chain with component-local id `idc`.
    pub fn chid(&self, cn: &[Chain], idc: ChId) -> Option<ChId> {
        self.ww.iter().copied().find(|&w| cn[w].idc == idc)
    }

    /// Converts a graph-wide edge id to the component-local one.
    pub fn ind2indc(&self, ind: EgId) -> Option<EgId> {
        self.gl.iter().position(|g| g.i == ind)
    }

    // Adjacency --------------------------------------------------------------

    /// Builds the per-edge adjacency over component-local edge ids.
    pub fn adjacency_list_edges(&self, cn: &[Chain]) -> Vec<Vec<EgId>> {
        let mut a: Vec<Vec<EgId>> = vec![Vec::new(); self.num_edges()];

        for &j in &self.ww {
            let m = &cn[j];
            for k in 0..m.length() {
                let indc = m.g[k].indc;
                if m.is_tail(k) {
                    // backwards: only other chains can be found here
                    for s in m.ngs_at(End::A) {
                        a[indc].push(cn[s.w].g[cn[s.w].end2a(s.e)].indc);
                    }
                    if m.length() == 1 {
                        for s in m.ngs_at(End::B) {
                            a[indc].push(cn[s.w].g[cn[s.w].end2a(s.e)].indc);
                        }
                    } else {
                        a[indc].push(m.g[k + 1].indc);
                    }
                } else if m.is_head(k) {
                    a[indc].push(m.g[k - 1].indc);
                    for s in m.ngs_at(End::B) {
                        a[indc].push(cn[s.w].g[cn[s.w].end2a(s.e)].indc);
                    }
                } else {
                    a[indc].push(m.g[k - 1].indc);
                    a[indc].push(m.g[k + 1].indc);
                }
            }
        }
        a
    }

    /// Caches the edge adjacency built by [`Component::adjacency_list_edges`].
    pub fn update_adjacency(&mut self, cn: &[Chain]) {
        self.ajlg = self.adjacency_list_edges(cn);
    }

    /// Per-chain adjacency over component-local chain ids, one direction.
    pub fn adjacency_list_chains(&self, cn: &[Chain], dir: Orientation) -> Vec<Vec<ChId>> {
        let e = match dir {
            Orientation::Backwards => End::A,
            Orientation::Forwards => End::B,
        };
        let mut x: Vec<Vec<ChId>> = vec![Vec::new(); self.num_chains()];
        for &j in &self.ww {
            let m = &cn[j];
            for ng in m.ngs_at(e) {
                x[m.idc].push(cn[ng.w].idc);
            }
        }
        x
    }

    // Search -----------------------------------------------------------------

    /// Depth-first reachability from `source` to `target` over end slots.
    pub fn dfs(&self, cn: &[Chain], source: EndSlot, target: EndSlot) -> bool {
        if source == target {
            return true;
        }
        let mut visited = vec![false; cn.len()];
        let mut stack = vec![source];
        visited[source.w] = true;
        while let Some(u) = stack.pop() {
            for &s in cn[u.w].ngs_at(u.e) {
                if s == target {
                    return true;
                }
                if !visited[s.w] {
                    visited[s.w] = true;
                    stack.push(s.opp());
                }
            }
        }
        false
    }

    /// Ids of the chains reachable through the connections of slot `source`.
    ///
    /// The source chain itself is always included.
    pub fn find_chains_from_slot(&self, cn: &[Chain], source: EndSlot) -> Vec<ChId> {
        let mut visited = vec![false; cn.len()];
        let mut stack = vec![source];
        visited[source.w] = true;
        let mut vv = vec![source.w];
        while let Some(u) = stack.pop() {
            for &s in cn[u.w].ngs_at(u.e) {
                if !visited[s.w] {
                    visited[s.w] = true;
                    vv.push(s.w);
                    stack.push(s.opp());
                }
            }
        }
        vv
    }

    /// Ids of the chains reachable from chain `seed` through either end.
    pub fn find_chains(&self, cn: &[Chain], seed: ChId) -> Vec<ChId> {
        let mut res = self.find_chains_from_slot(cn, EndSlot::new(seed, End::A));
        for w in self.find_chains_from_slot(cn, EndSlot::new(seed, End::B)) {
            if !res.contains(&w) {
                res.push(w);
            }
        }
        res
    }

    /// True if the component-local chain ids form a dense range.
    pub fn ww_is_dense(&self, cn: &[Chain]) -> bool {
        let n = self.num_chains();
        (0..n).all(|i| self.ww.iter().any(|&w| cn[w].idc == i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Vec<Chain> {
        vec![
            Chain::with_length(3, 0, 0),
            Chain::with_length(2, 1, 3),
        ]
    }

    #[test]
    fn append_chain_stamps_everything() {
        let mut cn = arena();
        let mut c = Component::new(4);
        c.append_chain(&mut cn, 0);
        c.append_chain(&mut cn, 1);

        assert_eq!(c.num_chains(), 2);
        assert_eq!(c.num_edges(), 5);
        assert_eq!(cn[0].c, 4);
        assert_eq!(cn[1].c, 4);
        assert_eq!(cn[0].idc, 0);
        assert_eq!(cn[1].idc, 1);
        for (i, g) in c.gl.iter().enumerate() {
            assert_eq!(cn[g.w].g[g.a].indc, i);
            assert_eq!(cn[g.w].g[g.a].ind, g.i);
        }
    }

    #[test]
    fn remove_chain_compacts() {
        let mut cn = arena();
        let mut c = Component::new(0);
        c.append_chain(&mut cn, 0);
        c.append_chain(&mut cn, 1);

        c.remove_chain(&mut cn, 0);
        assert_eq!(c.num_chains(), 1);
        assert_eq!(c.num_edges(), 2);
        assert_eq!(cn[1].idc, 0);
    }

    #[test]
    fn adjacency_of_single_chain() {
        let mut cn = arena();
        let mut c = Component::new(0);
        c.append_chain(&mut cn, 0);

        let a = c.adjacency_list_edges(&cn);
        assert_eq!(a.len(), 3);
        assert_eq!(a[0], vec![1]);
        assert_eq!(a[1], vec![0, 2]);
        assert_eq!(a[2], vec![1]);
    }
}
