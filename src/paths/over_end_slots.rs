//! Reachability and shortest paths over chain end slots of one component.
//!
//! Traversal alternates between following junction connections and crossing
//! whole chains end to end; distances accumulate chain weights. The engine
//! can exclude the source chain from traversal, which is how junction cuts
//! probe whether a component stays connected.

use std::collections::{BTreeSet, VecDeque};

use num_traits::Float;

use crate::chain::Chain;
use crate::component::Component;
use crate::ends::EndSlot;
use crate::{ChId, Weight};

/// A path over consecutively connected end slots.
pub type Path = VecDeque<EndSlot>;

/// Distance record of one end slot relative the source.
#[derive(Debug, Clone, Copy)]
pub struct Distance {
    /// Slot preceding the target in the shortest path.
    pub prev: Option<EndSlot>,
    /// Shortest distance to the target, in accumulated chain weights.
    pub dist: Weight,
}

impl Distance {
    fn new() -> Self {
        Distance { prev: None, dist: Weight::infinity() }
    }

    pub fn is_finite(&self) -> bool {
        self.dist < Weight::infinity()
    }

    fn set(&mut self, prev: EndSlot, dist: Weight) {
        self.prev = Some(prev);
        self.dist = dist;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct QEntry {
    dist: Weight,
    slot: EndSlot,
}

impl Eq for QEntry {}

impl PartialOrd for QEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.dist.total_cmp(&other.dist).then(self.slot.cmp(&other.slot))
    }
}

/// Paths over the end slots of a single component.
pub struct EndSlotPaths<'a> {
    cmp: &'a Component,
    cn: &'a [Chain],
    /// Number of end slots in the component: two per chain.
    num_slots: usize,
    distances: Vec<Distance>,
}

impl<'a> EndSlotPaths<'a> {
    pub fn new(cmp: &'a Component, cn: &'a [Chain]) -> Self {
        let num_slots = 2 * cmp.num_chains();
        EndSlotPaths { cmp, cn, num_slots, distances: Vec::new() }
    }

    /// Distance table index of a slot: component-local chain id and end.
    fn element_ind(&self, s: EndSlot) -> usize {
        2 * self.cn[s.w].idc + s.e.idx()
    }

    /// The slot stored at a distance table index.
    fn element(&self, i: usize) -> Option<EndSlot> {
        self.cmp.chid(self.cn, i / 2)
            .map(|w| EndSlot::new(w, crate::ends::End::BOTH[i % 2]))
    }

    fn reset(&mut self) {
        self.distances = vec![Distance::new(); self.num_slots];
    }

    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    /// True if a path outgoing from `s1` leads to `s2`.
    ///
    /// With `with_source_chain` false, paths crossing chain `s1.w` itself are
    /// not admitted; this is the probe deciding whether removing the junction
    /// at `s1` disconnects the component.
    pub fn are_connected(&mut self, s1: EndSlot, s2: EndSlot,
                         with_source_chain: bool) -> bool {
        if s1 == s2 {
            self.reset();
            return true;
        }
        self.compute_from_source(s1, with_source_chain);
        self.distances[self.element_ind(s2)].is_finite()
    }

    /// Computes shortest distances from slot `s` to every reachable slot.
    pub fn compute_from_source(&mut self, s: EndSlot, with_source_chain: bool) {
        self.reset();

        let mut q: BTreeSet<QEntry> = BTreeSet::new();

        let si = self.element_ind(s);
        self.distances[si].dist = 0.;
        if with_source_chain {
            q.insert(QEntry { dist: 0., slot: s });
        }
        for &nb in self.cn[s.w].ngs_at(s.e) {
            let nb_ind = self.element_ind(nb);
            self.distances[nb_ind].set(s, 0.);
            if nb.w != s.w {
                q.insert(QEntry { dist: 0., slot: nb });
            }
        }

        // popping a slot crosses its chain to the opposite end
        while let Some(ud) = q.pop_first() {
            let v = ud.slot.opp();
            let d = ud.dist + self.cn[v.w].weight();
            let vi = self.element_ind(v);
            if d < self.distances[vi].dist {
                self.distances[vi].set(ud.slot, d);
                for &nb in self.cn[v.w].ngs_at(v.e) {
                    let ni = self.element_ind(nb);
                    if d < self.distances[ni].dist {
                        self.distances[ni].set(v, d);
                        if nb.w != v.w {
                            q.insert(QEntry { dist: d, slot: nb });
                        }
                    }
                }
            }
        }
    }

    /// The shortest path between slots `s1` and `s2`.
    ///
    /// Empty if `s2` is unreachable.
    pub fn find_shortest_path(&mut self, s1: EndSlot, s2: EndSlot,
                              with_source_chain: bool) -> Path {
        self.compute_from_source(s1, with_source_chain);

        if !self.distances[self.element_ind(s2)].is_finite() {
            return Path::new();
        }
        let mut path = Path::new();
        path.push_back(s2);
        let mut u = s2;
        while u != s1 {
            u = self.distances[self.element_ind(u)].prev
                .expect("broken predecessor trace in a shortest path");
            path.push_front(u);
        }
        path
    }

    /// Splits the member chains into those reachable from `s` and the rest.
    ///
    /// Requires distances computed from `s`. The source chain itself is
    /// always counted as blocked. Returns `[accessible, blocked]`.
    pub fn classify_chains_by_connectivity(&self, s: EndSlot) -> [Vec<ChId>; 2] {
        let mut accessible = Vec::new();
        let mut blocked = Vec::new();

        for i in (0..self.num_slots).step_by(2) {
            let w = self.element(i).expect("dangling component-local chain id").w;
            let reachable = self.distances[i].is_finite() ||
                            self.distances[i + 1].is_finite();
            if reachable && w != s.w {
                accessible.push(w);
            } else {
                blocked.push(w);
            }
        }
        [accessible, blocked]
    }

    /// The chains under a path and the total number of their edges.
    pub fn path_chains_numedges(&self, path: &Path) -> (Vec<ChId>, usize) {
        let mut ww: Vec<ChId> = path.iter().map(|s| s.w).collect();
        ww.sort();
        ww.dedup();
        let numeg = ww.iter().map(|&w| self.cn[w].length()).sum();
        (ww, numeg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ends::End;

    // two chains joined A-to-A, forming one linear component
    fn linked_pair() -> (Vec<Chain>, Component) {
        let mut cn = vec![
            Chain::with_length(2, 0, 0),
            Chain::with_length(3, 1, 2),
        ];
        cn[0].ngs_at_mut(End::A).insert(EndSlot::new(1, End::A));
        cn[1].ngs_at_mut(End::A).insert(EndSlot::new(0, End::A));
        let mut cmp = Component::new(0);
        cmp.append_chain(&mut cn, 0);
        cmp.append_chain(&mut cn, 1);
        (cn, cmp)
    }

    #[test]
    fn connected_through_junction() {
        let (cn, cmp) = linked_pair();
        let mut pp = EndSlotPaths::new(&cmp, &cn);
        assert!(pp.are_connected(EndSlot::new(0, End::A), EndSlot::new(1, End::B), true));
    }

    #[test]
    fn not_cycled() {
        let (cn, cmp) = linked_pair();
        let mut pp = EndSlotPaths::new(&cmp, &cn);
        let s = EndSlot::new(0, End::A);
        assert!(!pp.are_connected(s, s.opp(), false));

        let [acc, blk] = {
            pp.compute_from_source(s, false);
            pp.classify_chains_by_connectivity(s)
        };
        assert_eq!(acc, vec![1]);
        assert_eq!(blk, vec![0]);
    }
}
