//! Dijkstra over the edge adjacency of one component.

use std::collections::{BTreeSet, VecDeque};

use num_traits::Float;

use crate::chain::Chain;
use crate::component::Component;
use crate::{ChId, EgId, Weight};

/// A path over consecutively adjacent edges.
pub type Path = VecDeque<EgId>;

/// Distance record of one edge relative the path source.
#[derive(Debug, Clone, Copy)]
pub struct Distance {
    /// Edge preceding the target in the shortest path.
    pub prev: Option<EgId>,
    /// Shortest distance to the target, in accumulated edge weights.
    pub dist: Weight,
}

impl Distance {
    fn new() -> Self {
        Distance { prev: None, dist: Weight::infinity() }
    }

    pub fn is_finite(&self) -> bool {
        self.dist < Weight::infinity()
    }

    fn set(&mut self, prev: EgId, dist: Weight) {
        self.prev = Some(prev);
        self.dist = dist;
    }
}

/// Priority-queue entry ordered by distance, then edge id.
#[derive(Debug, Clone, Copy, PartialEq)]
struct QEntry {
    dist: Weight,
    indc: EgId,
}

impl Eq for QEntry {}

impl PartialOrd for QEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.dist.total_cmp(&other.dist).then(self.indc.cmp(&other.indc))
    }
}

/// Shortest paths over edges of a single component.
///
/// All ids are component-local (`indc`) unless stated otherwise.
pub struct EdgePaths<'a> {
    cmp: &'a Component,
    cn: &'a [Chain],
    ajlg: Vec<Vec<EgId>>,
    distances: Vec<Distance>,
}

impl<'a> EdgePaths<'a> {
    pub fn new(cmp: &'a Component, cn: &'a [Chain]) -> Self {
        EdgePaths { cmp, cn, ajlg: Vec::new(), distances: Vec::new() }
    }

    fn reset(&mut self) {
        self.ajlg = self.cmp.adjacency_list_edges(self.cn);
        // parallel connections at a junction produce repeated entries
        for l in &mut self.ajlg {
            l.dedup();
        }
        self.distances = vec![Distance::new(); self.cmp.num_edges()];
    }

    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    /// Computes shortest distances from `source` to every edge reachable in
    /// the component.
    pub fn compute_from_source(&mut self, source: EgId) {
        self.reset();

        let mut q: BTreeSet<QEntry> = BTreeSet::new();
        self.distances[source].dist = 0.;
        q.insert(QEntry { dist: 0., indc: source });

        while let Some(ud) = q.pop_first() {
            if ud.dist > self.distances[ud.indc].dist {
                continue;
            }
            for &nb in &self.ajlg[ud.indc] {
                let d = ud.dist + self.cmp.edge(self.cn, nb).weight;
                if d < self.distances[nb].dist {
                    q.remove(&QEntry { dist: self.distances[nb].dist, indc: nb });
                    self.distances[nb].set(ud.indc, d);
                    q.insert(QEntry { dist: d, indc: nb });
                }
            }
        }
    }

    /// The shortest path between edges `s1` and `s2`, as component-local ids.
    ///
    /// Requires distances computed from `s1`; returns an empty path if `s2`
    /// is unreachable.
    pub fn find_shortest_path(&mut self, s1: EgId, s2: EgId) -> Path {
        self.compute_from_source(s1);
        self.trace_path(s1, s2)
    }

    /// Traces the path out of already-computed distances.
    pub fn trace_path(&self, s1: EgId, s2: EgId) -> Path {
        if !self.distances[s2].is_finite() {
            return Path::new();
        }
        let mut path = Path::new();
        path.push_back(s2);
        let mut u = s2;
        while u != s1 {
            u = self.distances[u].prev
                .expect("broken predecessor trace in a shortest path");
            path.push_front(u);
        }
        path
    }

    /// Converts a path over graph-wide ids to component-local ids.
    pub fn from_global_ind(&self, pg: &Path) -> Path {
        pg.iter()
            .map(|&ind| self.cmp.ind2indc(ind)
                .unwrap_or_else(|| panic!("edge {} is not in component {}",
                                          ind, self.cmp.ind)))
            .collect()
    }

    /// Converts a path over component-local ids to graph-wide ids.
    pub fn path_to_global_ind(&self, pc: &Path) -> Path {
        pc.iter().map(|&indc| self.cmp.edge(self.cn, indc).ind).collect()
    }

    /// Graph-wide ids of the chains traversed by a path.
    pub fn path_chains(&self, path: &Path) -> Vec<ChId> {
        let mut ws: Vec<ChId> = path.iter().map(|&indc| self.cmp.gl[indc].w).collect();
        ws.sort();
        ws.dedup();
        ws
    }
}
