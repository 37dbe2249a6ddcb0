//! Pulling: advancing a driver tip along a path while consuming the source.
//!
//! A pull drags edges along a precomputed shortest path from the source
//! chain towards the driver chain, one boundary shift per chain border. The
//! degree-2 and degree-3 entry points first carve the driver free with the
//! matching vertex split, pull one step, and re-form the junction one edge
//! further along, before continuing with plain free-end pulls.
//!
//! After every internal step the driver, source and path are re-expressed
//! over the current chain ids while the edge graph-wide ids stay fixed.

use std::collections::VecDeque;

use log::debug;

use crate::chain::{Chain, MIN_CYCLE_LENGTH};
use crate::ends::{End, EndSlot, Slot};
use crate::graph::Graph;
use crate::paths::over_edges::EdgePaths;
use crate::transforms::{edge_creation, edge_deletion, vertex_merger, vertex_split};
use crate::{ChId, CmpId, EgId};

/// The growing tip of a pull: an edge and its leading end.
///
/// The edge is identified by its graph-wide id, which survives chain
/// renames; the chain id is a convenience resolved at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Driver {
    pub ind: EgId,
    pub w: ChId,
    pub eg_end: End,
}

impl Driver {
    pub fn new(ind: EgId, w: ChId, eg_end: End) -> Self {
        Driver { ind, w, eg_end }
    }

    /// Resolves the driver edge's current chain through the graph books.
    pub fn of_ind(gr: &Graph, ind: EgId, eg_end: End) -> Self {
        Driver { ind, w: gr.glm[ind], eg_end }
    }

    /// The chain end slot the driver edge occupies.
    pub fn end_slot(&self, m: &Chain) -> EndSlot {
        EndSlot::new(self.w, m.ind2end(self.ind, self.eg_end))
    }
}

/// A pulling track: driver, source and the edge path connecting them.
///
/// `pth` holds graph-wide edge ids with the driver edge first and the source
/// edge last; `pthc` is the same path over component-local ids.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Component the track runs in.
    pub cmp: CmpId,
    /// The path over graph-wide edge ids.
    pub pth: VecDeque<EgId>,
    /// The path over component-local edge ids.
    pub pthc: VecDeque<EgId>,
    d: Driver,
    s: EndSlot,
}

impl Paths {
    /// Lays out the shortest track from the driver edge to the source edge.
    pub fn new(gr: &Graph, d: Driver, s: EndSlot) -> Self {
        let cmp = gr.cn[s.w].c;
        assert!(gr.ngs_at(s).is_empty(), "source end {} is not disconnected", s);
        assert!(gr.cn[d.w].c == cmp,
                "driver component {} differs from the source's {}", gr.cn[d.w].c, cmp);

        let (pthc, pth) = {
            let mut ep = EdgePaths::new(&gr.ct[cmp], &gr.cn);
            let icd = gr.ct[cmp].ind2indc(d.ind)
                .unwrap_or_else(|| panic!("driver edge {} is not in component {}",
                                          d.ind, cmp));
            let ics = gr.cn[s.w].end_edge(s.e).indc;
            let pthc = ep.find_shortest_path(icd, ics);
            let pth = ep.path_to_global_ind(&pthc);
            (pthc, pth)
        };
        assert!(!pth.is_empty(), "no path connects the driver to the source");

        Paths { cmp, pth, pthc, d, s }
    }

    /// Re-expresses a track over the current chain ids, keeping the path.
    pub fn with_path(gr: &Graph, d: Driver, s: EndSlot, pth: VecDeque<EgId>) -> Self {
        let cmp = gr.cn[s.w].c;
        assert!(gr.cn[d.w].c == cmp,
                "driver component {} differs from the source's {}", gr.cn[d.w].c, cmp);

        let pthc: VecDeque<EgId> = pth.iter()
            .map(|&ind| gr.ct[cmp].ind2indc(ind)
                .unwrap_or_else(|| panic!("path edge {} is not in component {}",
                                          ind, cmp)))
            .collect();
        assert!(d.ind == gr.ct[cmp].gl[pthc[0]].i,
                "driver edge {} is not at the path front", d.ind);

        Paths { cmp, pth, pthc, d, s }
    }

    pub fn drv(&self) -> &Driver {
        &self.d
    }

    pub fn src(&self) -> EndSlot {
        self.s
    }

    pub fn set_src(&mut self, s: EndSlot) {
        self.s = s;
    }

    pub fn length(&self) -> usize {
        self.pth.len()
    }

    /// The chain end the driver edge occupies.
    pub fn driver_end(&self, gr: &Graph) -> End {
        gr.cn[self.d.w].ind2end(self.d.ind, self.d.eg_end)
    }

    /// Number of trailing path edges lying on the source chain.
    pub fn length_over_source_chain(&self, gr: &Graph) -> EgId {
        let mut n = 0;
        for &ind in self.pth.iter().rev() {
            if gr.glm[ind] == self.s.w {
                n += 1;
            } else {
                break;
            }
        }
        n
    }
}

/// Pulls a free driver tip (degree 1) by `n` steps.
///
/// Returns the id of the component the track runs in.
pub fn pull_deg1(gr: &mut Graph, pp: &mut Paths, n: usize) -> CmpId {
    debug!("pulling deg 1 by {} over a path of {} edges", n, pp.length());

    check_free_driver(gr, pp);
    check_source(gr, pp, n, false);

    pull_free_end_n(gr, pp, n);

    gr.update_books();
    pp.cmp
}

/// Pulls a driver sitting at a degree-2 (bulk) vertex by `n` steps.
///
/// The chain is split behind the driver edge, the freed part pulled one
/// step, and the severed part re-merged one edge further along the track;
/// the remaining `n - 1` steps are plain free-end pulls. A single-edge path
/// merely reverses the driver edge orientation.
pub fn pull_deg2(gr: &mut Graph, pp: &mut Paths, n: usize) -> CmpId {
    debug!("pulling deg 2 by {} over a path of {} edges", n, pp.length());

    if pp.length() > 1 {
        correct_driver(gr, pp);
    }
    check_source(gr, pp, n, true);

    if pp.length() == 1 {
        pull2_single(gr, pp);
    } else {
        pull2_multi(gr, pp);
    }

    pull_free_end_n(gr, pp, n.saturating_sub(1));

    gr.update_books();
    pp.cmp
}

/// Pulls a driver whose tip sits at a three-way junction by `n` steps.
///
/// The junction is dissolved with the cycle-aware (1,2)/(1,0) split, the
/// freed chain pulled one step, and the junction re-formed one edge behind
/// the tip as a four-way vertex; the remaining `n - 1` steps are plain
/// free-end pulls.
pub fn pull_deg3(gr: &mut Graph, pp: &mut Paths, n: usize) -> CmpId {
    debug!("pulling deg 3 by {} over a path of {} edges", n, pp.length());

    {
        let e_d = pp.drv().end_slot(&gr.cn[pp.drv().w]).e;
        assert!(gr.ngs_at(EndSlot::new(pp.drv().w, e_d)).num() == 2,
                "driver end is not at a three-way junction");
    }
    check_source(gr, pp, n, false);

    pull3_once(gr, pp);

    pull_free_end_n(gr, pp, n.saturating_sub(1));

    gr.update_books();
    pp.cmp
}

// Internal machinery ---------------------------------------------------------

/// Repeats the elementary free-end pull `n` times.
///
/// If the source chain dissolves with steps remaining, the source slot is
/// re-expressed on the chain now trailing the track.
fn pull_free_end_n(gr: &mut Graph, pp: &mut Paths, n: usize) -> bool {
    let mut dissolved = false;
    let mut s = n;
    while s > 0 {
        s -= 1;
        dissolved = pull_free_end(gr, pp);

        if s > 0 && dissolved {
            let d = *pp.drv();
            if d.w == pp.src().w {
                let e_s = gr.cn[d.w].ind2end(d.ind, d.eg_end).opp();
                pp.set_src(EndSlot::new(d.w, e_s));
            } else {
                panic!("source chain dissolved with pulling steps remaining");
            }
        }
    }
    dissolved
}

/// One elementary pull: slides one boundary edge across every chain border
/// of the track. Returns true if the source chain dissolved.
fn pull_free_end(gr: &mut Graph, pp: &mut Paths) -> bool {
    let w_s = pp.s.w;

    if pp.d.w == w_s {
        // driver and source share a chain: nothing left to shift
        return false;
    }

    debug!("pulling free end over a path of {} edges", pp.length());

    let mut dissolved = false;
    if gr.cn[w_s].length() == 1 {
        dissolve_single_edge_chain(gr, pp);
        dissolved = true;
    }

    shift_edges_to_target_chain(gr, pp);

    dissolved
}

/// Splices the single edge of the source chain into the next path chain and
/// deletes the dissolving chain, preserving the edge's graph-wide id.
fn dissolve_single_edge_chain(gr: &mut Graph, pp: &mut Paths) {
    let i_d = pp.d.ind;
    let w_s = pp.s.w;

    debug!("consuming single-edge source chain {}", w_s);
    assert!(gr.cn[w_s].length() == 1, "trailing chain {} is too long", w_s);

    let i_s = gr.cn[w_s].g[0].ind;
    let ege_s = gr.cn[w_s].g[gr.gla[i_s]].oriented_end(pp.s.e);

    // a fresh edge at the free end keeps the chain alive for the handover
    edge_creation::in_existing_chain(gr, Slot::End(pp.s));

    let connected_slot = pp.s.opp();

    // splice the source edge into the chain of the second-to-last path edge
    let i_n = pp.pth[pp.pth.len() - 2];
    let w_n = gr.glm[i_n];
    let e_n = gr.cn[w_n].ind2end_by_neig(i_n, connected_slot);
    let a = match e_n {
        End::A => 0,
        End::B => gr.cn[w_n].length(),
    };

    let eg = gr.cn[w_s].g[gr.gla[i_s]].clone();
    gr.cn[w_n].insert_edge(eg, a);
    let rm = gr.cn[w_s].end2a(connected_slot.e);
    gr.cn[w_s].remove_edge(rm);
    let cmp = pp.cmp;
    gr.ct[cmp].set_gl(&gr.cn);
    gr.update_books();

    // the chain now holds only the fresh edge: delete it with its chain
    let nn_s = gr.ngs_at(connected_slot).num();
    assert!(nn_s == 2 || nn_s == 3,
            "trailing chain connection degree {} is not a junction", nn_s + 1);
    edge_deletion::deleting_host_chain(gr, connected_slot);

    // re-express the track on the chain now holding the source edge
    let w_s = gr.glm[i_s];
    let e_s = if gr.cn[w_s].g[gr.gla[i_s]].points_forwards() {
        ege_s
    } else {
        ege_s.opp()
    };

    *pp = Paths::with_path(
        gr,
        Driver::of_ind(gr, i_d, pp.d.eg_end),
        EndSlot::new(w_s, e_s),
        pp.pth.clone(),
    );
}

/// Slides one boundary edge across every chain border along the track, from
/// the source side towards the driver.
fn shift_edges_to_target_chain(gr: &mut Graph, pp: &Paths) {
    let d = &pp.d;
    let pth = &pp.pth;

    assert!(d.ind == pth[0], "driver edge is not the first one in the path");
    assert!(gr.cn[d.w].end2ind(pp.driver_end(gr)) == d.ind,
            "driver chain end ind differs from the driver ind");

    let w0 = d.w;
    let w2 = pp.s.w;
    if w0 == w2 {
        return;
    }

    let mut i = pth.len() - 1;
    loop {
        // skip to the first edge of the current chain towards the front
        while i > 0 && gr.glm[pth[i - 1]] == gr.glm[pth[i]] {
            i -= 1;
        }
        if i == 0 {
            break;
        }
        let leading = pth[i];
        let ind_n = pth[i - 1];

        let [f, t] = gr.inds_to_chain_link(leading, ind_n)
            .unwrap_or_else(|| panic!(
                "path edges {} and {} are not ends of connected chains",
                leading, ind_n));

        let cmp = pp.cmp;
        {
            let (ct, cn) = (&mut gr.ct[cmp], &mut gr.cn);
            ct.shift_last_edge(cn, f, t);
        }
        gr.update_books();

        i -= 1;
    }
}

/// Moves the driver one path edge forward when the nominal driver end faces
/// its own chain continuation along the track.
fn correct_driver(gr: &Graph, pp: &mut Paths) {
    assert!(pp.length() > 1, "cannot correct the driver in a single-edge path");
    assert!(!gr.cn[pp.d.w].eg_end_is_head(pp.d.ind, pp.d.eg_end),
            "driver in a deg-2 pull is at the chain head end");
    assert!(!gr.cn[pp.d.w].eg_end_is_tail(pp.d.ind, pp.d.eg_end),
            "driver in a deg-2 pull is at the chain tail end");

    let a0 = gr.ct[pp.cmp].gl[pp.pthc[0]].a;
    let ce = gr.cn[pp.d.w].connected_edge(a0, pp.d.eg_end)
        .expect("driver in a deg-2 multi-edge path is at a chain end");

    if ce.ind == pp.pth[1] {
        debug!("correcting the deg-2 driver one edge along the path");

        let w1 = gr.ct[pp.cmp].gl[pp.pthc[1]].w;
        let a1 = gr.ct[pp.cmp].gl[pp.pthc[1]].a;
        let ege_d = gr.cn[w1].internal_eg_end(a0, a1);

        let mut pth = pp.pth.clone();
        pth.pop_front();
        *pp = Paths::with_path(
            gr,
            Driver::new(gr.cn[w1].g[a1].ind, w1, ege_d),
            pp.s,
            pth,
        );
    }
}

/// Deg-2 pull over a single-edge path: reverses the driver edge.
fn pull2_single(gr: &mut Graph, pp: &Paths) {
    assert!(pp.length() == 1, "path is longer than 1 edge");
    assert!(!gr.cn[pp.d.w].is_disconnected_cycle(),
            "pulling deg 2 from a disconnected cycle chain");

    let a_d = gr.ct[pp.cmp].gl[pp.pthc[0]].a;
    let w_d = pp.d.w;
    gr.cn[w_d].g[a_d].reverse();
}

/// Deg-2 pull over a longer path: split behind the driver, pull one step,
/// re-attach the severed part one edge further along.
fn pull2_multi(gr: &mut Graph, pp: &mut Paths) {
    // driver
    let ege_d = pp.d.eg_end;
    let i_d = pp.pth[0];
    let a_d = gr.ct[pp.cmp].gl[pp.pthc[0]].a;

    // the bulk slot to split: the vertex behind the driver edge
    let bs_de = gr.cn[pp.d.w].bulk_slot_of(ege_d, a_d);
    assert!(bs_de.a > 0 && bs_de.a < gr.cn[pp.d.w].length(),
            "pulling deg 2 from a chain end");
    assert!(!gr.cn[pp.d.w].is_disconnected_cycle(),
            "pulling deg 2 from a disconnected cycle chain");

    // source
    let i_s = *pp.pth.back().expect("empty pulling path");
    let ege_s = gr.cn[pp.s.w].g[gr.gla[i_s]].oriented_end(pp.s.e);

    // the non-path edge behind the driver: the severed side
    let a_q = gr.cn[pp.d.w].neig_pos_of_eg_end(a_d, ege_d)
        .expect("vertex degree at the pulled edge is not 2");
    let ege_q = gr.cn[pp.d.w].internal_eg_end(a_d, a_q);
    let ic_q = gr.cn[pp.d.w].g[a_q].indc;
    let i_q = gr.ct[pp.cmp].gl[ic_q].i;

    vertex_split::split_to_11(gr, bs_de);

    let w_s = gr.glm[i_s];
    let e_s = if gr.cn[w_s].g[gr.gla[i_s]].points_forwards() {
        ege_s
    } else {
        ege_s.opp()
    };

    *pp = Paths::with_path(
        gr,
        Driver::of_ind(gr, i_d, ege_d),
        EndSlot::new(w_s, e_s),
        pp.pth.clone(),
    );

    let source_was_dissolved = pull_free_end_n(gr, pp, 1);

    // re-attach the severed side one edge further along the track
    let w_q = gr.glm[i_q];
    let e_q = if gr.cn[w_q].g[gr.gla[i_q]].points_forwards() {
        ege_q
    } else {
        ege_q.opp()
    };
    let w_d = gr.glm[i_d];
    let target = gr.cn[w_d].bulk_slot_of(ege_d.opp(), gr.gla[i_d]);
    vertex_merger::merge_12(gr, EndSlot::new(w_q, e_q), target);

    let w_s = gr.glm[i_s];
    assert!(source_was_dissolved ||
            gr.cn[w_s].is_head_ind(i_s) || gr.cn[w_s].is_tail_ind(i_s),
            "source is not a chain end");

    let e_s = if gr.cn[w_s].has_one_free_end() {
        gr.cn[w_s].the_only_free_end()
    } else if gr.cn[w_s].g[gr.gla[i_s]].points_forwards() {
        ege_s
    } else {
        ege_s.opp()
    };

    *pp = Paths::with_path(
        gr,
        Driver::of_ind(gr, i_d, ege_d),
        EndSlot::new(w_s, e_s),
        pp.pth.clone(),
    );
}

/// One deg-3 pull: dissolve the junction, pull the freed chain one step,
/// re-form the junction one edge behind the tip as a four-way vertex.
fn pull3_once(gr: &mut Graph, pp: &mut Paths) {
    let i_d = pp.d.ind;
    let ege_d = pp.d.eg_end;
    let mut w_d = pp.d.w;
    let mut e_d = gr.cn[w_d].ind2end(i_d, ege_d);

    let i_s = *pp.pth.back().expect("empty pulling path");
    let ege_s = gr.cn[pp.s.w].g[gr.gla[i_s]].oriented_end(pp.s.e);

    assert!(gr.cn[w_d].ngs_at(e_d).num() == 2,
            "driver connection count {} is not 2", gr.cn[w_d].ngs_at(e_d).num());

    let ns = [gr.cn[w_d].ngs_at(e_d)[0], gr.cn[w_d].ngs_at(e_d)[1]];
    let mut ni = [
        gr.cn[ns[0].w].end2ind(ns[0].e),
        gr.cn[ns[1].w].end2ind(ns[1].e),
    ];

    // disconnect the driver at the junction; a cycle neighbor covering both
    // remaining slots requires the (1,0) variant
    if gr.cn[ns[0].w].is_connected_cycle() && ns[0].w == ns[1].w {
        vertex_split::split_to_10(gr, EndSlot::new(w_d, e_d));
    } else {
        vertex_split::split_to_12(gr, EndSlot::new(w_d, e_d));
    }

    w_d = gr.glm[i_d];
    if i_d != i_s {
        e_d = gr.cn[w_d].ind2end(i_d, ege_d);
    }

    let w_s = gr.glm[i_s];
    let e_s = if gr.cn[w_s].g[gr.gla[i_s]].points_forwards() {
        ege_s
    } else {
        ege_s.opp()
    };

    *pp = Paths::with_path(
        gr,
        Driver::of_ind(gr, i_d, ege_d),
        EndSlot::new(w_s, e_s),
        pp.pth.clone(),
    );
    pull_free_end_n(gr, pp, 1);

    w_d = gr.glm[i_d];
    if i_d != i_s {
        e_d = gr.cn[w_d].ind2end(i_d, ege_d);
    }
    let w_s2 = gr.glm[i_s];

    *pp = Paths::with_path(
        gr,
        Driver::of_ind(gr, i_d, ege_d),
        EndSlot::new(w_s2, e_s),
        pp.pth.clone(),
    );

    let a0 = match e_d {
        End::A => 1,
        End::B => gr.cn[w_d].length() - 1,
    };
    let w1 = gr.glm[ni[0]];

    // junction neighbor edges on the track have advanced with the pull
    for x in &mut ni {
        if let Some(pi) = pp.pth.iter().position(|&u| u == *x) {
            if pi + 1 < pp.pth.len() {
                *x = pp.pth[pi + 1];
            }
        }
    }

    let a1 = gr.gla[ni[0]].max(gr.gla[ni[1]]);

    if i_d == i_s {
        if gr.cn[w1].is_disconnected_cycle() {
            vertex_merger::merge_10(gr, EndSlot::new(w_d, e_d.opp()), w1);
        } else {
            vertex_merger::merge_12(gr, EndSlot::new(w_d, e_d.opp()),
                                    crate::ends::BulkSlot::new(w1, a1));
        }
    } else if gr.cn[w1].is_disconnected_cycle() {
        vertex_merger::merge_20(gr, crate::ends::BulkSlot::new(w_d, a0), w1);
    } else {
        vertex_merger::merge_22(gr, crate::ends::BulkSlot::new(w_d, a0),
                                crate::ends::BulkSlot::new(w1, a1));
    }

    let w_s = gr.glm[i_s];
    let e_s = if gr.cn[w_s].g[gr.gla[i_s]].points_forwards() {
        ege_s
    } else {
        ege_s.opp()
    };

    *pp = Paths::with_path(
        gr,
        Driver::of_ind(gr, i_d, ege_d),
        EndSlot::new(w_s, e_s),
        pp.pth.clone(),
    );
}

// Input validation -----------------------------------------------------------

fn check_free_driver(gr: &Graph, pp: &Paths) {
    let e_d = pp.drv().end_slot(&gr.cn[pp.drv().w]).e;
    assert!(gr.ngs_at(EndSlot::new(pp.drv().w, e_d)).is_empty(),
            "driver end is not disconnected");
}

/// Validates the source side of a track before pulling `n` steps.
///
/// `same_chain_exempt` relaxes the length rule when the driver and the
/// source share a chain (deg-2 pulls).
fn check_source(gr: &Graph, pp: &Paths, n: usize, same_chain_exempt: bool) {
    let w_s = pp.src().w;
    let e_s = pp.src().e;

    let source_is_cycle = gr.cn[w_s].is_cycle();
    assert!(source_is_cycle || gr.cn[w_s].ngs_at(e_s).is_empty(),
            "source end is not disconnected");

    let len_s = pp.length_over_source_chain(gr);
    let ok = (same_chain_exempt && pp.drv().w == w_s) ||
        (!source_is_cycle && len_s >= n) ||
        (source_is_cycle && len_s >= MIN_CYCLE_LENGTH + n);
    assert!(ok, "pulling over a track longer than the source chain permits");
}
