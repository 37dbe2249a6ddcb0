//! Vertex splits: dividing one vertex into two of lower degrees.
//!
//! These are the duals of the mergers in
//! [`vertex_merger`](crate::transforms::vertex_merger). Every variant
//! returns the ids of the components holding the two sides of the split
//! vertex after the operation.

use log::debug;

use crate::component::Component;
use crate::ends::{BulkSlot, End, EndSlot};
use crate::graph::Graph;
use crate::transforms::vertex_merger::core;
use crate::CmpId;

/// Splits a degree-2 vertex into two degree-1 vertices.
///
/// At a boundary of a disconnected cycle the cycle simply opens into a
/// linear chain. At a true bulk position of a cycle the storage is rotated
/// so that the cut lands on the ends. On a linear chain the edges beyond the
/// cut move into a freshly allocated chain, and the component splits if the
/// two sides are no longer connected through the rest of the graph.
pub fn split_to_11(gr: &mut Graph, s: BulkSlot) -> [CmpId; 2] {
    let BulkSlot { w, a } = s;
    if a == 0 || a == gr.cn[w].length() {
        disconnected_cycle_d0(gr, w)
    } else if gr.cn[w].is_disconnected_cycle() {
        disconnected_cycle_d2(gr, s)
    } else {
        linear(gr, s)
    }
}

/// Opens a disconnected cycle at its boundary vertex.
fn disconnected_cycle_d0(gr: &mut Graph, w: usize) -> [CmpId; 2] {
    debug!("vs11 cycle boundary: chain {}", w);

    assert!(gr.cn[w].is_disconnected_cycle(),
            "vs11: chain {} is not a disconnected cycle", w);
    assert!(gr.cn[w].length() >= crate::chain::MIN_CYCLE_LENGTH,
            "vs11: length of cycle chain {} is below the minimum", w);

    let ind1 = gr.cn[w].tail_ind();
    let ind2 = gr.cn[w].head_ind();

    for e in End::BOTH {
        gr.cn[w].ngs_at_mut(e).clear();
    }

    let c = gr.cn[w].c;
    gr.ct[c].chis.cn11 = Some(w);
    gr.ct[c].chis.cn22 = None;

    gr.update_books();
    if gr.use_adjacency {
        gr.update_adjacency_edges(ind1);
        gr.update_adjacency_edges(ind2);
    }

    [c, c]
}

/// Opens a disconnected cycle at an internal vertex by rotating its storage.
fn disconnected_cycle_d2(gr: &mut Graph, s: BulkSlot) -> [CmpId; 2] {
    let BulkSlot { w, a } = s;
    debug!("vs11 cycle bulk: {}", s);

    assert!(gr.cn[w].length() > 1, "vs11: chain {} has less than 2 edges", w);
    assert!(a > 0 && a < gr.cn[w].length(),
            "vs11: position {} is at a chain end of {}", a, w);

    let clini = gr.cn[w].c;

    let ind1 = gr.cn[w].g[a - 1].ind;
    let ind2 = gr.cn[w].g[a].ind;

    gr.cn[w].g.rotate_left(a);
    gr.cn[w].set_g_w();
    {
        let (cmp, cn) = (&mut gr.ct[clini], &gr.cn);
        cmp.set_gl(cn);
    }

    for e in End::BOTH {
        gr.cn[w].ngs_at_mut(e).clear();
    }
    gr.ct[clini].chis.cn11 = Some(w);
    gr.ct[clini].chis.cn22 = None;

    gr.update_books();
    if gr.use_adjacency {
        gr.update_adjacency_edges(ind1);
        gr.update_adjacency_edges(ind2);
    }

    debug_assert!(gr.cn[gr.glm[ind1]].idw == w && gr.cn[gr.glm[ind2]].idw == w);
    debug_assert!(gr.cn[gr.glm[ind1]].c == clini && gr.cn[gr.glm[ind2]].c == clini);

    [clini, clini]
}

/// Divides a linear chain at an internal vertex.
fn linear(gr: &mut Graph, s: BulkSlot) -> [CmpId; 2] {
    let BulkSlot { w, a } = s;
    debug!("vs11 linear: {}", s);

    assert!(gr.cn[w].length() > 1, "vs11: chain {} has less than 2 edges", w);
    assert!(a > 0 && a < gr.cn[w].length(),
            "vs11: position {} is at a chain end of {}", a, w);

    let clini = gr.cn[w].c;

    let ind1 = gr.cn[w].g[a - 1].ind;
    let ind2 = gr.cn[w].g[a].ind;

    // the new chain produced by the split
    let n = gr.chain_num();
    gr.cn.push(crate::chain::Chain::new(n));

    let ss = EndSlot::new(w, End::B);
    let is_connected = gr.cn[w].is_connected_at(End::B);
    let mut is_cycled = false;
    if is_connected {
        let partition = {
            let mut pp = crate::paths::over_end_slots::EndSlotPaths::new(
                &gr.ct[clini], &gr.cn);
            is_cycled = pp.are_connected(ss, ss.opp(), false);
            if is_cycled { None } else { Some(pp.classify_chains_by_connectivity(ss)) }
        };
        if let Some([accessible, blocked]) = partition {
            gr.apply_component_split(clini, accessible, blocked);
        }
    }

    let tail_g = gr.cn[w].g.split_off(a);
    gr.cn[n].g = tail_g;

    gr.copy_neigs(EndSlot::new(w, End::B), EndSlot::new(n, End::B));
    gr.cn[w].ngs_at_mut(End::B).clear();
    gr.cn[n].set_g_w();

    if !is_connected {
        let newc = gr.cmpt_num();
        let cmp = Component::with_chain(newc, &mut gr.cn, n);
        gr.ct.push(cmp);
        let ww = gr.ct[clini].ww.clone();
        gr.ct[clini].rebuild(&mut gr.cn, ww);
    } else {
        let cur = gr.cn[w].c;
        if !is_cycled {
            // the accessible half was just split off as the last component
            let last = gr.ind_last_cmpt();
            gr.ct[last].append_chain(&mut gr.cn, n);
        } else {
            // the component remains cycled over w and keeps both halves
            gr.ct[cur].append_chain(&mut gr.cn, n);
        }
        gr.ct[cur].set_edges(&mut gr.cn);
        gr.ct[cur].set_gl(&gr.cn);
        gr.ct[cur].set_chis(&gr.cn);
    }

    gr.update_books();
    if gr.use_adjacency {
        gr.update_adjacency_edges(ind1);
        gr.update_adjacency_edges(ind2);
    }

    debug_assert!(gr.cn[gr.glm[ind1]].c == clini || gr.cn[gr.glm[ind2]].c == clini);

    [gr.cn[w].c, gr.cn[n].c]
}

/// Splits a three-way junction into a degree-1 and a degree-2 vertex.
///
/// The junction slot `s` disconnects; its two ex-neighbors are fused back
/// into a single chain, forming the degree-2 vertex. The caller must ensure
/// the ex-neighbors are ends of distinct chains (otherwise
/// [`split_to_10`] applies).
pub fn split_to_12(gr: &mut Graph, s: EndSlot) -> [CmpId; 2] {
    split_from_3way(gr, s, true)
}

/// Splits a three-way junction sitting on a cycle into a degree-1 vertex and
/// a disconnected-cycle boundary.
///
/// Applies when both junction neighbors are the two ends of one chain: that
/// chain becomes a disconnected cycle in its own component.
pub fn split_to_10(gr: &mut Graph, s: EndSlot) -> [CmpId; 2] {
    split_from_3way(gr, s, false)
}

fn split_from_3way(gr: &mut Graph, s: EndSlot, fuse: bool) -> [CmpId; 2] {
    debug!("vs1{}: {}", if fuse { "2" } else { "0" }, s);

    let clini = gr.cn[s.w].c;
    let ngs = gr.ngs_at(s).clone();
    assert!(ngs.num() == 2,
            "vs1x: input vertex degree {} at {} is not 3", ngs.num() + 1, s);

    let ng0 = ngs[0];
    let ind1 = gr.slot2ind(s);
    let ind2 = gr.slot2ind(ng0);

    if fuse {
        let ng1 = ngs[1];
        let EndSlot { w: n0, e: e0 } = ng0;
        let EndSlot { w: n1, e: e1 } = ng1;

        // splits off the far side if the junction held the component together
        let is_cycle = gr.cut_component_at(s);

        gr.remove_slot_from_neigs(s);
        gr.remove_slot_from_neigs(ng0);

        gr.ct[clini].set_chis(&gr.cn);

        let cmp_ng = gr.cn[ng0.w].c;
        let is_cycle1 = gr.ct[cmp_ng].dfs(&gr.cn, ng0, ng1.opp());
        if !is_cycle1 {
            let rm = gr.ct[cmp_ng].find_chains_from_slot(&gr.cn, ng1);
            gr.split_component(cmp_ng, rm);
        }

        if !is_cycle {
            let last = gr.ind_last_cmpt();
            gr.ct[last].set_chis(&gr.cn);
        }

        // fuse the freed neighbors back into one chain; this also re-merges
        // any components separated transiently above
        if e0 == e1 {
            core::antiparallel(gr, e0, n0, n1);
        } else if e0 == End::A && e1 == End::B {
            core::parallel(gr, n0, n1);
        } else {
            core::parallel(gr, n1, n0);
        }
    } else {
        assert!(ngs[0].w == ngs[1].w,
                "vs10: junction neighbors {} and {} are not one chain", ngs[0], ngs[1]);

        gr.remove_slot_from_neigs(s);

        let newc = gr.cmpt_num();
        gr.ct.push(Component::new(newc));
        let (head, tail) = gr.ct.split_at_mut(newc);
        head[clini].move_to(&mut gr.cn, &mut tail[0], &[ng0.w]);
    }

    gr.update();

    let w1 = gr.glm[ind1];
    let w2 = gr.glm[ind2];
    debug_assert!(gr.cn[w1].c == clini || gr.cn[w2].c == clini);

    [gr.cn[w1].c, gr.cn[w2].c]
}

/// Splits a four-way junction into a degree-1 and a degree-3 vertex.
///
/// The junction slot `s` disconnects and becomes free; the remaining three
/// ends keep their mutual connections. If the junction held the component
/// together, the far side splits off.
pub fn split_to_13(gr: &mut Graph, s: EndSlot) -> [CmpId; 2] {
    debug!("vs13: {}", s);

    assert!(gr.ngs_at(s).num() == 3,
            "vs13: connection count {} at {} is not 3", gr.ngs_at(s).num(), s);

    let clini = gr.cn[s.w].c;

    let ngs = gr.ngs_at(s).clone();
    let mut ind = [gr.slot2ind(s); 4];
    for (i, &u) in ngs.iter().enumerate() {
        ind[i + 1] = gr.slot2ind(u);
    }

    let is_cycle = gr.cut_component_at(s);

    gr.remove_slot_from_neigs(s);

    gr.ct[clini].set_chis(&gr.cn);
    if !is_cycle {
        let last = gr.ind_last_cmpt();
        gr.ct[last].set_chis(&gr.cn);
    }

    gr.update_books();
    if gr.use_adjacency {
        for i in ind {
            gr.update_adjacency_edges(i);
        }
    }

    let w1 = gr.glm[ind[0]];
    let w2 = gr.glm[ind[1]];
    debug_assert!(gr.cn[w1].c == clini || gr.cn[w2].c == clini);

    [gr.cn[w1].c, gr.cn[w2].c]
}

/// Splits a four-way junction into two bulk-type vertices.
///
/// The slots `s1` and `s2` pick which pair of junction edges stays together:
/// each of them ends up fused with one of the remaining two ends. Covers the
/// (2,2), (2,0) and (0,0) output combinations; cycle chains among the
/// neighbors are detected and handled via the cycle-aware split variants.
pub fn split_bb(gr: &mut Graph, s1: EndSlot, s2: EndSlot) -> [CmpId; 2] {
    use itertools::Itertools;

    debug!("vsbb: {} {}", s1, s2);

    assert!(s1 != s2, "vsbb: slots s1 and s2 are identical: {}", s1);
    assert!(gr.ngs_at(s1).num() == 3,
            "vsbb: connection count {} at {} is not 3", gr.ngs_at(s1).num(), s1);
    assert!(gr.ngs_at(s2).num() == 3,
            "vsbb: connection count {} at {} is not 3", gr.ngs_at(s2).num(), s2);
    assert!(gr.ngs_at(s1).has(s2),
            "vsbb: {} not found among the connections at {}", s2, s1);
    assert!(gr.ngs_at(s2).has(s1),
            "vsbb: {} not found among the connections at {}", s1, s2);

    // edge ids and oriented edge ends of all four junction members, the
    // selected pair first
    let mut ind = [0usize; 4];
    let mut end = [End::A; 4];
    ind[0] = gr.slot2ind(s1);
    ind[1] = gr.slot2ind(s2);
    end[0] = gr.edge_end(s1);
    end[1] = gr.edge_end(s2);
    let mut j = 2;
    for &u in &gr.ngs_at(s1).clone() {
        if u != s2 {
            ind[j] = gr.slot2ind(u);
            end[j] = gr.edge_end(u);
            j += 1;
        }
    }

    split_to_13(gr, s1);

    let ngs2 = gr.ngs_at(s2).clone();
    if ngs2[0].w == ngs2[1].w {
        split_to_10(gr, s2);
    } else {
        split_to_12(gr, s2);
    }

    let ww0 = gr.glm[ind[0]];
    let ww1 = gr.glm[ind[1]];
    let e0 = gr.cn[ww0].ind2end(ind[0], end[0]);
    let e1 = gr.cn[ww1].ind2end(ind[1], end[1]);

    crate::transforms::vertex_merger::merge_11(
        gr, EndSlot::new(ww0, e0), EndSlot::new(ww1, e1));

    let cc: Vec<CmpId> = ind.iter()
        .map(|&i| gr.edge(i).c)
        .sorted()
        .dedup()
        .collect();

    [cc[0], *cc.last().expect("no components touched by the split")]
}
