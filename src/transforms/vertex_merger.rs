//! Vertex mergers: joining two vertices into one of higher degree.
//!
//! The low-level [`core`] routines join free chain ends directly. The
//! higher-degree variants reduce to them, splitting bulk vertices first where
//! needed and wiring the resulting free ends into symmetric junctions.
//!
//! Each variant returns the ids of the one or two components it touched, as
//! they were numbered before the operation.

use crate::ends::{BulkSlot, End, EndSlot};
use crate::graph::Graph;
use crate::neigs::Neigs;
use crate::transforms::vertex_split;
use crate::{ChId, CmpId};

pub mod core {
    //! Elementary mergers acting on free ends of chains.

    use log::debug;

    use super::*;

    /// Joins end `e` of chain `w1` to the same end of chain `w2`.
    ///
    /// Exactly one of the chains is reversed first so that the concatenation
    /// is well formed: for `e == A` it is `w1`, for `e == B` it is `w2`.
    /// Chain `w2` dissolves into `w1`; the last chain of the arena takes over
    /// its id.
    pub fn antiparallel(gr: &mut Graph, e: End, w1: ChId, w2: ChId) -> [CmpId; 2] {
        debug!("vm core antiparallel: {} {} + {} {}", w1, e, w2, e);

        assert!(w1 != w2,
                "antiparallel: same chain {}: to_cycle should be used instead", w1);
        assert!(!gr.cn[w1].is_connected_at(e),
                "antiparallel: end {} of w1 {} is not free", e, w1);
        assert!(!gr.cn[w2].is_connected_at(e),
                "antiparallel: end {} of w2 {} is not free", e, w2);
        assert!(gr.cn[w1].length() > 0, "antiparallel: chain w1 {} has no edges", w1);
        assert!(gr.cn[w2].length() > 0, "antiparallel: chain w2 {} has no edges", w2);

        let c1 = gr.cn[w1].c;
        let c2 = gr.cn[w2].c;

        if e == End::A {
            gr.copy_neigs(EndSlot::new(w1, End::B), EndSlot::new(w1, End::A));
        }
        gr.copy_neigs(EndSlot::new(w2, e.opp()), EndSlot::new(w1, End::B));

        gr.ct[c2].remove_chain(&mut gr.cn, w2);

        if e == End::A {
            gr.cn[w1].reverse_g();
        } else {
            gr.cn[w2].reverse_g();
        }

        let g2 = std::mem::take(&mut gr.cn[w2].g);
        gr.cn[w1].g.extend(g2);
        gr.cn[w1].set_g_w();

        if w2 != gr.ind_last_chain() {
            let last = gr.ind_last_chain();
            gr.rename_chain(last, w2);
        }
        gr.cn.pop();

        if c1 == c2 {
            gr.ct[c1].set_chis(&gr.cn);
        } else {
            gr.merge_components(c1, c2);
        }

        gr.ct[c1].set_edges(&mut gr.cn);
        gr.ct[c1].set_gl(&gr.cn);
        if c1 != c2 && c2 < gr.cmpt_num() {
            gr.ct[c2].set_edges(&mut gr.cn);
            gr.ct[c2].set_gl(&gr.cn);
        }

        gr.update();
        [c1, c2]
    }

    /// Joins end `A` of chain `w1` to end `B` of chain `w2`.
    ///
    /// The combined storage is `w2`'s edges followed by `w1`'s, kept under
    /// chain id `w1`; chain `w2` dissolves.
    pub fn parallel(gr: &mut Graph, w1: ChId, w2: ChId) -> [CmpId; 2] {
        debug!("vm core parallel: {} A + {} B", w1, w2);

        assert!(w1 != w2,
                "parallel: same chain {}: to_cycle should be used instead", w1);
        assert!(!gr.cn[w1].is_connected_at(End::A),
                "parallel: end A of w1 {} is not free", w1);
        assert!(!gr.cn[w2].is_connected_at(End::B),
                "parallel: end B of w2 {} is not free", w2);
        assert!(gr.cn[w1].length() > 0, "parallel: chain w1 {} has no edges", w1);
        assert!(gr.cn[w2].length() > 0, "parallel: chain w2 {} has no edges", w2);

        let c1 = gr.cn[w1].c;
        let c2 = gr.cn[w2].c;

        gr.copy_neigs(EndSlot::new(w2, End::A), EndSlot::new(w1, End::A));

        gr.ct[c2].remove_chain(&mut gr.cn, w2);

        let mut g2 = std::mem::take(&mut gr.cn[w2].g);
        let g1 = std::mem::take(&mut gr.cn[w1].g);
        g2.extend(g1);
        gr.cn[w1].g = g2;
        gr.cn[w1].set_g_w();
        gr.ct[c1].set_edges(&mut gr.cn);
        gr.ct[c1].set_gl(&gr.cn);

        if w2 != gr.ind_last_chain() {
            let last = gr.ind_last_chain();
            gr.rename_chain(last, w2);
        }
        gr.cn.pop();

        if c1 == c2 {
            gr.ct[c1].set_chis(&gr.cn);
        } else {
            gr.merge_components(c1, c2);
        }
        if c2 < gr.cmpt_num() && c1 != c2 {
            gr.ct[c2].set_edges(&mut gr.cn);
            gr.ct[c2].set_gl(&gr.cn);
        }

        gr.update();
        [c1, c2]
    }

    /// Closes a disconnected chain into a cycle by cross-linking its ends.
    pub fn to_cycle(gr: &mut Graph, w: ChId) -> [CmpId; 2] {
        debug!("vm core to_cycle: {}", w);

        assert!(!gr.cn[w].is_disconnected_cycle(),
                "to_cycle: chain {} is already a separate cycle", w);
        assert!(!gr.cn[w].is_connected_at(End::A) && !gr.cn[w].is_connected_at(End::B),
                "to_cycle: chain {} is not disconnected", w);
        assert!(gr.cn[w].length() >= crate::chain::MIN_CYCLE_LENGTH,
                "to_cycle: chain {} is shorter than the minimal cycle", w);

        let sa = EndSlot::new(w, End::A);
        let sb = EndSlot::new(w, End::B);

        gr.ngs_at_mut(sa).insert(sb);
        gr.ngs_at_mut(sb).insert(sa);

        let c = gr.cn[w].c;
        gr.ct[c].chis.cn11 = None;
        gr.ct[c].chis.cn22 = Some(w);

        gr.update();
        [c, c]
    }
}

/// Merges two degree-1 vertices into a degree-2 vertex.
///
/// Joining the two ends of one chain closes it into a cycle; otherwise the
/// chains are concatenated with the orientation dictated by the ends chosen.
pub fn merge_11(gr: &mut Graph, s1: EndSlot, s2: EndSlot) -> [CmpId; 2] {
    if s1.w == s2.w {
        core::to_cycle(gr, s1.w)
    } else if s1.e == s2.e {
        core::antiparallel(gr, s1.e, s1.w, s2.w)
    } else if s1.e == End::A {
        core::parallel(gr, s1.w, s2.w)
    } else {
        core::parallel(gr, s2.w, s1.w)
    }
}

/// Merges a degree-1 vertex into a degree-2 (bulk) vertex, producing a
/// three-way junction.
///
/// The bulk vertex is split to two free ends first; the three resulting ends
/// are then wired into a symmetric degree-3 neighborhood.
pub fn merge_12(gr: &mut Graph, s1: EndSlot, s2: BulkSlot) -> [CmpId; 2] {
    let EndSlot { w: w1, e: e1 } = s1;
    let BulkSlot { w: w2, a: a2 } = s2;

    // disconnected cycles take the (1,0) variant
    assert!(gr.ngs_at(s1).is_empty(),
            "vm12: end {} is not a free end of {}", e1, w1);
    assert!(a2 > 0, "vm12: position 0 is the very beginning of w2 {}", w2);
    assert!(a2 < gr.cn[w2].length(), "vm12: position {} is the very end of w2 {}", a2, w2);

    let c1 = gr.cn[w1].c;
    let c2 = gr.cn[w2].c;

    // chain mi is produced by the split
    let mi = if gr.cn[w2].is_disconnected_cycle() { w2 } else { gr.chain_num() };

    vertex_split::split_to_11(gr, s2);

    let w1a = EndSlot::new(w1, End::A);
    let w1b = EndSlot::new(w1, End::B);
    let w2b = EndSlot::new(w2, End::B);
    let mia = EndSlot::new(mi, End::A);
    let mib = EndSlot::new(mi, End::B);

    if w1 == w2 {
        // not a cycle chain: a cycle would need connections on both ends,
        // while w1 has a connection at most at one
        if e1 == End::A {
            gr.cn[w1].ngs = [Neigs::from([w1b, mia]), Neigs::from([w1a, mia])];
            *gr.ngs_at_mut(mia) = Neigs::from([w1a, w1b]);
        } else {
            *gr.ngs_at_mut(w1b) = Neigs::from([mia, mib]);
            gr.cn[mi].ngs = [Neigs::from([w1b, mib]), Neigs::from([w1b, mia])];
        }
    } else {
        *gr.ngs_at_mut(s1) = Neigs::from([w2b, mia]);
        *gr.ngs_at_mut(w2b) = Neigs::from([s1, mia]);
        *gr.ngs_at_mut(mia) = Neigs::from([s1, w2b]);
    }

    if gr.cn[w2].c == gr.cn[mi].c {
        let c = gr.cn[mi].c;
        gr.ct[c].set_chis(&gr.cn);
    } else {
        gr.merge_components(gr.cn[w2].c, gr.cn[mi].c);
    }
    if gr.cn[w2].c == gr.cn[w1].c {
        let c = gr.cn[w1].c;
        gr.ct[c].set_chis(&gr.cn);
    } else {
        gr.merge_components(gr.cn[w1].c, gr.cn[w2].c);
    }

    gr.update();
    [c1, c2]
}

/// Merges a degree-1 vertex into a three-way junction, producing a four-way
/// junction.
pub fn merge_13(gr: &mut Graph, s1: EndSlot, s2: EndSlot) -> [CmpId; 2] {
    assert!(gr.ngs_at(s1).is_empty(),
            "vm13: slot {} is not a free end", s1);
    assert!(gr.ngs_at(s2).num() == 2,
            "vm13: slot {} is not at a three-way junction", s2);

    let c1 = gr.cn[s1.w].c;
    let c2 = gr.cn[s2.w].c;

    let ngs = gr.ngs_at(s2).clone();

    *gr.ngs_at_mut(s1) = Neigs::from([s2, ngs[0], ngs[1]]);
    gr.ngs_at_mut(s2).insert(s1);
    gr.ngs_at_mut(ngs[0]).insert(s1);
    gr.ngs_at_mut(ngs[1]).insert(s1);

    if c1 == c2 {
        gr.ct[c1].set_chis(&gr.cn);
    } else {
        gr.merge_components(c1, c2);
    }

    gr.update();
    [c1, c2]
}

/// Merges two degree-2 (bulk) vertices into a four-way junction.
///
/// Both bulk vertices are split to free ends first (cycle chains need one
/// split only); the four resulting ends are then fully interconnected.
pub fn merge_22(gr: &mut Graph, b1: BulkSlot, b2: BulkSlot) -> [CmpId; 2] {
    let BulkSlot { w: w1, a: a1 } = b1;
    let BulkSlot { w: w2, a: a2 } = b2;

    let c1 = gr.cn[w1].c;
    let c2 = gr.cn[w2].c;

    let (s1, s2, s3, s4);

    if w1 == w2 {
        let (al, ash) = if a1 > a2 { (a1, a2) } else { (a2, a1) };

        if !gr.cn[w1].is_disconnected_cycle() {
            // two splits produce the middle piece and the far piece
            vertex_split::split_to_11(gr, BulkSlot::new(w1, al));
            vertex_split::split_to_11(gr, BulkSlot::new(w1, ash));

            s1 = EndSlot::new(w1, End::B);
            s2 = EndSlot::new(gr.ind_last_chain(), End::A);
            s3 = EndSlot::new(gr.ind_last_chain(), End::B);
            s4 = EndSlot::new(gr.chain_num() - 2, End::A);
        } else {
            // the first split rotates the cycle open; the second one cuts it
            vertex_split::split_to_11(gr, BulkSlot::new(w1, al));
            let shifted = ash + gr.cn[w1].length() - al;
            vertex_split::split_to_11(gr, BulkSlot::new(w1, shifted));

            s1 = EndSlot::new(w1, End::A);
            s2 = EndSlot::new(w1, End::B);
            s3 = EndSlot::new(gr.ind_last_chain(), End::A);
            s4 = EndSlot::new(gr.ind_last_chain(), End::B);
        }
    } else {
        let cyc1 = gr.cn[w1].is_disconnected_cycle();
        let cyc2 = gr.cn[w2].is_disconnected_cycle();

        if !cyc1 && !cyc2 {
            vertex_split::split_to_11(gr, b1);
            vertex_split::split_to_11(gr, b2);

            s1 = EndSlot::new(w1, End::B);
            s2 = EndSlot::new(w2, End::B);
            s3 = EndSlot::new(gr.chain_num() - 2, End::A);
            s4 = EndSlot::new(gr.ind_last_chain(), End::A);
        } else if cyc1 && cyc2 {
            vertex_split::split_to_11(gr, b1);
            vertex_split::split_to_11(gr, b2);

            s1 = EndSlot::new(w1, End::A);
            s2 = EndSlot::new(w1, End::B);
            s3 = EndSlot::new(w2, End::A);
            s4 = EndSlot::new(w2, End::B);
        } else if cyc1 {
            vertex_split::split_to_11(gr, b1);
            vertex_split::split_to_11(gr, b2);

            s1 = EndSlot::new(w1, End::A);
            s2 = EndSlot::new(w1, End::B);
            s3 = EndSlot::new(w2, End::B);
            s4 = EndSlot::new(gr.ind_last_chain(), End::A);
        } else {
            vertex_split::split_to_11(gr, b1);
            vertex_split::split_to_11(gr, b2);

            s1 = EndSlot::new(w1, End::B);
            s2 = EndSlot::new(gr.ind_last_chain(), End::A);
            s3 = EndSlot::new(w2, End::A);
            s4 = EndSlot::new(w2, End::B);
        }
    }

    join_four(gr, s1, s2, s3, s4);

    gr.update();
    [c1, c2]
}

/// Merges a degree-2 (bulk) vertex with the boundary vertex of a
/// disconnected cycle into a four-way junction.
pub fn merge_20(gr: &mut Graph, b1: BulkSlot, w2: ChId) -> [CmpId; 2] {
    let BulkSlot { w: w1, a: _ } = b1;

    let c1 = gr.cn[w1].c;
    let c2 = gr.cn[w2].c;

    let b2 = BulkSlot::new(w2, 0);
    let (s1, s2, s3, s4);

    if w1 == w2 {
        // open the cycle, then cut the resulting linear chain
        vertex_split::split_to_11(gr, b2);
        vertex_split::split_to_11(gr, b1);

        s1 = EndSlot::new(w1, End::B);
        s2 = EndSlot::new(w1, End::A);
        s3 = EndSlot::new(gr.ind_last_chain(), End::B);
        s4 = EndSlot::new(gr.ind_last_chain(), End::A);
    } else if !gr.cn[w1].is_disconnected_cycle() {
        vertex_split::split_to_11(gr, b1);
        vertex_split::split_to_11(gr, b2);

        s1 = EndSlot::new(w1, End::B);
        s2 = EndSlot::new(w2, End::B);
        s3 = EndSlot::new(w2, End::A);
        s4 = EndSlot::new(gr.ind_last_chain(), End::A);
    } else {
        vertex_split::split_to_11(gr, b1);
        vertex_split::split_to_11(gr, b2);

        s1 = EndSlot::new(w1, End::A);
        s2 = EndSlot::new(w1, End::B);
        s3 = EndSlot::new(w2, End::A);
        s4 = EndSlot::new(w2, End::B);
    }

    join_four(gr, s1, s2, s3, s4);

    gr.update();
    [c1, c2]
}

/// Merges a degree-1 vertex into the boundary vertex of a disconnected
/// cycle, producing a three-way junction on a connected cycle.
pub fn merge_10(gr: &mut Graph, s1: EndSlot, w2: ChId) -> [CmpId; 2] {
    assert!(gr.ngs_at(s1).is_empty(),
            "vm10: end {} of chain {} is not a free end", s1.e, s1.w);
    assert!(gr.cn[w2].is_disconnected_cycle(),
            "vm10: chain {} is not a disconnected cycle", w2);

    let c1 = gr.cn[s1.w].c;
    let c2 = gr.cn[w2].c;

    let s2a = EndSlot::new(w2, End::A);
    let s2b = EndSlot::new(w2, End::B);

    *gr.ngs_at_mut(s1) = Neigs::from([s2a, s2b]);
    *gr.ngs_at_mut(s2a) = Neigs::from([s2b, s1]);
    *gr.ngs_at_mut(s2b) = Neigs::from([s2a, s1]);

    gr.merge_components(c1, c2);

    gr.update();
    [c1, c2]
}

/// Merges the boundary vertices of two disconnected cycles into a four-way
/// junction.
pub fn merge_00(gr: &mut Graph, w1: ChId, w2: ChId) -> [CmpId; 2] {
    assert!(gr.cn[w1].is_disconnected_cycle(),
            "vm00: chain {} is not a disconnected cycle", w1);
    assert!(gr.cn[w2].is_disconnected_cycle(),
            "vm00: chain {} is not a disconnected cycle", w2);

    let c1 = gr.cn[w1].c;
    let c2 = gr.cn[w2].c;

    // open both cycles into chains with two free ends each
    vertex_split::split_to_11(gr, BulkSlot::new(w1, 0));
    vertex_split::split_to_11(gr, BulkSlot::new(w2, 0));

    let a1 = EndSlot::new(w1, End::A);
    let b1 = EndSlot::new(w1, End::B);
    let a2 = EndSlot::new(w2, End::A);
    let b2 = EndSlot::new(w2, End::B);

    *gr.ngs_at_mut(a1) = Neigs::from([b1, a2, b2]);
    *gr.ngs_at_mut(b1) = Neigs::from([a1, a2, b2]);
    *gr.ngs_at_mut(a2) = Neigs::from([b1, a1, b2]);
    *gr.ngs_at_mut(b2) = Neigs::from([b1, a2, a1]);

    gr.merge_components(c1, c2);

    gr.update();
    [c1, c2]
}

/// Interconnects four free ends into a fully connected degree-4 junction,
/// then merges their components pairwise.
fn join_four(gr: &mut Graph, s1: EndSlot, s2: EndSlot, s3: EndSlot, s4: EndSlot) {
    *gr.ngs_at_mut(s1) = Neigs::from([s2, s3, s4]);
    *gr.ngs_at_mut(s2) = Neigs::from([s1, s3, s4]);
    *gr.ngs_at_mut(s3) = Neigs::from([s2, s1, s4]);
    *gr.ngs_at_mut(s4) = Neigs::from([s2, s3, s1]);

    for u in [s2.w, s3.w, s4.w] {
        if gr.cn[s1.w].c == gr.cn[u].c {
            let c = gr.cn[u].c;
            gr.ct[c].set_chis(&gr.cn);
        } else {
            gr.merge_components(gr.cn[s1.w].c, gr.cn[u].c);
        }
    }
}
