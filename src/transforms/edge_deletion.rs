//! Deletion of single edges, with or without their host chain.

use log::debug;

use crate::ends::{BulkSlot, EndSlot};
use crate::graph::Graph;
use crate::transforms::{component_deletion, vertex_split};
use crate::CmpId;

/// Deletes the single edge of chain `s.w` together with the chain.
///
/// The chain must have length 1, a free end, and its other end `s` at a
/// junction of degree 3 or 4. The junction is dissolved by the matching
/// vertex split, which leaves the doomed edge as a singleton component; that
/// component is then deleted. Returns the id of the host component before
/// the operation.
pub fn deleting_host_chain(gr: &mut Graph, s: EndSlot) -> CmpId {
    let EndSlot { w, e } = s;

    let c = gr.cn[w].c;
    let ngs_num = gr.ngs_at(s).num();
    let ind = gr.cn[w].end_edge(e).ind;

    debug!("edge deletion with host chain: {} {}", w, e);

    assert!(w < gr.chain_num(), "chain id {} exceeds chain count {}", w, gr.chain_num());
    assert!(gr.cn[w].length() == 1,
            "wrong edge deletion variant for chain {} of length {}",
            w, gr.cn[w].length());
    assert!(gr.cn[w].is_shrinkable(), "chain {} is not shrinkable", w);
    assert!(gr.cn[w].has_one_free_end(),
            "chain {} does not have a single connected end", w);
    assert!(ngs_num == 2 || ngs_num == 3,
            "slot {} has unsupported junction degree {}", s, ngs_num + 1);

    // a connected end of degree 2 cannot exist: it would have been fused

    let cc = if ngs_num == 2 && gr.cn[gr.ngs_at(s)[0].w].is_connected_cycle() {
        vertex_split::split_to_10(gr, s)
    } else if ngs_num == 2 {
        vertex_split::split_to_12(gr, s)
    } else {
        vertex_split::split_to_13(gr, s)
    };

    // the split produced a singleton component holding only the doomed edge
    let cr = if gr.ct[cc[0]].gl[0].i == ind { cc[0] } else { cc[1] };
    assert!(gr.ct[cr].num_edges() == 1,
            "component {} marked for removal holds more than one edge", cr);

    component_deletion::delete(gr, cr);

    c
}

/// Deletes the edge at bulk position `s` while keeping the host chain.
///
/// The chain must be shrinkable. Global and component-wide edge ids are
/// compacted by renumbering the respective last edge into the vacated id.
/// Returns the id of the host component.
pub fn preserving_host_chain(gr: &mut Graph, s: BulkSlot) -> CmpId {
    let BulkSlot { w, a } = s;

    debug!("edge deletion preserving host chain: {} at {}", w, a);

    assert!(w < gr.chain_num(), "chain id {} exceeds chain count {}", w, gr.chain_num());
    assert!(a < gr.cn[w].length(),
            "position {} exceeds length {} of chain {}", a, gr.cn[w].length(), w);
    assert!(gr.cn[w].length() > 1,
            "single-edge chain {}: the host-chain-deleting variant applies", w);
    assert!(gr.cn[w].is_shrinkable(), "chain {} is not shrinkable", w);

    let c = gr.cn[w].c;
    let ind = gr.cn[w].g[a].ind;
    let indc = gr.cn[w].g[a].indc;

    // the topology is unaffected: the chain survives

    let b = *gr.ct[c].gl.last().expect("empty component in edge deletion");
    if ind != b.i {
        gr.cn[b.w].g[b.a].indc = indc;
    }

    if ind < gr.edgenum - 1 {
        let w_last = gr.glm[gr.edgenum - 1];
        let a_last = gr.gla[gr.edgenum - 1];
        gr.cn[w_last].g[a_last].ind = ind;
        let cl = gr.cn[w_last].c;
        gr.ct[cl].set_gl(&gr.cn);
    }

    gr.edgenum -= 1;
    gr.cn[w].remove_edge(a);
    gr.cn[w].set_g_w();

    gr.ct[c].set_gl(&gr.cn);

    gr.update();
    c
}

/// Deletes the edge with graph-wide id `ind` preserving its host chain.
pub fn preserving_host_chain_by_ind(gr: &mut Graph, ind: usize) -> CmpId {
    let s = gr.ind2bslot(ind);
    preserving_host_chain(gr, s)
}
