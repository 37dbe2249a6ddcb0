//! Deletion of whole components.

use log::debug;

use crate::ends::{End, EndSlot};
use crate::graph::Graph;
use crate::CmpId;

/// Removes component `c` with all its chains and edges.
///
/// Chains are peeled off one by one: remaining neighborhood links are
/// dissolved, edges popped with the last graph edge renumbered into the
/// vacated id, and the last chain renamed into the vacated chain id. The
/// component arena is compacted the same way. Returns the vacated id.
pub fn delete(gr: &mut Graph, c: CmpId) -> CmpId {
    debug!("component deletion: {} ({} chains, {} edges)",
           c, gr.ct[c].num_chains(), gr.ct[c].num_edges());

    let mut ww = gr.ct[c].ww.clone();
    while let Some(w) = ww.pop() {
        if !gr.cn[w].is_disconnected_cycle() {
            if gr.cn[w].is_connected_at(End::A) {
                gr.remove_slot_from_neigs(EndSlot::new(w, End::A));
            }
            if gr.cn[w].is_connected_at(End::B) {
                gr.remove_slot_from_neigs(EndSlot::new(w, End::B));
            }
        }

        while gr.cn[w].length() > 0 {
            let p_ind = gr.cn[w].head_ind();
            if p_ind != gr.edgenum - 1 {
                // relabel the last graph edge into the vacated global id
                let w_last = gr.glm[gr.edgenum - 1];
                let a_last = gr.gla[gr.edgenum - 1];
                gr.cn[w_last].g[a_last].ind = p_ind;
                gr.cn[w].g.pop();
                gr.edgenum -= 1;
                let pc = gr.cn[w_last].c;
                gr.ct[pc].set_edges(&mut gr.cn);
                gr.ct[pc].set_gl(&gr.cn);
            } else {
                gr.cn[w].g.pop();
                gr.edgenum -= 1;
            }
            gr.make_indma();
        }

        if w != gr.ind_last_chain() {
            let last = gr.ind_last_chain();
            if let Some(pos) = ww.iter().position(|&x| x == last) {
                ww[pos] = w;
            }
            gr.rename_chain(last, w);
        }
        gr.cn.pop();
        gr.make_indma();
    }

    // ct[c] is empty now; compact the component arena
    if c != gr.ind_last_cmpt() {
        let mut moved = gr.ct.pop().expect("component arena is empty");
        moved.set_ind(&mut gr.cn, c);
        gr.ct[c] = moved;
    } else {
        gr.ct.pop();
    }
    gr.update();

    debug!("component {} deleted: {} edges in {} chains, {} components left",
           c, gr.edgenum, gr.chain_num(), gr.cmpt_num());

    c
}
