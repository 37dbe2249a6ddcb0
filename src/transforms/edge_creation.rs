//! Creation of single edges, either branching off a new chain or extending
//! an existing one.

use log::debug;

use crate::edge::Edge;
use crate::ends::{BulkSlot, End, EndSlot, Slot};
use crate::graph::Graph;
use crate::transforms::vertex_merger;
use crate::{ChId, CmpId, EgId};

/// Creates an edge in a fresh single-edge chain attached to the boundary
/// vertex of a disconnected cycle.
pub fn in_new_chain_at_cycle(gr: &mut Graph, w2: ChId) -> CmpId {
    debug!("edge creation with new chain at cycle boundary of {}", w2);
    assert!(gr.cn[w2].is_disconnected_cycle(),
            "chain {} is not a disconnected cycle", w2);

    gr.add_single_chain_component(1);
    let s1 = EndSlot::new(gr.ind_last_chain(), End::A);
    vertex_merger::merge_10(gr, s1, w2);

    host_component(gr)
}

/// Creates an edge in a fresh single-edge chain attached to a bulk vertex,
/// turning it into a three-way junction.
pub fn in_new_chain_at_bulk(gr: &mut Graph, s: BulkSlot) -> CmpId {
    debug!("edge creation with new chain at {}", s);
    assert!(s.a > 0 && s.a < gr.cn[s.w].length(),
            "position {} is not at a bulk vertex of chain {}", s.a, s.w);

    gr.add_single_chain_component(1);
    let s1 = EndSlot::new(gr.ind_last_chain(), End::A);
    vertex_merger::merge_12(gr, s1, s);

    host_component(gr)
}

/// Creates an edge in a fresh single-edge chain attached to a three-way
/// junction, turning it into a four-way junction.
pub fn in_new_chain_at_junction(gr: &mut Graph, s: EndSlot) -> CmpId {
    debug!("edge creation with new chain at {}", s);
    assert!(gr.ngs_at(s).num() == 2,
            "connection count {} at {} does not make a three-way junction",
            gr.ngs_at(s).num(), s);

    gr.add_single_chain_component(1);
    let s1 = EndSlot::new(gr.ind_last_chain(), End::A);
    vertex_merger::merge_13(gr, s1, s);

    host_component(gr)
}

fn host_component(gr: &Graph) -> CmpId {
    let u = gr.glm[gr.edgenum - 1];
    gr.cn[u].c
}

/// Creates an edge inside an existing chain at the position named by `s`.
///
/// End slots insert at the corresponding chain boundary, bulk slots inside.
/// The topology is unchanged: one degree-2 vertex is added.
pub fn in_existing_chain(gr: &mut Graph, s: Slot) -> CmpId {
    let w = s.w();
    let a: EgId = match s {
        Slot::End(u) => match u.e {
            End::A => 0,
            End::B => gr.cn[w].length(),
        },
        Slot::Bulk(u) => {
            assert!(u.a > 0 && u.a <= gr.cn[w].length(),
                    "vertex at {} of chain {} is not bulk", u.a, w);
            u.a
        }
    };
    debug!("edge creation in existing chain {} at {}", w, a);

    let eg = Edge::new(gr.edgenum);
    gr.edgenum += 1;
    gr.cn[w].insert_edge(eg, a);
    gr.cn[w].set_g_w();
    let c = gr.cn[w].c;
    gr.ct[c].append_edge(&mut gr.cn, w, a);

    gr.update();
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_free_end() {
        let mut gr = Graph::new();
        gr.add_single_chain_component(3);

        let c = in_existing_chain(&mut gr, EndSlot::new(0, End::A).into());
        assert_eq!(c, 0);
        assert_eq!(gr.edgenum, 4);
        assert_eq!(gr.cn[0].length(), 4);
        assert_eq!(gr.cn[0].g[0].ind, 3);
        assert_eq!(gr.ct[0].num_edges(), 4);
    }

    #[test]
    fn insert_at_bulk() {
        let mut gr = Graph::new();
        gr.add_single_chain_component(3);

        in_existing_chain(&mut gr, BulkSlot::new(0, 2).into());
        assert_eq!(gr.cn[0].length(), 4);
        assert_eq!(gr.cn[0].g[2].ind, 3);
        assert!(gr.is_equilibrated());
    }
}
