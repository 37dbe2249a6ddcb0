use chain_nets::transforms::{vertex_merger, vertex_split};
use chain_nets::{integrity, BulkSlot, End, EndSlot, Graph};

fn sa(w: usize) -> EndSlot {
    EndSlot::new(w, End::A)
}

fn sb(w: usize) -> EndSlot {
    EndSlot::new(w, End::B)
}

#[test]
fn split_11_linear_disconnects() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(5);

    let cc = vertex_split::split_to_11(&mut gr, BulkSlot::new(0, 2));

    assert_eq!(gr.chain_num(), 2);
    assert_eq!(gr.cmpt_num(), 2);
    assert_ne!(cc[0], cc[1]);
    assert_eq!(gr.cn[0].length(), 2);
    assert_eq!(gr.cn[1].length(), 3);
    assert_eq!(gr.chis.cn11.len(), 2);
    integrity::check(&gr);
}

// merge (1,1) followed by split (1,1) at the produced vertex restores
// the two chains up to id renaming
#[test]
fn merge_then_split_roundtrip() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(2);
    gr.add_single_chain_component(3);

    vertex_merger::merge_11(&mut gr, sa(0), sb(1));
    assert_eq!(gr.chain_num(), 1);

    // the merged storage holds chain 1's edges first, so the produced
    // degree-2 vertex sits at position 3
    vertex_split::split_to_11(&mut gr, BulkSlot::new(0, 3));

    assert_eq!(gr.chain_num(), 2);
    assert_eq!(gr.cmpt_num(), 2);
    let mut lens: Vec<_> = gr.cn.iter().map(|m| m.length()).collect();
    lens.sort();
    assert_eq!(lens, vec![2, 3]);
    assert_eq!(gr.num_vertices(1), 4);
    integrity::check(&gr);
}

// splitting a disconnected cycle at its boundary linearises it
#[test]
fn split_11_cycle_boundary() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(4);
    vertex_merger::merge_11(&mut gr, sa(0), sb(0));
    assert_eq!(gr.num_vertices(0), 1);
    assert_eq!(gr.num_vertices(1), 0);

    vertex_split::split_to_11(&mut gr, BulkSlot::new(0, 0));

    assert_eq!(gr.chain_num(), 1);
    assert_eq!(gr.cmpt_num(), 1);
    assert!(!gr.cn[0].is_cycle());
    assert_eq!(gr.num_vertices(0), 0);
    assert_eq!(gr.num_vertices(1), 2);
    assert_eq!(gr.chis.cn11, vec![0]);
    integrity::check(&gr);
}

#[test]
fn split_11_cycle_bulk_rotates() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(4);
    vertex_merger::merge_11(&mut gr, sa(0), sb(0));

    vertex_split::split_to_11(&mut gr, BulkSlot::new(0, 2));

    assert_eq!(gr.chain_num(), 1);
    assert!(!gr.cn[0].is_cycle());
    // the cut position lands on the chain ends
    let inds: Vec<_> = gr.cn[0].g.iter().map(|e| e.ind).collect();
    assert_eq!(inds, vec![2, 3, 0, 1]);
    integrity::check(&gr);
}

#[test]
fn split_11_keeps_component_when_cycled() {
    // a connected cycle keeps the two halves of a split together
    let mut gr = Graph::new();
    gr.add_single_chain_component(9);
    vertex_merger::merge_22(&mut gr, BulkSlot::new(0, 1), BulkSlot::new(0, 7));
    let cycle = 2;
    assert!(gr.cn[cycle].is_connected_cycle());
    let ncmp = gr.cmpt_num();

    vertex_split::split_to_11(&mut gr, BulkSlot::new(cycle, 3));

    // no new component: the cycle held everything together
    assert_eq!(gr.cmpt_num(), ncmp);
    assert_eq!(gr.chain_num(), 4);
    integrity::check(&gr);
}

#[test]
fn split_12_dissolves_3way_junction() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(5);
    gr.add_single_chain_component(3);
    vertex_merger::merge_12(&mut gr, sa(1), BulkSlot::new(0, 2));
    assert_eq!(gr.num_vertices(3), 1);

    vertex_split::split_to_12(&mut gr, sa(1));

    // chain 1 is free again, the two other strands fused back
    assert_eq!(gr.num_vertices(3), 0);
    assert_eq!(gr.cmpt_num(), 2);
    assert_eq!(gr.chain_num(), 2);
    let mut lens: Vec<_> = gr.cn.iter().map(|m| m.length()).collect();
    lens.sort();
    assert_eq!(lens, vec![3, 5]);
    integrity::check(&gr);
}

#[test]
fn split_10_detaches_cycle() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(3);
    gr.add_single_chain_component(4);
    vertex_merger::merge_11(&mut gr, sa(1), sb(1));
    vertex_merger::merge_10(&mut gr, sb(0), 1);
    assert_eq!(gr.cmpt_num(), 1);

    vertex_split::split_to_10(&mut gr, sb(0));

    assert_eq!(gr.cmpt_num(), 2);
    assert!(gr.cn[1].is_disconnected_cycle());
    assert!(gr.ngs_at(sb(0)).is_empty());
    assert_eq!(gr.num_vertices(0), 1);
    integrity::check(&gr);
}

#[test]
fn split_13_reduces_4way_junction() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(5);
    gr.add_single_chain_component(3);
    vertex_merger::merge_12(&mut gr, sa(1), BulkSlot::new(0, 2));
    gr.add_single_chain_component(2);
    vertex_merger::merge_13(&mut gr, sa(3), sb(0));
    assert_eq!(gr.num_vertices(4), 1);

    vertex_split::split_to_13(&mut gr, sa(3));

    assert_eq!(gr.num_vertices(4), 0);
    assert_eq!(gr.num_vertices(3), 1);
    assert!(gr.ngs_at(sa(3)).is_empty());
    // chain 3 hangs free: its own component now
    assert_eq!(gr.cmpt_num(), 2);
    integrity::check(&gr);
}

#[test]
fn split_bb_divides_4way_junction() {
    // 4-way junction of four arms; cutting it pairwise leaves two linear
    // chains crossing nothing
    let mut gr = Graph::new();
    gr.add_single_chain_component(5);
    gr.add_single_chain_component(4);
    vertex_merger::merge_22(&mut gr, BulkSlot::new(0, 2), BulkSlot::new(1, 2));
    assert_eq!(gr.num_vertices(4), 1);
    assert_eq!(gr.chain_num(), 4);

    // keep the two halves of the original chain 0 together
    let s1 = sb(0);
    let s2 = gr.ngs_at(s1).iter().copied()
        .find(|u| u.w == 2)
        .expect("the second half of chain 0 is not at the junction");

    vertex_split::split_bb(&mut gr, s1, s2);

    assert_eq!(gr.num_vertices(4), 0);
    assert_eq!(gr.num_vertices(3), 0);
    assert_eq!(gr.cmpt_num(), 2);
    assert_eq!(gr.chain_num(), 2);
    let mut lens: Vec<_> = gr.cn.iter().map(|m| m.length()).collect();
    lens.sort();
    assert_eq!(lens, vec![4, 5]);
    integrity::check(&gr);
}
