use chain_nets::transforms::vertex_merger::{self, core};
use chain_nets::{integrity, BulkSlot, End, EndSlot, Graph};

fn sa(w: usize) -> EndSlot {
    EndSlot::new(w, End::A)
}

fn sb(w: usize) -> EndSlot {
    EndSlot::new(w, End::B)
}

#[test]
fn core_parallel() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(2);
    gr.add_single_chain_component(3);

    core::parallel(&mut gr, 0, 1);

    assert_eq!(gr.chain_num(), 1);
    assert_eq!(gr.cmpt_num(), 1);
    assert_eq!(gr.cn[0].length(), 5);
    // w2's edges come first
    let inds: Vec<_> = gr.cn[0].g.iter().map(|e| e.ind).collect();
    assert_eq!(inds, vec![2, 3, 4, 0, 1]);
    assert!(gr.cn[0].g.iter().all(|e| e.points_forwards()));
    integrity::check(&gr);
}

#[test]
fn core_antiparallel_at_b() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(2);
    gr.add_single_chain_component(3);

    core::antiparallel(&mut gr, End::B, 0, 1);

    assert_eq!(gr.chain_num(), 1);
    assert_eq!(gr.cn[0].length(), 5);
    // w2 is reversed and appended
    let inds: Vec<_> = gr.cn[0].g.iter().map(|e| e.ind).collect();
    assert_eq!(inds, vec![0, 1, 4, 3, 2]);
    assert!(gr.cn[0].g[0].points_forwards());
    assert!(!gr.cn[0].g[2].points_forwards());
    integrity::check(&gr);
}

#[test]
fn core_antiparallel_at_a() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(2);
    gr.add_single_chain_component(3);

    core::antiparallel(&mut gr, End::A, 0, 1);

    assert_eq!(gr.chain_num(), 1);
    // w1 is reversed, w2 appended unreversed
    let inds: Vec<_> = gr.cn[0].g.iter().map(|e| e.ind).collect();
    assert_eq!(inds, vec![1, 0, 2, 3, 4]);
    assert!(!gr.cn[0].g[0].points_forwards());
    assert!(gr.cn[0].g[2].points_forwards());
    integrity::check(&gr);
}

#[test]
fn core_to_cycle() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(4);

    core::to_cycle(&mut gr, 0);

    assert!(gr.cn[0].is_disconnected_cycle());
    assert_eq!(gr.chis.cn22, vec![0]);
    assert!(gr.chis.cn11.is_empty());
    integrity::check(&gr);
}

// two single-chain components of length 5 and 7 merge into
// one linear chain of length 12
#[test]
fn merge_11_two_chains() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(5);
    gr.add_single_chain_component(7);

    let cc = vertex_merger::merge_11(&mut gr, sa(0), sb(1));

    assert_eq!(cc, [0, 1]);
    assert_eq!(gr.chain_num(), 1);
    assert_eq!(gr.cmpt_num(), 1);
    assert_eq!(gr.cn[0].length(), 12);
    assert!(!gr.cn[0].is_cycle());
    assert_eq!(gr.chis.cn11, vec![0]);
    assert_eq!(gr.num_vertices(1), 2);
    assert_eq!(gr.num_vertices(2), 11);
    integrity::check(&gr);
}

// closing a chain of length 4 into a disconnected cycle
#[test]
fn merge_11_to_cycle() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(4);

    vertex_merger::merge_11(&mut gr, sa(0), sb(0));

    assert_eq!(gr.cmpt_num(), 1);
    assert_eq!(gr.chain_num(), 1);
    assert_eq!(gr.cn[0].length(), 4);
    assert!(gr.cn[0].is_disconnected_cycle());
    assert_eq!(gr.chis.cn22, vec![0]);
    assert_eq!(gr.num_vertices(0), 1);
    assert_eq!(gr.num_vertices(1), 0);
    assert_eq!(gr.num_vertices(2), 3);
    integrity::check(&gr);
}

#[test]
fn merge_12_distinct_chains() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(5);
    gr.add_single_chain_component(3);

    vertex_merger::merge_12(&mut gr, sa(1), BulkSlot::new(0, 2));

    assert_eq!(gr.chain_num(), 3);
    assert_eq!(gr.cmpt_num(), 1);
    assert_eq!(gr.cn[0].length(), 2);
    assert_eq!(gr.cn[2].length(), 3);
    assert_eq!(gr.num_vertices(3), 1);
    assert_eq!(gr.num_vertices(1), 3);
    assert_eq!(gr.chis.cn13.len(), 3);

    // the three ends are mutually listed
    assert!(gr.ngs_at(sa(1)).has(sb(0)));
    assert!(gr.ngs_at(sa(1)).has(sa(2)));
    assert!(gr.ngs_at(sb(0)).has(sa(1)));
    assert!(gr.ngs_at(sb(0)).has(sa(2)));
    assert!(gr.ngs_at(sa(2)).has(sa(1)));
    assert!(gr.ngs_at(sa(2)).has(sb(0)));
    integrity::check(&gr);
}

#[test]
fn merge_12_self_creates_cycle() {
    // merging a chain's free end B onto its own bulk vertex leaves a cycle
    // hanging off the junction
    let mut gr = Graph::new();
    gr.add_single_chain_component(7);

    vertex_merger::merge_12(&mut gr, sb(0), BulkSlot::new(0, 4));

    assert_eq!(gr.chain_num(), 2);
    assert_eq!(gr.cmpt_num(), 1);
    assert_eq!(gr.cn[0].length(), 4);
    assert_eq!(gr.cn[1].length(), 3);
    assert!(gr.cn[1].is_connected_cycle());
    assert_eq!(gr.num_vertices(3), 1);
    integrity::check(&gr);
}

#[test]
fn merge_13_makes_4way_junction() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(5);
    gr.add_single_chain_component(3);
    vertex_merger::merge_12(&mut gr, sa(1), BulkSlot::new(0, 2));

    gr.add_single_chain_component(2);
    vertex_merger::merge_13(&mut gr, sa(3), sb(0));

    assert_eq!(gr.cmpt_num(), 1);
    assert_eq!(gr.num_vertices(4), 1);
    assert_eq!(gr.num_vertices(3), 0);
    assert_eq!(gr.chis.cn14.len(), 4);
    assert_eq!(gr.ngs_at(sb(0)).num(), 3);
    assert_eq!(gr.ngs_at(sa(3)).num(), 3);
    integrity::check(&gr);
}

#[test]
fn merge_22_self() {
    // self-merger of two bulk vertices of one chain: a connected cycle and
    // two arms around a 4-way junction
    let mut gr = Graph::new();
    gr.add_single_chain_component(9);

    vertex_merger::merge_22(&mut gr, BulkSlot::new(0, 1), BulkSlot::new(0, 7));

    assert_eq!(gr.chain_num(), 3);
    assert_eq!(gr.cmpt_num(), 1);
    assert_eq!(gr.num_vertices(4), 1);
    assert_eq!(gr.cn[0].length(), 1);
    assert_eq!(gr.cn[1].length(), 2);
    assert_eq!(gr.cn[2].length(), 6);
    assert!(gr.cn[2].is_connected_cycle());
    integrity::check(&gr);
}

#[test]
fn merge_22_two_chains() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(5);
    gr.add_single_chain_component(4);

    vertex_merger::merge_22(&mut gr, BulkSlot::new(0, 2), BulkSlot::new(1, 2));

    assert_eq!(gr.chain_num(), 4);
    assert_eq!(gr.cmpt_num(), 1);
    assert_eq!(gr.num_vertices(4), 1);
    assert_eq!(gr.num_vertices(1), 4);
    assert_eq!(gr.chis.cn14.len(), 4);
    integrity::check(&gr);
}

#[test]
fn merge_10_connects_cycle() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(3);
    gr.add_single_chain_component(4);
    vertex_merger::merge_11(&mut gr, sa(1), sb(1));  // cycle of 4

    vertex_merger::merge_10(&mut gr, sb(0), 1);

    assert_eq!(gr.cmpt_num(), 1);
    assert!(gr.cn[1].is_connected_cycle());
    assert_eq!(gr.num_vertices(3), 1);
    assert_eq!(gr.num_vertices(0), 0);
    assert_eq!(gr.chis.cn13.len(), 1);
    integrity::check(&gr);
}

#[test]
fn merge_00_two_cycles() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(3);
    gr.add_single_chain_component(4);
    vertex_merger::merge_11(&mut gr, sa(0), sb(0));
    vertex_merger::merge_11(&mut gr, sa(1), sb(1));

    vertex_merger::merge_00(&mut gr, 0, 1);

    assert_eq!(gr.cmpt_num(), 1);
    assert_eq!(gr.chain_num(), 2);
    assert_eq!(gr.num_vertices(4), 1);
    assert_eq!(gr.num_vertices(0), 0);
    assert!(gr.cn[0].is_connected_cycle());
    assert!(gr.cn[1].is_connected_cycle());
    integrity::check(&gr);
}

#[test]
fn merge_20_cycle_and_bulk() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(5);
    gr.add_single_chain_component(3);
    vertex_merger::merge_11(&mut gr, sa(1), sb(1));  // cycle of 3

    vertex_merger::merge_20(&mut gr, BulkSlot::new(0, 2), 1);

    assert_eq!(gr.cmpt_num(), 1);
    assert_eq!(gr.num_vertices(4), 1);
    assert!(gr.cn[1].is_connected_cycle());
    integrity::check(&gr);
}
