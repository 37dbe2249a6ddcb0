use chain_nets::transforms::vertex_merger;
use chain_nets::{integrity, BulkSlot, End, EndSlot, Graph};

#[test]
fn generate_and_count() {
    let mut gr = Graph::new();
    gr.generate_single_chain_components(4, 6);

    assert_eq!(gr.chain_num(), 4);
    assert_eq!(gr.cmpt_num(), 4);
    assert_eq!(gr.edgenum, 24);
    assert_eq!(gr.num_vertices(1), 8);
    assert!(gr.is_equilibrated());
    integrity::check(&gr);
}

#[test]
fn add_ready_made_component() {
    use chain_nets::Chain;

    let mut gr = Graph::new();
    gr.add_single_chain_component(2);

    let m = Chain::with_length(3, 1, 0);
    gr.add_component(vec![m]);

    assert_eq!(gr.chain_num(), 2);
    assert_eq!(gr.cmpt_num(), 2);
    assert_eq!(gr.edgenum, 5);
    // graph-wide edge ids were assigned past the existing ones
    assert_eq!(gr.cn[1].g[0].ind, 2);
    integrity::check(&gr);
}

#[test]
fn slot_queries_on_junction() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(5);
    gr.add_single_chain_component(3);
    vertex_merger::merge_12(&mut gr, EndSlot::new(1, End::A), BulkSlot::new(0, 2));

    let s = EndSlot::new(1, End::A);
    assert_eq!(gr.ngs_at(s).num(), 2);
    let inds = gr.ng_inds_at(s);
    assert_eq!(inds.len(), 2);
    for ind in inds {
        assert!(gr.edge(ind).ind < gr.edgenum);
    }

    // the junction edges are pairwise linked
    let i1 = gr.slot2ind(s);
    let i2 = gr.slot2ind(EndSlot::new(0, End::B));
    let link = gr.inds_to_chain_link(i1, i2).unwrap();
    assert_eq!(link[0], s);
    assert_eq!(link[1], EndSlot::new(0, End::B));
}

#[test]
fn vertices_adjacency_queries() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(5);

    assert!(gr.vertices_are_adjacent_aa(0, 2, 0, 3));
    assert!(gr.vertices_are_adjacent_aa(0, 2, 0, 2));
    assert!(!gr.vertices_are_adjacent_aa(0, 1, 0, 3));

    assert!(gr.vertices_are_adjacent_ea(EndSlot::new(0, End::A), 0, 1));
    assert!(!gr.vertices_are_adjacent_ea(EndSlot::new(0, End::A), 0, 2));
    assert!(gr.vertices_are_adjacent_ea(EndSlot::new(0, End::B), 0, 4));
}

#[test]
fn cycle_queries() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(5);
    gr.add_single_chain_component(3);
    vertex_merger::merge_11(
        &mut gr, EndSlot::new(1, End::A), EndSlot::new(1, End::B));
    vertex_merger::merge_10(&mut gr, EndSlot::new(0, End::B), 1);

    let s = EndSlot::new(0, End::B);
    assert!(!gr.zero_cycles_are_at_slot(3, s));
    assert_eq!(gr.one_cycle_chain_at_slot(3, s), Some(1));
    assert!(gr.is_same_cycle(EndSlot::new(1, End::A), EndSlot::new(1, End::B)));
    integrity::check(&gr);
}

#[test]
fn chain_arena_compaction_on_merge() {
    // merging chains in the middle of the arena makes the last chain take
    // over the vacated id; every slot referencing it follows
    let mut gr = Graph::new();
    gr.add_single_chain_component(4);
    gr.add_single_chain_component(3);
    gr.add_single_chain_component(5);
    gr.add_single_chain_component(2);

    vertex_merger::merge_11(
        &mut gr, EndSlot::new(0, End::A), EndSlot::new(1, End::B));

    assert_eq!(gr.chain_num(), 3);
    assert_eq!(gr.cmpt_num(), 3);
    // the ex-last chain of length 2 now lives under id 1
    assert_eq!(gr.cn[1].length(), 2);
    assert_eq!(gr.cn[0].length(), 7);
    integrity::check(&gr);
}

#[cfg(feature = "serde_support")]
#[test]
fn graph_serde_roundtrip() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(5);
    gr.add_single_chain_component(3);
    vertex_merger::merge_12(&mut gr, EndSlot::new(1, End::A), BulkSlot::new(0, 2));

    let s = serde_json::to_string(&gr).unwrap();
    let gr2: Graph = serde_json::from_str(&s).unwrap();

    assert_eq!(gr2.edgenum, gr.edgenum);
    assert_eq!(gr2.chain_num(), gr.chain_num());
    assert_eq!(gr2.chis, gr.chis);
    integrity::check(&gr2);
}
