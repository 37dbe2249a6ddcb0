use chain_nets::transforms::{edge_creation, edge_deletion, vertex_merger};
use chain_nets::{integrity, BulkSlot, End, EndSlot, Graph};

fn sa(w: usize) -> EndSlot {
    EndSlot::new(w, End::A)
}

fn sb(w: usize) -> EndSlot {
    EndSlot::new(w, End::B)
}

#[test]
fn create_in_existing_chain_at_ends_and_bulk() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(3);

    edge_creation::in_existing_chain(&mut gr, sa(0).into());
    assert_eq!(gr.cn[0].length(), 4);
    assert_eq!(gr.cn[0].g[0].ind, 3);

    edge_creation::in_existing_chain(&mut gr, sb(0).into());
    assert_eq!(gr.cn[0].length(), 5);
    assert_eq!(gr.cn[0].g[4].ind, 4);

    edge_creation::in_existing_chain(&mut gr, BulkSlot::new(0, 2).into());
    assert_eq!(gr.cn[0].length(), 6);
    assert_eq!(gr.cn[0].g[2].ind, 5);

    assert_eq!(gr.edgenum, 6);
    integrity::check(&gr);
}

#[test]
fn create_in_new_chain_at_bulk() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(4);

    let c = edge_creation::in_new_chain_at_bulk(&mut gr, BulkSlot::new(0, 2));

    assert_eq!(c, 0);
    assert_eq!(gr.edgenum, 5);
    assert_eq!(gr.cmpt_num(), 1);
    assert_eq!(gr.chain_num(), 3);
    assert_eq!(gr.num_vertices(3), 1);
    integrity::check(&gr);
}

#[test]
fn create_in_new_chain_at_junction() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(4);
    edge_creation::in_new_chain_at_bulk(&mut gr, BulkSlot::new(0, 2));

    let junction = sb(0);
    assert_eq!(gr.ngs_at(junction).num(), 2);
    edge_creation::in_new_chain_at_junction(&mut gr, junction);

    assert_eq!(gr.edgenum, 6);
    assert_eq!(gr.num_vertices(4), 1);
    assert_eq!(gr.num_vertices(3), 0);
    integrity::check(&gr);
}

#[test]
fn create_in_new_chain_at_cycle() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(3);
    vertex_merger::merge_11(&mut gr, sa(0), sb(0));

    edge_creation::in_new_chain_at_cycle(&mut gr, 0);

    assert_eq!(gr.edgenum, 4);
    assert_eq!(gr.cmpt_num(), 1);
    assert!(gr.cn[0].is_connected_cycle());
    assert_eq!(gr.num_vertices(3), 1);
    assert_eq!(gr.num_vertices(0), 0);
    integrity::check(&gr);
}

#[test]
fn delete_preserving_host_chain() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(5);

    let c = edge_deletion::preserving_host_chain(&mut gr, BulkSlot::new(0, 2));

    assert_eq!(c, 0);
    assert_eq!(gr.edgenum, 4);
    assert_eq!(gr.cn[0].length(), 4);
    // global ids stay dense
    for ind in 0..gr.edgenum {
        assert_eq!(gr.edge(ind).ind, ind);
    }
    integrity::check(&gr);
}

// edge deletion at a 3-way junction on a single-edge chain: the chain
// disappears, the junction becomes degree 2 and the ex-neighbors splice
#[test]
fn delete_with_host_chain_at_3way() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(6);
    gr.add_single_chain_component(1);
    vertex_merger::merge_12(&mut gr, sa(1), BulkSlot::new(0, 4));
    assert_eq!(gr.chain_num(), 3);
    assert_eq!(gr.num_vertices(3), 1);
    let edges_before = gr.edgenum;

    edge_deletion::deleting_host_chain(&mut gr, sa(1));

    assert_eq!(gr.edgenum, edges_before - 1);
    assert_eq!(gr.chain_num(), 1);
    assert_eq!(gr.cmpt_num(), 1);
    assert_eq!(gr.cn[0].length(), 6);
    assert_eq!(gr.num_vertices(3), 0);
    assert_eq!(gr.num_vertices(2), 5);
    integrity::check(&gr);
}

#[test]
fn delete_with_host_chain_at_4way() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(6);
    gr.add_single_chain_component(1);
    vertex_merger::merge_12(&mut gr, sa(1), BulkSlot::new(0, 4));
    gr.add_single_chain_component(1);
    vertex_merger::merge_13(&mut gr, sa(3), sa(1));
    assert_eq!(gr.num_vertices(4), 1);
    let edges_before = gr.edgenum;

    edge_deletion::deleting_host_chain(&mut gr, sa(3));

    assert_eq!(gr.edgenum, edges_before - 1);
    assert_eq!(gr.num_vertices(4), 0);
    assert_eq!(gr.num_vertices(3), 1);
    integrity::check(&gr);
}

// round trip: creating an edge in a new chain and deleting it restores
// the books exactly
#[test]
fn create_then_delete_roundtrip() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(4);

    let glm = gr.glm.clone();
    let gla = gr.gla.clone();
    let chis = gr.chis.clone();

    edge_creation::in_new_chain_at_bulk(&mut gr, BulkSlot::new(0, 2));
    let stub = gr.glm[gr.edgenum - 1];
    let e = gr.cn[stub].get_single_connected_end();
    edge_deletion::deleting_host_chain(&mut gr, EndSlot::new(stub, e));

    assert_eq!(gr.edgenum, 4);
    assert_eq!(gr.chain_num(), 1);
    assert_eq!(gr.glm, glm);
    assert_eq!(gr.gla, gla);
    assert_eq!(gr.chis, chis);
    integrity::check(&gr);
}
