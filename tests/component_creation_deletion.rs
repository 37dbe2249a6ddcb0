use chain_nets::transforms::{component_creation, component_deletion, vertex_merger};
use chain_nets::{integrity, BulkSlot, End, EndSlot, Graph};

#[test]
fn create_components() {
    let mut gr = Graph::new();

    let c0 = component_creation::create(&mut gr, 3);
    let c1 = component_creation::create(&mut gr, 5);

    assert_eq!((c0, c1), (0, 1));
    assert_eq!(gr.cmpt_num(), 2);
    assert_eq!(gr.edgenum, 8);
    assert_eq!(gr.chis.cn11.len(), 2);
    integrity::check(&gr);
}

#[test]
fn delete_single_chain_component() {
    let mut gr = Graph::new();
    component_creation::create(&mut gr, 3);
    component_creation::create(&mut gr, 5);
    component_creation::create(&mut gr, 2);

    component_deletion::delete(&mut gr, 1);

    assert_eq!(gr.cmpt_num(), 2);
    assert_eq!(gr.chain_num(), 2);
    assert_eq!(gr.edgenum, 5);
    for ind in 0..gr.edgenum {
        assert_eq!(gr.edge(ind).ind, ind);
    }
    integrity::check(&gr);
}

#[test]
fn delete_branched_component() {
    let mut gr = Graph::new();
    component_creation::create(&mut gr, 6);
    component_creation::create(&mut gr, 2);
    vertex_merger::merge_12(&mut gr, EndSlot::new(1, End::A), BulkSlot::new(0, 3));
    component_creation::create(&mut gr, 4);
    assert_eq!(gr.cmpt_num(), 2);

    // delete the branched component; the plain chain survives
    let branched = gr.cn[0].c;
    component_deletion::delete(&mut gr, branched);

    assert_eq!(gr.cmpt_num(), 1);
    assert_eq!(gr.chain_num(), 1);
    assert_eq!(gr.edgenum, 4);
    assert_eq!(gr.cn[0].length(), 4);
    integrity::check(&gr);
}

#[test]
fn delete_cycle_component() {
    let mut gr = Graph::new();
    component_creation::create(&mut gr, 4);
    component_creation::create(&mut gr, 3);
    vertex_merger::merge_11(&mut gr, EndSlot::new(0, End::A), EndSlot::new(0, End::B));

    let c = gr.cn[0].c;
    component_deletion::delete(&mut gr, c);

    assert_eq!(gr.cmpt_num(), 1);
    assert_eq!(gr.chain_num(), 1);
    assert_eq!(gr.edgenum, 3);
    assert_eq!(gr.cn[0].length(), 3);
    integrity::check(&gr);
}
