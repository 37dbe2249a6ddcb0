use chain_nets::transforms::vertex_merger;
use chain_nets::vertices::VertexSlots;
use chain_nets::{integrity, BulkSlot, End, EndSlot, Graph};

#[test]
fn free_chain_view() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(3);

    assert_eq!(gr.num_vertices(1), 2);
    assert_eq!(gr.num_vertices(2), 2);
    assert_eq!(gr.num_vertices_total(), 4);

    let mut ids: Vec<_> = gr.vertices.iter().map(|v| v.ind).collect();
    ids.sort();
    assert_eq!(ids, (0..4).collect::<Vec<_>>());
}

// a single-edge chain with both ends free has two
// degree-1 vertices; attaching one end removes one of them
#[test]
fn leaf_count_after_attachment() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(4);
    gr.add_single_chain_component(1);
    assert_eq!(gr.cn[1].num_vertices(1), 2);

    vertex_merger::merge_12(&mut gr, EndSlot::new(1, End::A), BulkSlot::new(0, 2));

    assert_eq!(gr.cn[1].num_vertices(1), 1);
    integrity::check(&gr);
}

#[test]
fn junction_vertices_are_deduplicated() {
    // a 3-way junction appears once, regardless of how many member slots
    // could anchor it
    let mut gr = Graph::new();
    gr.add_single_chain_component(5);
    gr.add_single_chain_component(3);
    vertex_merger::merge_12(&mut gr, EndSlot::new(1, End::A), BulkSlot::new(0, 2));

    assert_eq!(gr.vertices.deg3.len(), 1);
    let v = &gr.vertices.deg3[0];
    match &v.slots {
        VertexSlots::Junction3(ss) => {
            assert!(ss.contains(&EndSlot::new(1, End::A)));
            assert!(ss.contains(&EndSlot::new(0, End::B)));
            assert!(ss.contains(&EndSlot::new(2, End::A)));
        }
        _ => panic!("not a junction vertex"),
    }
}

#[test]
fn cycle_boundary_vertex() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(4);
    vertex_merger::merge_11(&mut gr, EndSlot::new(0, End::A), EndSlot::new(0, End::B));

    assert_eq!(gr.vertices.deg0.len(), 1);
    assert_eq!(gr.num_vertices(0), 1);
    assert_eq!(gr.num_vertices(1), 0);
    // the single boundary vertex is found from either end slot
    let a = gr.vertices.from_end_slot(2, EndSlot::new(0, End::A));
    let b = gr.vertices.from_end_slot(2, EndSlot::new(0, End::B));
    assert!(a.is_some());
    assert_eq!(a, b);
}

#[test]
fn per_compartment_filtering() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(3);
    gr.add_single_chain_component(2);

    let v0 = gr.vertices.for_compartment(&gr.cn, 0);
    let v1 = gr.vertices.for_compartment(&gr.cn, 1);
    assert_eq!(v0.num_total(), 4);
    assert_eq!(v1.num_total(), 3);
}

#[test]
fn edge_vertices_cover_all_edges() {
    let mut gr = Graph::new();
    gr.add_single_chain_component(5);
    gr.add_single_chain_component(3);
    vertex_merger::merge_12(&mut gr, EndSlot::new(1, End::A), BulkSlot::new(0, 2));

    for ind in 0..gr.edgenum {
        let [s, t] = gr.edge_vertices(ind);
        assert!(s < gr.num_vertices_total());
        assert!(t < gr.num_vertices_total());
        assert_ne!(s, t);
    }
}

#[cfg(feature = "serde_support")]
mod json {
    use super::*;
    use chain_nets::io::to_json;

    // export of one linear chain of length 3
    #[test]
    fn minimal_export() {
        let mut gr = Graph::new();
        gr.add_single_chain_component(3);

        let mut buf = Vec::new();
        to_json(&gr, &mut buf).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        let vertices = doc["vertices"].as_array().unwrap();
        let links = doc["links"].as_array().unwrap();
        assert_eq!(vertices.len(), 4);
        assert_eq!(links.len(), 3);

        let mut ids: Vec<_> = vertices.iter()
            .map(|v| v["ind"].as_u64().unwrap())
            .collect();
        ids.sort();
        assert_eq!(ids, vec![0, 1, 2, 3]);

        let deg1 = vertices.iter()
            .filter(|v| v["d"].as_u64() == Some(1))
            .count();
        let deg2 = vertices.iter()
            .filter(|v| v["d"].as_u64() == Some(2))
            .count();
        assert_eq!((deg1, deg2), (2, 2));

        for l in links {
            assert!(l["source_id"].as_u64().unwrap() < 4);
            assert!(l["target_id"].as_u64().unwrap() < 4);
        }
    }
}
