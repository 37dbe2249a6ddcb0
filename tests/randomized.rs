//! Seeded random mutation sequences validated by the integrity checks.

use rand::prelude::*;
use rand_pcg::Pcg64;

use chain_nets::transforms::{
    component_creation, component_deletion, edge_creation, edge_deletion,
    vertex_merger, vertex_split,
};
use chain_nets::{integrity, BulkSlot, End, EndSlot, Graph};

fn random_free_ends(gr: &Graph, rng: &mut Pcg64) -> Option<(EndSlot, EndSlot)> {
    let mut free: Vec<EndSlot> = Vec::new();
    for m in &gr.cn {
        for e in End::BOTH {
            if m.ngs_at(e).is_empty() {
                free.push(EndSlot::new(m.idw, e));
            }
        }
    }
    if free.len() < 2 {
        return None;
    }
    let i = rng.gen_range(0..free.len());
    let j = rng.gen_range(0..free.len());
    if i == j {
        return None;
    }
    let (s1, s2) = (free[i], free[j]);
    if s1.w == s2.w && gr.cn[s1.w].length() < 2 {
        return None;
    }
    Some((s1, s2))
}

fn random_bulk(gr: &Graph, rng: &mut Pcg64) -> Option<BulkSlot> {
    let candidates: Vec<usize> = gr.cn.iter()
        .filter(|m| m.length() > 1)
        .map(|m| m.idw)
        .collect();
    if candidates.is_empty() {
        return None;
    }
    let w = candidates[rng.gen_range(0..candidates.len())];
    let a = rng.gen_range(1..gr.cn[w].length());
    Some(BulkSlot::new(w, a))
}

#[test]
fn random_mutation_sequence() {
    let mut rng = Pcg64::seed_from_u64(8745);
    let mut gr = Graph::new();
    gr.generate_single_chain_components(4, 5);
    integrity::check(&gr);

    for _ in 0..120 {
        match rng.gen_range(0..6) {
            0 => {
                if let Some((s1, s2)) = random_free_ends(&gr, &mut rng) {
                    vertex_merger::merge_11(&mut gr, s1, s2);
                }
            }
            1 => {
                if let Some(s) = random_bulk(&gr, &mut rng) {
                    // splitting inside a disconnected cycle is fine;
                    // anything else needs nothing special either
                    vertex_split::split_to_11(&mut gr, s);
                }
            }
            2 => {
                if let Some(s) = random_bulk(&gr, &mut rng) {
                    edge_creation::in_existing_chain(&mut gr, s.into());
                }
            }
            3 => {
                if let Some(s) = random_bulk(&gr, &mut rng) {
                    if gr.cn[s.w].is_shrinkable() {
                        edge_deletion::preserving_host_chain(&mut gr, s);
                    }
                }
            }
            4 => {
                component_creation::create(&mut gr, rng.gen_range(1..6));
            }
            _ => {
                if gr.cmpt_num() > 2 {
                    let c = rng.gen_range(0..gr.cmpt_num());
                    component_deletion::delete(&mut gr, c);
                }
            }
        }
        integrity::check(&gr);
        assert!(gr.is_equilibrated());
    }
}

#[test]
fn random_junction_churn() {
    // builds and dissolves 3-way junctions repeatedly
    let mut rng = Pcg64::seed_from_u64(1822);
    let mut gr = Graph::new();
    gr.generate_single_chain_components(3, 6);

    for _ in 0..40 {
        let made_junction = {
            let mut free = None;
            for m in &gr.cn {
                if let Some(e) = m.has_a_free_end() {
                    free = Some(EndSlot::new(m.idw, e));
                    break;
                }
            }
            match (free, random_bulk(&gr, &mut rng)) {
                (Some(s1), Some(b2)) if s1.w != b2.w => {
                    vertex_merger::merge_12(&mut gr, s1, b2);
                    Some(s1)
                }
                _ => None,
            }
        };
        integrity::check(&gr);

        if let Some(s1) = made_junction {
            if rng.gen_bool(0.7) {
                let ngs = gr.ngs_at(s1).clone();
                if ngs[0].w == ngs[1].w {
                    vertex_split::split_to_10(&mut gr, s1);
                } else {
                    vertex_split::split_to_12(&mut gr, s1);
                }
                integrity::check(&gr);
            }
        }
    }
}
