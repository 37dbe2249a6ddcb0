//! Integral tests of the graph internal structure.
//!
//! Each check panics with a message naming the offending element; all checks
//! together cover the universal invariants that must hold after every
//! top-level transform. Intended for test suites and debugging sessions
//! rather than hot paths.

use crate::chain::MIN_CYCLE_LENGTH;
use crate::ends::{End, EndSlot};
use crate::graph::Graph;
use crate::{ChId, EgId};

/// Runs all the structural checks.
pub fn check(gr: &Graph) {
    consistency(gr);
    components(gr);
    loops(gr);
    chain_ids(gr);
    edges(gr);
    vertex_numbers(gr);
}

/// Neighborhood symmetry and the edge id maps.
pub fn consistency(gr: &Graph) {
    for (i, m) in gr.cn.iter().enumerate() {
        for e in End::BOTH {
            for s in m.ngs_at(e) {
                assert!(s.w < gr.chain_num(),
                        "consistency: chain {} end {} lists nonexistent chain {}",
                        i, e, s.w);
                let back = EndSlot::new(i, e);
                assert!(gr.cn[s.w].ngs_at(s.e).has(back),
                        "consistency: {} is not listed back by {}", back, s);
                // only a cycle may reference its own chain
                assert!(s.w != i || m.is_cycle(),
                        "consistency: non-cycle chain {} references itself at {}", i, e);
            }
            assert!(!m.ngs_at(e).has_repeating_slots(),
                    "consistency: repeated slot in chain {} end {}", i, e);
        }
    }

    for j in 0..gr.edgenum {
        assert!(gr.cn[gr.glm[j]].g[gr.gla[j]].ind == j,
                "consistency: glm/gla roundtrip fails at ind {}", j);
    }
}

/// Component membership, ids and per-component edge records.
pub fn components(gr: &Graph) {
    if gr.chain_num() == 0 {
        return;
    }

    let max_c = gr.cn.iter().map(|m| m.c).max().unwrap();
    assert!(max_c == gr.ind_last_cmpt(),
            "components: max chain component id {} differs from count {}",
            max_c, gr.cmpt_num());
    let min_c = gr.cn.iter().map(|m| m.c).min().unwrap();
    assert!(min_c == 0, "components: min chain component id {} is not 0", min_c);

    for c in &gr.ct {
        for &w in &c.ww {
            assert!(gr.cn[w].c == c.ind,
                    "components: chain {} in ww of component {} carries c {}",
                    w, c.ind, gr.cn[w].c);
            for e in End::BOTH {
                for ng in gr.cn[w].ngs_at(e) {
                    assert!(gr.cn[ng.w].c == c.ind,
                            "components: neighbor {} of chain {} is outside component {}",
                            ng, w, c.ind);
                }
            }
        }

        // component-local chain ids are dense
        for idc in 0..c.num_chains() {
            assert!(c.ww.iter().any(|&w| gr.cn[w].idc == idc),
                    "components: idc {} not found in component {}", idc, c.ind);
        }

        // the edge table matches the chains
        let total: EgId = c.ww.iter().map(|&w| gr.cn[w].length()).sum();
        assert!(c.gl.len() == total,
                "components: gl size {} of component {} differs from edge total {}",
                c.gl.len(), c.ind, total);
        for (i, o) in c.gl.iter().enumerate() {
            let eg = &gr.cn[o.w].g[o.a];
            assert!(eg.indc == i,
                    "components: edge indc {} at gl slot {} of component {}",
                    eg.indc, i, c.ind);
            assert!(eg.ind == o.i,
                    "components: edge ind {} differs from gl record {} in component {}",
                    eg.ind, o.i, c.ind);
        }
    }

    for m in &gr.cn {
        for o in &m.g {
            assert!(o.c == m.c,
                    "components: edge {} carries c {} while chain {} has {}",
                    o.ind, o.c, m.idw, m.c);
        }
    }
}

/// No cycle chain shorter than the minimum.
pub fn loops(gr: &Graph) {
    for m in &gr.cn {
        assert!(!(m.is_cycle() && m.length() < MIN_CYCLE_LENGTH),
                "loops: forbidden short cycle in chain {}", m.idw);
    }
}

/// Chain arena ids are the chain positions.
pub fn chain_ids(gr: &Graph) {
    for (i, m) in gr.cn.iter().enumerate() {
        assert!(m.idw == i, "chain_ids: chain at {} carries idw {}", i, m.idw);
    }
}

/// Edge attribute ranges and in-chain positions; global ids are unique.
pub fn edges(gr: &Graph) {
    let mut egn: EgId = 0;
    let mut seen = vec![false; gr.edgenum];

    for m in &gr.cn {
        egn += m.length();
        for (a, o) in m.g.iter().enumerate() {
            assert!(o.w == m.idw,
                    "edges: edge {} carries w {} inside chain {}", o.ind, o.w, m.idw);
            assert!(o.indw == a,
                    "edges: edge {} carries indw {} at position {} of chain {}",
                    o.ind, o.indw, a, m.idw);
            o.check(gr.edgenum, gr.ct[m.c].num_edges(), m.length(),
                    gr.chain_num(), gr.cmpt_num());
            assert!(!seen[o.ind], "edges: duplicate edge ind {}", o.ind);
            seen[o.ind] = true;
        }
    }
    assert!(egn == gr.edgenum,
            "edges: total {} differs from edgenum {}", egn, gr.edgenum);
}

/// Vertex counts agree between the view, the components and the chains.
pub fn vertex_numbers(gr: &Graph) {
    for d in 0..=4usize {
        let by_cmpt: usize = gr.ct.iter().map(|c| c.num_vertices(d)).sum();
        assert!(by_cmpt == gr.vertices.num(d),
                "vertex_numbers: components give {} of degree {}, view has {}",
                by_cmpt, d, gr.vertices.num(d));

        let raw: usize = gr.cn.iter().map(|m| m.num_vertices(d)).sum();
        let by_chains = match d {
            3 => raw / 3,
            4 => raw / 4,
            _ => raw,
        };
        assert!(by_chains == gr.vertices.num(d),
                "vertex_numbers: chains give {} of degree {}, view has {}",
                by_chains, d, gr.vertices.num(d));
    }
}

/// Convenience check over the id of a single chain.
pub fn chain_is_sound(gr: &Graph, w: ChId) {
    let m = &gr.cn[w];
    assert!(m.length() >= 1, "chain {} is empty", w);
    for e in End::BOTH {
        for s in m.ngs_at(e) {
            assert!(gr.cn[s.w].ngs_at(s.e).has(EndSlot::new(w, e)),
                    "chain {}: asymmetric link at end {}", w, e);
        }
    }
}
