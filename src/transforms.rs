//! Topology-changing operations over the graph.
//!
//! Every top-level transform finishes with [`Graph::update`], so external
//! observers always see consistent books. Transforms never partially mutate:
//! contract violations panic before the first mutating call.
//!
//! [`Graph::update`]: crate::graph::Graph::update

pub mod vertex_merger;
pub mod vertex_split;
pub mod edge_creation;
pub mod edge_deletion;
pub mod component_creation;
pub mod component_deletion;
pub mod pulling;
