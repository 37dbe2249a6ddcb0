//! Creation of whole components.

use log::debug;

use crate::graph::Graph;
use crate::{CmpId, EgId};

/// Installs a new disconnected linear chain of `len` edges as a component.
///
/// Returns the id of the created component.
pub fn create(gr: &mut Graph, len: EgId) -> CmpId {
    debug!("component creation: single chain, size {}", len);

    gr.add_single_chain_component(len);
    gr.ind_last_cmpt()
}
